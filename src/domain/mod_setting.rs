// ==========================================
// ARK 服务器配置工作台 - 模组设置模型
// ==========================================
// 职责: 常用模组及其可调参数的静态描述
// ==========================================

use crate::domain::types::FieldType;
use serde::Serialize;

/// 模组的单个可调参数
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModSetting {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub setting_type: FieldType,
    pub default_value: &'static str,
    pub description: Option<&'static str>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl ModSetting {
    pub fn new(
        key: &'static str,
        label: &'static str,
        setting_type: FieldType,
        default_value: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            setting_type,
            default_value,
            description: None,
            min: None,
            max: None,
            step: None,
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64, step: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self.step = Some(step);
        self
    }
}

/// 模组定义
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub steam_id: Option<&'static str>,
    pub description: &'static str,
    pub settings: Vec<ModSetting>,
}

impl ModDefinition {
    pub fn setting(&self, key: &str) -> Option<&ModSetting> {
        self.settings.iter().find(|s| s.key == key)
    }
}
