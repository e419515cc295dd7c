// ==========================================
// ARK 服务器配置工作台 - 字段模型
// ==========================================
// 职责: 描述可视化编辑器中的字段与分组
// 说明: 每个 FieldSchema 唯一对应文档中的一个 (section, key) 槽位
// ==========================================

use crate::domain::types::FieldType;
use serde::Serialize;

/// 下拉选项
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldOption {
    pub label: &'static str,
    pub value: &'static str,
}

// ==========================================
// FieldSchema - 字段定义
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub section: &'static str,
    pub default_value: Option<&'static str>,
    pub description: Option<&'static str>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub options: Vec<FieldOption>,
}

impl FieldSchema {
    /// 创建字段（其余属性通过 with_* 补充）
    pub fn new(
        key: &'static str,
        label: &'static str,
        field_type: FieldType,
        section: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            field_type,
            section,
            default_value: None,
            description: None,
            min: None,
            max: None,
            step: None,
            options: Vec::new(),
        }
    }

    pub fn with_default(mut self, value: &'static str) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_options(mut self, options: &[FieldOption]) -> Self {
        self.options = options.to_vec();
        self
    }

    /// 是否对应 (section, key) 槽位
    pub fn matches(&self, section: &str, key: &str) -> bool {
        self.section == section && self.key == key
    }

    /// 校验字段取值
    ///
    /// # 规则
    /// - number: 必须可解析为 f64，且落在 [min, max]（如有）
    /// - boolean: True / False（不区分大小写）
    /// - select: 必须是选项值之一（无选项时不限制）
    /// - text / color: 不校验
    ///
    /// # 返回
    /// - Err(String): 违规原因
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self.field_type {
            FieldType::Number => {
                let parsed: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("{} 需要数字，实际为 '{}'", self.key, value))?;
                if !parsed.is_finite() {
                    return Err(format!("{} 的取值不是有限数字: {}", self.key, value));
                }
                if let Some(min) = self.min {
                    if parsed < min {
                        return Err(format!("{} 不能小于 {}（实际 {}）", self.key, min, parsed));
                    }
                }
                if let Some(max) = self.max {
                    if parsed > max {
                        return Err(format!("{} 不能大于 {}（实际 {}）", self.key, max, parsed));
                    }
                }
                Ok(())
            }
            FieldType::Boolean => {
                if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
                    Ok(())
                } else {
                    Err(format!("{} 只接受 True/False，实际为 '{}'", self.key, value))
                }
            }
            FieldType::Select => {
                if self.options.is_empty() || self.options.iter().any(|o| o.value == value) {
                    Ok(())
                } else {
                    Err(format!("{} 的取值 '{}' 不在可选范围内", self.key, value))
                }
            }
            FieldType::Text | FieldType::Color => Ok(()),
        }
    }
}

// ==========================================
// ConfigGroup - 展示分组
// ==========================================
// 仅用于展示，不是存储概念
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigGroup {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldSchema>,
}

impl ConfigGroup {
    pub fn new(title: &'static str, description: &'static str, fields: Vec<FieldSchema>) -> Self {
        Self {
            title,
            description,
            fields,
        }
    }

    /// 带默认值的字段
    pub fn fields_with_default(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(|f| f.default_value.is_some())
    }
}
