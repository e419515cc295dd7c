// ==========================================
// ARK 服务器配置工作台 - 预设模型
// ==========================================
// 职责: 配置预设（批量覆写）与等级预设（经验生成参数）
// ==========================================

use crate::domain::document::ConfigDocument;
use serde::{Deserialize, Serialize};

// ==========================================
// Preset - 配置预设
// ==========================================
// 一份具名的"部分文档"：只覆写其中列出的 (section, key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub description: String,
    pub settings: ConfigDocument,
}

impl Preset {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            settings: ConfigDocument::new(),
        }
    }

    /// 追加一条覆写项
    pub fn with_setting(mut self, section: &str, key: &str, value: &str) -> Self {
        self.settings.set(section, key, value);
        self
    }

    /// 覆写项数量
    pub fn setting_count(&self) -> usize {
        self.settings.entry_count()
    }
}

// ==========================================
// LevelPreset - 等级预设
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelPreset {
    pub name: String,
    pub description: String,
    /// 野生恐龙最高等级
    pub max_wild_level: u32,
    /// 驯服后可额外提升的等级数
    pub max_tamed_levels: u32,
    /// 玩家最高等级
    pub max_player_level: u32,
    pub difficulty_offset: f64,
    pub override_official_difficulty: f64,
}

impl LevelPreset {
    /// 恐龙经验表长度 = 野生上限 + 驯服追加
    pub fn total_dino_levels(&self) -> u32 {
        self.max_wild_level + self.max_tamed_levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_builder() {
        let preset = Preset::new("Test", "desc")
            .with_setting("ServerSettings", "XPMultiplier", "2.0")
            .with_setting("ServerSettings", "XPMultiplier", "3.0")
            .with_setting("Other", "K", "V");

        assert_eq!(preset.setting_count(), 2);
        assert_eq!(preset.settings.get("ServerSettings", "XPMultiplier"), Some("3.0"));
    }
}
