// ==========================================
// ARK 服务器配置工作台 - 内置预设
// ==========================================
// 职责: 倍率预设（GameUserSettings.ini [ServerSettings]）与等级预设
// 说明: 编译期数据，首次访问时构建并缓存
// ==========================================

use crate::domain::preset::{LevelPreset, Preset};
use std::sync::OnceLock;

const SERVER_SETTINGS: &str = "ServerSettings";

/// 预设名称
pub mod preset_names {
    pub const OFFICIAL: &str = "Official Rates";
    pub const BOOSTED_2X: &str = "Slightly Boosted (2x)";
    pub const BOOSTED_5X: &str = "Boosted (5x)";
    pub const BOOSTED_10X: &str = "Highly Boosted (10x)";
    pub const PVP: &str = "PvP Focused";
    pub const PVE: &str = "PvE Relaxed";
}

static PRESETS: OnceLock<Vec<Preset>> = OnceLock::new();
static LEVEL_PRESETS: OnceLock<Vec<LevelPreset>> = OnceLock::new();

/// 内置倍率预设
pub fn builtin_presets() -> &'static [Preset] {
    PRESETS.get_or_init(build_presets)
}

/// 内置等级预设
pub fn builtin_level_presets() -> &'static [LevelPreset] {
    LEVEL_PRESETS.get_or_init(build_level_presets)
}

/// 按名称查找等级预设（忽略大小写）
pub fn find_level_preset(name: &str) -> Option<&'static LevelPreset> {
    builtin_level_presets()
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

fn rates(name: &str, description: &str, value: &str) -> Preset {
    Preset::new(name, description)
        .with_setting(SERVER_SETTINGS, "XPMultiplier", value)
        .with_setting(SERVER_SETTINGS, "TamingSpeedMultiplier", value)
        .with_setting(SERVER_SETTINGS, "HarvestAmountMultiplier", value)
}

fn build_presets() -> Vec<Preset> {
    vec![
        rates(preset_names::OFFICIAL, "Official server rates (1x everything)", "1.0")
            .with_setting(SERVER_SETTINGS, "EggHatchSpeedMultiplier", "1.0")
            .with_setting(SERVER_SETTINGS, "BabyMatureSpeedMultiplier", "1.0"),
        rates(preset_names::BOOSTED_2X, "Slightly faster progression (2x rates)", "2.0")
            .with_setting(SERVER_SETTINGS, "EggHatchSpeedMultiplier", "2.0")
            .with_setting(SERVER_SETTINGS, "BabyMatureSpeedMultiplier", "2.0"),
        rates(preset_names::BOOSTED_5X, "Faster progression for casual play (5x rates)", "5.0")
            .with_setting(SERVER_SETTINGS, "EggHatchSpeedMultiplier", "10.0")
            .with_setting(SERVER_SETTINGS, "BabyMatureSpeedMultiplier", "10.0")
            .with_setting(SERVER_SETTINGS, "MatingIntervalMultiplier", "0.5"),
        rates(preset_names::BOOSTED_10X, "Very fast progression (10x rates)", "10.0")
            .with_setting(SERVER_SETTINGS, "EggHatchSpeedMultiplier", "20.0")
            .with_setting(SERVER_SETTINGS, "BabyMatureSpeedMultiplier", "20.0")
            .with_setting(SERVER_SETTINGS, "MatingIntervalMultiplier", "0.2"),
        Preset::new(preset_names::PVP, "Balanced for PvP with faster rebuilding")
            .with_setting(SERVER_SETTINGS, "ServerPVE", "False")
            .with_setting(SERVER_SETTINGS, "XPMultiplier", "3.0")
            .with_setting(SERVER_SETTINGS, "TamingSpeedMultiplier", "5.0")
            .with_setting(SERVER_SETTINGS, "HarvestAmountMultiplier", "3.0")
            .with_setting(SERVER_SETTINGS, "StructureDamageMultiplier", "1.5")
            .with_setting(SERVER_SETTINGS, "AllowThirdPersonPlayer", "False")
            .with_setting(SERVER_SETTINGS, "EnablePvPGamma", "False"),
        Preset::new(preset_names::PVE, "Casual PvE experience")
            .with_setting(SERVER_SETTINGS, "ServerPVE", "True")
            .with_setting(SERVER_SETTINGS, "XPMultiplier", "5.0")
            .with_setting(SERVER_SETTINGS, "TamingSpeedMultiplier", "7.0")
            .with_setting(SERVER_SETTINGS, "HarvestAmountMultiplier", "3.0")
            .with_setting(SERVER_SETTINGS, "EggHatchSpeedMultiplier", "15.0")
            .with_setting(SERVER_SETTINGS, "BabyMatureSpeedMultiplier", "15.0")
            .with_setting(SERVER_SETTINGS, "AllowThirdPersonPlayer", "True"),
    ]
}

fn level(
    name: &str,
    description: &str,
    max_wild_level: u32,
    max_tamed_levels: u32,
    max_player_level: u32,
    override_official_difficulty: f64,
) -> LevelPreset {
    LevelPreset {
        name: name.to_string(),
        description: description.to_string(),
        max_wild_level,
        max_tamed_levels,
        max_player_level,
        difficulty_offset: 1.0,
        override_official_difficulty,
    }
}

fn build_level_presets() -> Vec<LevelPreset> {
    vec![
        level("Default (150)", "Official ARK settings with max wild level 150", 150, 88, 105, 5.0),
        level("Boosted (200)", "Slightly boosted with max wild level 200", 200, 88, 135, 6.67),
        level("High (300)", "High difficulty with max wild level 300", 300, 100, 155, 10.0),
        level("Extreme (600)", "Extreme difficulty with max wild level 600", 600, 150, 200, 20.0),
        level("Ultra (800)", "Ultra difficulty with max wild level 800", 800, 180, 250, 26.67),
        level("Maximum (1000)", "Maximum difficulty with max wild level 1000", 1000, 200, 300, 33.34),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets() {
        let presets = builtin_presets();
        assert_eq!(presets.len(), 6);
        let official = presets.iter().find(|p| p.name == preset_names::OFFICIAL).unwrap();
        assert_eq!(official.setting_count(), 5);
        let pvp = presets.iter().find(|p| p.name == preset_names::PVP).unwrap();
        assert_eq!(pvp.settings.get(SERVER_SETTINGS, "ServerPVE"), Some("False"));
    }

    #[test]
    fn test_level_presets_match_difficulty_rule() {
        for preset in builtin_level_presets() {
            let expected = (preset.max_wild_level as f64 / 30.0 * 100.0).ceil() / 100.0;
            assert!((preset.override_official_difficulty - expected).abs() < 1e-9, "{}", preset.name);
        }
    }

    #[test]
    fn test_find_level_preset() {
        let preset = find_level_preset("high (300)").unwrap();
        assert_eq!(preset.total_dino_levels(), 400);
        assert!(find_level_preset("Nope").is_none());
    }
}
