// ==========================================
// ARK 服务器配置工作台 - 常用模组目录
// ==========================================
// 职责: 常用模组及其 Game.ini 可调参数（编译期数据）
// ==========================================

use crate::domain::mod_setting::{ModDefinition, ModSetting};
use crate::domain::types::FieldType;
use std::sync::OnceLock;

/// 自定义条目的模组ID（无预置参数）
pub const CUSTOM_MOD_ID: &str = "custom";

static MODS: OnceLock<Vec<ModDefinition>> = OnceLock::new();

/// 内置模组目录
pub fn builtin_mods() -> &'static [ModDefinition] {
    MODS.get_or_init(build_mods)
}

/// 按名称或描述搜索（忽略大小写，空串返回全部）
pub fn search_mods(query: &str) -> Vec<&'static ModDefinition> {
    let needle = query.trim().to_lowercase();
    builtin_mods()
        .iter()
        .filter(|m| {
            needle.is_empty()
                || m.name.to_lowercase().contains(&needle)
                || m.description.to_lowercase().contains(&needle)
        })
        .collect()
}

fn number(key: &'static str, label: &'static str, default: &'static str) -> ModSetting {
    ModSetting::new(key, label, FieldType::Number, default)
}

fn boolean(key: &'static str, label: &'static str, default: &'static str) -> ModSetting {
    ModSetting::new(key, label, FieldType::Boolean, default)
}

fn build_mods() -> Vec<ModDefinition> {
    vec![
        ModDefinition {
            id: "structures_plus",
            name: "Structures Plus (S+)",
            steam_id: Some("731604991"),
            description: "Advanced building mod with enhanced structures",
            settings: vec![
                number("StructurePickupTime", "Structure Pickup Time", "30")
                    .with_range(0.0, 3600.0, 1.0)
                    .with_description("Seconds allowed to pick up placed structures (0 = disabled)"),
                boolean("DisablePickupWhenDamaged", "Disable Pickup When Damaged", "True")
                    .with_description("Prevent picking up damaged structures"),
                boolean("AllowIntegratedSPlusandVanilla", "Allow Integrated S+ and Vanilla", "True")
                    .with_description("Allow both S+ and vanilla structure types"),
                number("StackSizeMultiplier", "Stack Size Multiplier", "1")
                    .with_range(1.0, 100.0, 1.0)
                    .with_description("Multiplier for item stack sizes"),
            ],
        },
        ModDefinition {
            id: "awesome_spyglass",
            name: "Awesome Spyglass",
            steam_id: Some("1404697612"),
            description: "Enhanced spyglass showing dino stats",
            settings: vec![
                number("AwesomeSpyglassRange", "Spyglass Range", "10000")
                    .with_range(1000.0, 50000.0, 1.0)
                    .with_description("Maximum range for spyglass detection"),
                boolean("ShowWildStats", "Show Wild Dino Stats", "True")
                    .with_description("Display stats for wild dinosaurs"),
                boolean("ShowTamedStats", "Show Tamed Dino Stats", "True")
                    .with_description("Display stats for tamed dinosaurs"),
            ],
        },
        ModDefinition {
            id: "super_spyglass",
            name: "Super Spyglass",
            steam_id: Some("793605978"),
            description: "View dino levels, stats, and colors",
            settings: vec![
                boolean("SuperSpyglassShowLevel", "Show Level", "True")
                    .with_description("Display creature level"),
                boolean("SuperSpyglassShowColors", "Show Colors", "True")
                    .with_description("Display creature color regions"),
            ],
        },
        ModDefinition {
            id: "dino_storage",
            name: "Dino Storage v2",
            steam_id: Some("1609138312"),
            description: "Store dinos as soul balls",
            settings: vec![
                number("DinoStorageSoulTrapMaxLevel", "Max Trap Level", "450")
                    .with_range(1.0, 1000.0, 1.0)
                    .with_description("Maximum dino level that can be stored"),
                boolean("DinoStorageAllowWild", "Allow Wild Capture", "False")
                    .with_description("Allow capturing wild dinosaurs"),
                number("DinoStorageCooldown", "Release Cooldown", "0")
                    .with_range(0.0, 3600.0, 1.0)
                    .with_description("Cooldown in seconds after releasing a dino"),
            ],
        },
        ModDefinition {
            id: "kraken_better_dinos",
            name: "Kraken's Better Dinos",
            steam_id: Some("1565015734"),
            description: "Enhanced dino abilities and behaviors",
            settings: vec![
                number("KBDDinoHarvestMultiplier", "Dino Harvest Multiplier", "1.0")
                    .with_range(0.1, 10.0, 0.1)
                    .with_description("Multiplier for dino harvesting"),
                number("KBDDamageMultiplier", "Dino Damage Multiplier", "1.0")
                    .with_range(0.1, 10.0, 0.1)
                    .with_description("Multiplier for dino damage"),
            ],
        },
        ModDefinition {
            id: "stack_mod",
            name: "ARK Additions: Stacking Mod",
            steam_id: Some("1998020277"),
            description: "Configurable stack sizes for items",
            settings: vec![
                number("ConfigOverrideItemMaxQuantity", "Global Stack Multiplier", "1")
                    .with_range(1.0, 1000.0, 1.0)
                    .with_description("Global multiplier for all stack sizes"),
                number("ResourceStackMultiplier", "Resource Stack Multiplier", "1")
                    .with_range(1.0, 1000.0, 1.0)
                    .with_description("Multiplier for resource stack sizes"),
            ],
        },
        ModDefinition {
            id: "hg_stacking",
            name: "HG Stacking Mod 10000-90",
            steam_id: Some("849985737"),
            description: "Increased stack sizes with weight reduction",
            settings: vec![
                boolean("HGStackingEnabled", "Stacking Enabled", "True")
                    .with_description("Enable the stacking modifications"),
                number("HGWeightMultiplier", "Weight Reduction", "0.1")
                    .with_range(0.01, 1.0, 0.01)
                    .with_description("Weight multiplier for stacked items"),
            ],
        },
        ModDefinition {
            id: CUSTOM_MOD_ID,
            name: "Custom Mod Settings",
            steam_id: None,
            description: "Add your own custom mod settings",
            settings: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mod_ids_unique() {
        let ids: HashSet<&str> = builtin_mods().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), builtin_mods().len());
    }

    #[test]
    fn test_search_mods() {
        assert_eq!(search_mods("").len(), builtin_mods().len());
        let found = search_mods("spyglass");
        assert_eq!(found.len(), 2);
        assert!(search_mods("no such mod").is_empty());
    }

    #[test]
    fn test_default_number_settings_in_range() {
        for setting in builtin_mods().iter().flat_map(|m| m.settings.iter()) {
            if setting.setting_type != FieldType::Number {
                continue;
            }
            let value: f64 = setting.default_value.parse().unwrap();
            assert!(value >= setting.min.unwrap() && value <= setting.max.unwrap(), "{}", setting.key);
        }
    }
}
