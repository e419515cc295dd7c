// ==========================================
// 经验进度生成集成测试
// ==========================================
// 测试范围:
// 1. 各曲线 totalXP 严格递增且等于前缀和
// 2. 线性曲线样例
// 3. 修改单项后的前向重算、删除后的重新编号
// 4. 等级预设生成的完整片段
// ==========================================

use ark_config_studio::config::{builtin_level_presets, find_level_preset};
use ark_config_studio::domain::types::CurveType;
use ark_config_studio::engine::ProgressionGenerator;

#[test]
fn test_total_xp_strictly_increasing_prefix_sum() {
    let gen = ProgressionGenerator::new();
    for curve in CurveType::ALL {
        for multiplier in [0.5, 1.0, 2.5, 10.0] {
            let table = gen.generate_progression(120, curve, multiplier).unwrap();
            assert_eq!(table.len(), 120);
            assert!(table.is_consistent());

            let mut running = 0u64;
            let mut previous_total = 0u64;
            for (idx, entry) in table.entries().iter().enumerate() {
                running += entry.xp_for_level;
                assert_eq!(entry.level as usize, idx + 1);
                assert_eq!(entry.total_xp, running, "{} x{} level {}", curve, multiplier, entry.level);
                assert!(entry.total_xp > previous_total, "{} x{} level {}", curve, multiplier, entry.level);
                previous_total = entry.total_xp;
            }
        }
    }
}

#[test]
fn test_linear_example() {
    let table = ProgressionGenerator::new()
        .generate_progression(5, CurveType::Linear, 1.0)
        .unwrap();
    let xp: Vec<u64> = table.xp_values().collect();
    let totals: Vec<u64> = table.entries().iter().map(|e| e.total_xp).collect();
    assert_eq!(xp, vec![100, 200, 300, 400, 500]);
    assert_eq!(totals, vec![100, 300, 600, 1000, 1500]);
}

#[test]
fn test_edit_propagates_forward_only() {
    let mut table = ProgressionGenerator::new()
        .generate_progression(5, CurveType::Linear, 1.0)
        .unwrap();

    table.set_xp_for_level(1, 999).unwrap();

    let totals: Vec<u64> = table.entries().iter().map(|e| e.total_xp).collect();
    assert_eq!(totals, vec![100, 1099, 1399, 1799, 2299]);
    assert!(table.is_consistent());
}

#[test]
fn test_remove_renumbers_and_recomputes() {
    let mut table = ProgressionGenerator::new()
        .generate_progression(5, CurveType::Linear, 1.0)
        .unwrap();

    let removed = table.remove(0).unwrap();
    assert_eq!(removed.xp_for_level, 100);

    let levels: Vec<u32> = table.entries().iter().map(|e| e.level).collect();
    let totals: Vec<u64> = table.entries().iter().map(|e| e.total_xp).collect();
    assert_eq!(levels, vec![1, 2, 3, 4]);
    assert_eq!(totals, vec![200, 500, 900, 1400]);

    let appended = table.append_next().unwrap();
    assert_eq!(appended.level, 5);
    assert_eq!(appended.xp_for_level, 550);
    assert_eq!(appended.total_xp, 1950);
    assert!(table.remove(9).is_err());
}

#[test]
fn test_level_preset_fragment_layout() {
    let gen = ProgressionGenerator::new();
    let preset = find_level_preset("Boosted (200)").unwrap();
    let config = gen
        .generate_level_config(preset, CurveType::Official, CurveType::Linear, 1.0)
        .unwrap();

    assert_eq!(config.player_levels.len(), 135);
    assert_eq!(config.dino_levels.len(), 288);
    assert_eq!(config.engram_points.len(), 135);
    assert_eq!(
        config.override_max_experience_points_player,
        config.player_levels.max_total_xp()
    );

    let lines: Vec<&str> = config.ini_code.lines().collect();
    assert_eq!(lines[0], "[/script/shootergame.shootergamemode]");
    assert_eq!(lines[2], "; === Max Level Settings ===");
    assert_eq!(
        lines[3],
        format!("OverrideMaxExperiencePointsPlayer={}", config.override_max_experience_points_player)
    );
    assert_eq!(
        lines[4],
        format!("OverrideMaxExperiencePointsDino={}", config.override_max_experience_points_dino)
    );
    let ramps = lines
        .iter()
        .filter(|l| l.starts_with("LevelExperienceRampOverrides=(ExperiencePointsForLevel="))
        .count();
    assert_eq!(ramps, 135 + 288);
    let engrams = lines
        .iter()
        .filter(|l| l.starts_with("OverridePlayerLevelEngramPoints="))
        .count();
    assert_eq!(engrams, 135);
    assert_eq!(lines[lines.len() - 2], "; DifficultyOffset=1.0");
    assert_eq!(lines[lines.len() - 1], "; OverrideOfficialDifficulty=6.67");
    assert!(!config.ini_code.ends_with('\n'));
}

#[test]
fn test_parse_level_entries_reads_back_rendered_tables() {
    let gen = ProgressionGenerator::new();
    for preset in builtin_level_presets().iter().take(2) {
        let config = gen
            .generate_level_config(preset, CurveType::Exponential, CurveType::Exponential, 1.0)
            .unwrap();
        let parsed = gen.parse_level_entries(&config.ini_code).unwrap();
        let expected: Vec<u64> = config
            .player_levels
            .xp_values()
            .chain(config.dino_levels.xp_values())
            .collect();
        assert_eq!(parsed.xp_values().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn test_high_wild_presets_on_official_curve_have_exact_totals() {
    let gen = ProgressionGenerator::new();
    for name in ["Extreme (600)", "Ultra (800)", "Maximum (1000)"] {
        let preset = find_level_preset(name).unwrap();
        let config = gen
            .generate_level_config(preset, CurveType::Official, CurveType::Official, 1.0)
            .unwrap();

        let dino_sum: u64 = config.dino_levels.xp_values().sum();
        assert_eq!(config.override_max_experience_points_dino, dino_sum, "{}", name);
        assert!(config.dino_levels.is_consistent(), "{}", name);
        assert!(config
            .dino_levels
            .xp_values()
            .all(|xp| xp <= ark_config_studio::engine::progression::MAX_LEVEL_XP));
        assert!(config.ini_code.contains(&format!("OverrideMaxExperiencePointsDino={}", dino_sum)));
        assert!(!config.ini_code.contains(&u64::MAX.to_string()), "{}", name);
    }
}
