// ==========================================
// ARK 服务器配置工作台 - 经验进度生成引擎
// ==========================================
// 职责: 按曲线生成每级经验与累计经验、技能点表，并渲染为 Game.ini 片段
// 不变量: ProgressionTable 的 level 从 1 连续、total_xp 为前缀和
// ==========================================
// 曲线公式:
// - linear:      floor(level * 100 * m)
// - exponential: floor(level^2.1 * 10 * m)
// - flat:        floor(500 * m)
// - official:    level < 表长 查表; 之后 floor(表尾 * 1.12^(level - 表长 + 1) * m)
// 单级经验上限 MAX_LEVEL_XP（游戏以 int32 存储经验），累计值按 checked 加法计算
// ==========================================

use crate::domain::preset::LevelPreset;
use crate::domain::progression::{ProgressionEntry, ProgressionTable};
use crate::domain::types::CurveType;
use crate::engine::error::{EngineError, EngineResult};
use serde::Serialize;
use tracing::{debug, instrument};

/// 官方经验参考表（下标即等级）
pub const OFFICIAL_PLAYER_XP: [u64; 30] = [
    0, 5, 20, 40, 70, 120, 190, 270, 380, 530, 700, 900, 1150, 1450, 1800, 2200, 2650, 3150, 3700,
    4350, 5050, 5800, 6600, 7500, 8500, 9600, 10800, 12100, 13500, 15000,
];

/// 官方曲线外推增长率
const OFFICIAL_GROWTH_RATE: f64 = 1.12;

/// 技能点默认参数
pub const DEFAULT_ENGRAM_BASE: u32 = 8;
pub const DEFAULT_ENGRAM_GROWTH: f64 = 1.1;

/// 追加等级时的最小经验值
pub const MIN_APPENDED_XP: u64 = 100;

/// 生成或追加时的单级经验上限（int32 最大值）
///
/// u32 个等级 × 该上限 < 2^63，生成的累计经验不会溢出 u64
pub const MAX_LEVEL_XP: u64 = i32::MAX as u64;

const RAMP_KEY: &str = "LevelExperienceRampOverrides";
const RAMP_PREFIX: &str = "LevelExperienceRampOverrides=(ExperiencePointsForLevel=";
const GAME_MODE_HEADER: &str = "[/script/shootergame.shootergamemode]";

// ==========================================
// GeneratedLevelConfig - 生成结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLevelConfig {
    pub player_levels: ProgressionTable,
    pub dino_levels: ProgressionTable,
    pub override_max_experience_points_player: u64,
    pub override_max_experience_points_dino: u64,
    pub engram_points: Vec<u32>,
    pub ini_code: String,
}

// ==========================================
// ProgressionGenerator - 经验进度生成引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressionGenerator;

impl ProgressionGenerator {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 曲线与表生成
    // ==========================================

    /// 单级所需经验
    ///
    /// # 参数
    /// - `level`: 等级（从 1 开始）
    /// - `curve`: 曲线类型
    /// - `multiplier`: 经验倍率
    pub fn xp_for(&self, level: u32, curve: CurveType, multiplier: f64) -> u64 {
        let level_f = level as f64;
        let raw = match curve {
            CurveType::Linear => level_f * 100.0 * multiplier,
            CurveType::Exponential => level_f.powf(2.1) * 10.0 * multiplier,
            CurveType::Flat => 500.0 * multiplier,
            CurveType::Official => {
                let len = OFFICIAL_PLAYER_XP.len();
                match OFFICIAL_PLAYER_XP.get(level as usize) {
                    Some(&xp) => xp as f64 * multiplier,
                    None => {
                        let last = OFFICIAL_PLAYER_XP[len - 1] as f64;
                        let extra = level as f64 - len as f64 + 1.0;
                        last * OFFICIAL_GROWTH_RATE.powf(extra) * multiplier
                    }
                }
            }
        };
        // 负数/NaN 为 0，超上限截断
        raw.floor().clamp(0.0, MAX_LEVEL_XP as f64) as u64
    }

    /// 生成 1..=max_level 的经验表
    ///
    /// # 返回
    /// - Err(EngineError::InvalidValue): 倍率不是正的有限数，或累计经验溢出
    #[instrument(skip(self))]
    pub fn generate_progression(
        &self,
        max_level: u32,
        curve: CurveType,
        multiplier: f64,
    ) -> EngineResult<ProgressionTable> {
        check_multiplier(multiplier)?;
        let table = ProgressionTable::from_xp_values(
            (1..=max_level).map(|level| self.xp_for(level, curve, multiplier)),
        )
        .ok_or_else(total_overflow)?;
        debug!(levels = table.len(), max_total_xp = table.max_total_xp(), "经验表已生成");
        Ok(table)
    }

    /// 每级技能点
    ///
    /// - level ≤ 10: base
    /// - ≤ 30: floor(base * 1.5)
    /// - ≤ 60: floor(base * 2)
    /// - ≤ 100: floor(base * 3)
    /// - > 100: floor(base * 4 * growth^((level - 100) / 50))
    pub fn engram_points(&self, max_level: u32, base: u32, growth: f64) -> Vec<u32> {
        let base_f = base as f64;
        (1..=max_level)
            .map(|level| match level {
                0..=10 => base,
                11..=30 => (base_f * 1.5).floor() as u32,
                31..=60 => (base_f * 2.0).floor() as u32,
                61..=100 => (base_f * 3.0).floor() as u32,
                _ => {
                    let exponent = (level - 100) as f64 / 50.0;
                    (base_f * 4.0 * growth.powf(exponent)).floor() as u32
                }
            })
            .collect()
    }

    // ==========================================
    // 难度
    // ==========================================

    /// 由期望的野生最高等级推算难度
    ///
    /// 野生最高等级 = 30 * OverrideOfficialDifficulty
    ///
    /// # 返回
    /// (difficulty_offset, override_official_difficulty)
    pub fn difficulty_for_level(&self, desired_max_wild: u32) -> (f64, f64) {
        let override_difficulty = (desired_max_wild as f64 / 30.0 * 100.0).ceil() / 100.0;
        (1.0, override_difficulty.max(1.0))
    }

    /// 自定义等级预设
    pub fn custom_preset(
        &self,
        max_player_level: u32,
        max_wild_level: u32,
        max_tamed_levels: u32,
    ) -> LevelPreset {
        let (difficulty_offset, override_official_difficulty) =
            self.difficulty_for_level(max_wild_level);
        LevelPreset {
            name: "Custom".to_string(),
            description: "Custom level configuration".to_string(),
            max_wild_level,
            max_tamed_levels,
            max_player_level,
            difficulty_offset,
            override_official_difficulty,
        }
    }

    // ==========================================
    // 完整配置
    // ==========================================

    /// 根据等级预设生成玩家表、恐龙表、技能点与片段文本
    #[instrument(skip(self, preset), fields(preset = %preset.name))]
    pub fn generate_level_config(
        &self,
        preset: &LevelPreset,
        player_curve: CurveType,
        dino_curve: CurveType,
        multiplier: f64,
    ) -> EngineResult<GeneratedLevelConfig> {
        let player_levels =
            self.generate_progression(preset.max_player_level, player_curve, multiplier)?;
        let dino_levels =
            self.generate_progression(preset.total_dino_levels(), dino_curve, multiplier)?;
        let engram_points = self.engram_points(
            preset.max_player_level,
            DEFAULT_ENGRAM_BASE,
            DEFAULT_ENGRAM_GROWTH,
        );
        Ok(self.assemble(preset, player_levels, dino_levels, engram_points))
    }

    /// 以（可能已手工编辑的）经验表组装配置并重新渲染片段
    pub fn assemble(
        &self,
        preset: &LevelPreset,
        player_levels: ProgressionTable,
        dino_levels: ProgressionTable,
        engram_points: Vec<u32>,
    ) -> GeneratedLevelConfig {
        let override_max_experience_points_player = player_levels.max_total_xp();
        let override_max_experience_points_dino = dino_levels.max_total_xp();
        let ini_code = render_fragment(
            &player_levels,
            &dino_levels,
            &engram_points,
            preset.difficulty_offset,
            preset.override_official_difficulty,
        );
        GeneratedLevelConfig {
            player_levels,
            dino_levels,
            override_max_experience_points_player,
            override_max_experience_points_dino,
            engram_points,
            ini_code,
        }
    }

    /// 从 INI 文本中按出现顺序提取经验条目
    ///
    /// # 返回
    /// - Err(EngineError::InvalidValue): 文本中的经验累计超出 u64
    pub fn parse_level_entries(&self, text: &str) -> EngineResult<ProgressionTable> {
        ProgressionTable::from_xp_values(scan_ramp_values(text)).ok_or_else(total_overflow)
    }
}

pub(crate) fn total_overflow() -> EngineError {
    EngineError::InvalidValue {
        field: "total_xp".to_string(),
        message: "累计经验超出 u64 范围".to_string(),
    }
}

fn check_multiplier(multiplier: f64) -> EngineResult<()> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidValue {
            field: "multiplier".to_string(),
            message: format!("经验倍率必须为正数，实际为 {}", multiplier),
        })
    }
}

/// 扫描 `LevelExperienceRampOverrides=(ExperiencePointsForLevel=<数字>` 出现处
fn scan_ramp_values(text: &str) -> Vec<u64> {
    let mut values = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(RAMP_PREFIX) {
        let after = &rest[pos + RAMP_PREFIX.len()..];
        let digits_len = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());
        if digits_len > 0 {
            if let Ok(value) = after[..digits_len].parse::<u64>() {
                values.push(value);
            }
        }
        rest = &after[digits_len..];
    }
    values
}

/// 浮点输出至少带一位小数
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// 渲染 Game.ini 经验片段（行间以 `\n` 连接，无结尾换行）
pub fn render_fragment(
    player_levels: &ProgressionTable,
    dino_levels: &ProgressionTable,
    engram_points: &[u32],
    difficulty_offset: f64,
    override_official_difficulty: f64,
) -> String {
    let mut lines: Vec<String> = vec![
        GAME_MODE_HEADER.to_string(),
        String::new(),
        "; === Max Level Settings ===".to_string(),
        format!(
            "OverrideMaxExperiencePointsPlayer={}",
            player_levels.max_total_xp()
        ),
        format!("OverrideMaxExperiencePointsDino={}", dino_levels.max_total_xp()),
        String::new(),
        "; === Player Level XP Requirements ===".to_string(),
    ];
    lines.extend(player_levels.entries().iter().map(ramp_line));

    lines.push(String::new());
    lines.push("; === Dino Level XP Requirements ===".to_string());
    lines.extend(dino_levels.entries().iter().map(ramp_line));

    lines.push(String::new());
    lines.push("; === Engram Points Per Level ===".to_string());
    lines.extend(
        engram_points
            .iter()
            .map(|points| format!("OverridePlayerLevelEngramPoints={}", points)),
    );

    lines.push(String::new());
    lines.push("; === GameUserSettings.ini Difficulty Settings ===".to_string());
    lines.push("; Add these to your GameUserSettings.ini under [ServerSettings]:".to_string());
    lines.push(format!("; DifficultyOffset={}", format_decimal(difficulty_offset)));
    lines.push(format!(
        "; OverrideOfficialDifficulty={}",
        format_decimal(override_official_difficulty)
    ));

    lines.join("\n")
}

fn ramp_line(entry: &ProgressionEntry) -> String {
    format!(
        "{}=(ExperiencePointsForLevel={},Alpha=1.0)",
        RAMP_KEY, entry.xp_for_level
    )
}

// ==========================================
// ProgressionTable 增删改
// ==========================================
// 修改第 k 项: k 及之后的 total_xp 前向重算，之前的不动
// 删除: 后续 level 重新编号，total_xp 从头重算
// 追加: xp = max(floor(上一项 * 1.1), 100)，不超过 MAX_LEVEL_XP
// 累计溢出时返回错误，表保持修改前的状态
impl ProgressionTable {
    /// 修改指定下标的单级经验
    pub fn set_xp_for_level(&mut self, index: usize, xp: u64) -> EngineResult<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange { index, len })?;
        let previous = std::mem::replace(&mut entry.xp_for_level, xp);
        if let Err(e) = self.recompute_from(index) {
            self.entries[index].xp_for_level = previous;
            return Err(e);
        }
        Ok(())
    }

    /// 删除指定下标的条目
    pub fn remove(&mut self, index: usize) -> EngineResult<ProgressionEntry> {
        let len = self.entries.len();
        if index >= len {
            return Err(EngineError::IndexOutOfRange { index, len });
        }
        let removed = self.entries.remove(index);
        for (idx, entry) in self.entries.iter_mut().enumerate() {
            entry.level = idx as u32 + 1;
        }
        // 删除只会让前缀和变小，不会溢出
        self.recompute_from(0)?;
        Ok(removed)
    }

    /// 在末尾追加一级
    pub fn append_next(&mut self) -> EngineResult<ProgressionEntry> {
        let (level, prev_xp, prev_total) = match self.entries.last() {
            Some(last) => (last.level + 1, last.xp_for_level, last.total_xp),
            None => (1, 0, 0),
        };
        let xp = ((prev_xp as f64 * 1.1).floor() as u64).clamp(MIN_APPENDED_XP, MAX_LEVEL_XP);
        let entry = ProgressionEntry {
            level,
            xp_for_level: xp,
            total_xp: prev_total.checked_add(xp).ok_or_else(total_overflow)?,
        };
        self.entries.push(entry);
        Ok(entry)
    }

    /// 先算出全部新累计值再写回，溢出时不改动表
    fn recompute_from(&mut self, start: usize) -> EngineResult<()> {
        let mut total = match start {
            0 => 0,
            _ => self.entries[start - 1].total_xp,
        };
        let mut totals = Vec::with_capacity(self.entries.len().saturating_sub(start));
        for entry in self.entries.iter().skip(start) {
            total = total.checked_add(entry.xp_for_level).ok_or_else(total_overflow)?;
            totals.push(total);
        }
        for (entry, total) in self.entries.iter_mut().skip(start).zip(totals) {
            entry.total_xp = total;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_example() {
        let gen = ProgressionGenerator::new();
        let table = gen.generate_progression(5, CurveType::Linear, 1.0).unwrap();
        let xp: Vec<u64> = table.xp_values().collect();
        let totals: Vec<u64> = table.entries().iter().map(|e| e.total_xp).collect();
        assert_eq!(xp, vec![100, 200, 300, 400, 500]);
        assert_eq!(totals, vec![100, 300, 600, 1000, 1500]);
    }

    #[test]
    fn test_official_lookup_and_extrapolation() {
        let gen = ProgressionGenerator::new();
        assert_eq!(gen.xp_for(1, CurveType::Official, 1.0), 5);
        assert_eq!(gen.xp_for(29, CurveType::Official, 1.0), 15000);
        // 30 → 15000 * 1.12
        assert_eq!(gen.xp_for(30, CurveType::Official, 1.0), 16800);
        assert_eq!(gen.xp_for(10, CurveType::Official, 2.0), 1400);
    }

    #[test]
    fn test_flat_and_exponential() {
        let gen = ProgressionGenerator::new();
        assert_eq!(gen.xp_for(7, CurveType::Flat, 1.5), 750);
        assert_eq!(gen.xp_for(1, CurveType::Exponential, 1.0), 10);
        assert_eq!(gen.xp_for(2, CurveType::Exponential, 1.0), 42);
    }

    #[test]
    fn test_invalid_multiplier() {
        let gen = ProgressionGenerator::new();
        assert!(gen.generate_progression(5, CurveType::Linear, 0.0).is_err());
        assert!(gen.generate_progression(5, CurveType::Linear, f64::NAN).is_err());
    }

    #[test]
    fn test_engram_schedule_steps() {
        let gen = ProgressionGenerator::new();
        let points = gen.engram_points(150, 8, 1.1);
        assert_eq!(points[0], 8);
        assert_eq!(points[9], 8);
        assert_eq!(points[10], 12);
        assert_eq!(points[30], 16);
        assert_eq!(points[60], 24);
        assert_eq!(points[99], 24);
        // level 150: floor(32 * 1.1^1)
        assert_eq!(points[149], 35);
    }

    #[test]
    fn test_difficulty_for_level() {
        let gen = ProgressionGenerator::new();
        assert_eq!(gen.difficulty_for_level(150), (1.0, 5.0));
        assert_eq!(gen.difficulty_for_level(200), (1.0, 6.67));
        assert_eq!(gen.difficulty_for_level(10), (1.0, 1.0));
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(6.67), "6.67");
    }

    #[test]
    fn test_scan_ramp_values() {
        let text = "LevelExperienceRampOverrides=(ExperiencePointsForLevel=10,Alpha=1.0)\n\
                    LevelExperienceRampOverrides=(ExperiencePointsForLevel=,Alpha=1.0)\n\
                    LevelExperienceRampOverrides=(ExperiencePointsForLevel=25,Alpha=1.0)";
        assert_eq!(scan_ramp_values(text), vec![10, 25]);
    }

    #[test]
    fn test_append_to_empty_table() {
        let mut table = ProgressionTable::new();
        let entry = table.append_next().unwrap();
        assert_eq!(
            entry,
            ProgressionEntry {
                level: 1,
                xp_for_level: 100,
                total_xp: 100
            }
        );
    }

    #[test]
    fn test_official_extrapolation_is_capped() {
        let gen = ProgressionGenerator::new();
        // 外推在 134 级达到上限，336 级起原始值已超出 u64
        assert!(gen.xp_for(133, CurveType::Official, 1.0) < MAX_LEVEL_XP);
        assert_eq!(gen.xp_for(134, CurveType::Official, 1.0), MAX_LEVEL_XP);
        assert_eq!(gen.xp_for(336, CurveType::Official, 1.0), MAX_LEVEL_XP);
        assert_eq!(gen.xp_for(750, CurveType::Official, 1.0), MAX_LEVEL_XP);
        assert_eq!(gen.xp_for(5000, CurveType::Official, 10.0), MAX_LEVEL_XP);
    }

    #[test]
    fn test_long_official_table_stays_consistent() {
        let gen = ProgressionGenerator::new();
        let table = gen.generate_progression(750, CurveType::Official, 1.0).unwrap();
        assert_eq!(table.len(), 750);
        assert!(table.is_consistent());
        assert!(table.max_total_xp() < u64::MAX);
        assert!(table
            .entries()
            .windows(2)
            .all(|pair| pair[1].total_xp > pair[0].total_xp));
    }

    #[test]
    fn test_set_xp_overflow_leaves_table_untouched() {
        let mut table = ProgressionTable::from_xp_values([100, 200]).unwrap();
        let before = table.clone();
        assert!(matches!(
            table.set_xp_for_level(0, u64::MAX),
            Err(EngineError::InvalidValue { .. })
        ));
        assert_eq!(table, before);
    }

    #[test]
    fn test_append_overflow_is_error() {
        let mut table = ProgressionTable::from_xp_values([u64::MAX]).unwrap();
        assert!(table.append_next().is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_append_after_huge_level_is_capped() {
        let mut table = ProgressionTable::from_xp_values([u64::MAX / 2]).unwrap();
        let entry = table.append_next().unwrap();
        assert_eq!(entry.xp_for_level, MAX_LEVEL_XP);
        assert!(table.is_consistent());
    }

    #[test]
    fn test_parse_level_entries_rejects_overflowing_text() {
        let gen = ProgressionGenerator::new();
        let text = format!(
            "{p}{max},Alpha=1.0)\n{p}1,Alpha=1.0)",
            p = RAMP_PREFIX,
            max = u64::MAX
        );
        assert!(gen.parse_level_entries(&text).is_err());
    }
}
