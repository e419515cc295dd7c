// ==========================================
// ARK 服务器配置工作台 - 等级经验 API
// ==========================================
// 职责: 等级预设选择、经验表生成与增删改、片段渲染与追加到 Game.ini
// 规则: 每次修改后用当前表重新渲染片段，追加的永远是界面上看到的内容
// ==========================================

use crate::api::config_editor_api::ConfigEditorApi;
use crate::api::error::{ApiError, ApiResult};
use crate::config::presets::{builtin_level_presets, find_level_preset};
use crate::domain::preset::LevelPreset;
use crate::domain::progression::{ProgressionEntry, ProgressionTable};
use crate::domain::types::CurveType;
use crate::engine::error::EngineError;
use crate::engine::progression::{total_overflow, GeneratedLevelConfig, ProgressionGenerator};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{debug, info, instrument};

/// 经验表选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelTable {
    Player,
    Dino,
}

/// 生成参数
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionSettings {
    pub preset: LevelPreset,
    pub player_curve: CurveType,
    pub dino_curve: CurveType,
    pub multiplier: f64,
}

struct ProgressionState {
    settings: ProgressionSettings,
    config: GeneratedLevelConfig,
}

// ==========================================
// ProgressionApi - 等级经验 API
// ==========================================
pub struct ProgressionApi {
    generator: ProgressionGenerator,
    state: Mutex<ProgressionState>,
}

impl ProgressionApi {
    /// 以第一个内置等级预设、官方曲线、1.0 倍率初始化
    pub fn new() -> ApiResult<Self> {
        let preset = builtin_level_presets()
            .first()
            .cloned()
            .ok_or_else(|| ApiError::InternalError("没有内置等级预设".to_string()))?;
        let settings = ProgressionSettings {
            preset,
            player_curve: CurveType::Official,
            dino_curve: CurveType::Official,
            multiplier: 1.0,
        };
        let generator = ProgressionGenerator::new();
        let config = generate(&generator, &settings)?;
        Ok(Self {
            generator,
            state: Mutex::new(ProgressionState { settings, config }),
        })
    }

    pub fn level_presets(&self) -> &'static [LevelPreset] {
        builtin_level_presets()
    }

    pub fn settings(&self) -> ApiResult<ProgressionSettings> {
        Ok(self.lock()?.settings.clone())
    }

    /// 当前生成结果
    pub fn current(&self) -> ApiResult<GeneratedLevelConfig> {
        Ok(self.lock()?.config.clone())
    }

    /// 当前片段文本
    pub fn render(&self) -> ApiResult<String> {
        Ok(self.lock()?.config.ini_code.clone())
    }

    // ==========================================
    // 生成参数
    // ==========================================

    /// 选择内置等级预设并重新生成
    #[instrument(skip(self))]
    pub fn select_preset(&self, name: &str) -> ApiResult<GeneratedLevelConfig> {
        let preset = find_level_preset(name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("等级预设 '{}' 不存在", name)))?;
        self.regenerate(|settings| settings.preset = preset)
    }

    /// 自定义等级上限并重新生成（难度按野生上限推算）
    #[instrument(skip(self))]
    pub fn set_custom_levels(
        &self,
        max_player_level: u32,
        max_wild_level: u32,
        max_tamed_levels: u32,
    ) -> ApiResult<GeneratedLevelConfig> {
        if max_player_level == 0 || max_wild_level == 0 {
            return Err(ApiError::InvalidInput(
                "玩家与野生最高等级必须大于 0".to_string(),
            ));
        }
        let preset =
            self.generator
                .custom_preset(max_player_level, max_wild_level, max_tamed_levels);
        self.regenerate(|settings| settings.preset = preset)
    }

    /// 设置曲线与倍率并重新生成
    ///
    /// # 返回
    /// - Err(Engine(InvalidValue)): 倍率不是正的有限数，参数保持原样
    pub fn set_curves(
        &self,
        player_curve: CurveType,
        dino_curve: CurveType,
        multiplier: f64,
    ) -> ApiResult<GeneratedLevelConfig> {
        self.regenerate(|settings| {
            settings.player_curve = player_curve;
            settings.dino_curve = dino_curve;
            settings.multiplier = multiplier;
        })
    }

    fn regenerate<F>(&self, change: F) -> ApiResult<GeneratedLevelConfig>
    where
        F: FnOnce(&mut ProgressionSettings),
    {
        let mut state = self.lock()?;
        let mut settings = state.settings.clone();
        change(&mut settings);
        let config = generate(&self.generator, &settings)?;
        info!(
            preset = %settings.preset.name,
            player_levels = config.player_levels.len(),
            dino_levels = config.dino_levels.len(),
            "经验配置已重新生成"
        );
        state.settings = settings;
        state.config = config.clone();
        Ok(config)
    }

    // ==========================================
    // 经验表增删改
    // ==========================================

    /// 修改某一级所需经验（index 从 0 开始）
    pub fn update_xp(&self, table: LevelTable, index: usize, xp: u64) -> ApiResult<GeneratedLevelConfig> {
        self.edit_table(table, |t| t.set_xp_for_level(index, xp))
    }

    /// 删除某一级（后续等级重新编号）
    pub fn remove_level(&self, table: LevelTable, index: usize) -> ApiResult<GeneratedLevelConfig> {
        self.edit_table(table, |t| t.remove(index).map(|_| ()))
    }

    /// 在末尾追加一级
    pub fn append_level(&self, table: LevelTable) -> ApiResult<ProgressionEntry> {
        let mut appended = None;
        self.edit_table(table, |t| {
            appended = Some(t.append_next()?);
            Ok(())
        })?;
        appended.ok_or_else(|| ApiError::InternalError("追加等级失败".to_string()))
    }

    /// 从 INI 文本导入经验表
    ///
    /// 按出现顺序: 前 max_player_level 条为玩家表，其余为恐龙表（无剩余时恐龙表不变）
    ///
    /// # 返回
    /// - Err(Engine(EmptyTable)): 文本中没有经验条目
    pub fn import_fragment(&self, text: &str) -> ApiResult<GeneratedLevelConfig> {
        let parsed = self.generator.parse_level_entries(text)?;
        if parsed.is_empty() {
            return Err(EngineError::EmptyTable.into());
        }

        let mut state = self.lock()?;
        let player_count = state.settings.preset.max_player_level as usize;
        let values: Vec<u64> = parsed.xp_values().collect();
        let split = player_count.min(values.len());

        let player = ProgressionTable::from_xp_values(values[..split].iter().copied())
            .ok_or_else(total_overflow)?;
        let dino = if split < values.len() {
            ProgressionTable::from_xp_values(values[split..].iter().copied())
                .ok_or_else(total_overflow)?
        } else {
            state.config.dino_levels.clone()
        };
        debug!(player = player.len(), dino = dino.len(), "已从文本导入经验表");

        let engram = state.config.engram_points.clone();
        state.config = self
            .generator
            .assemble(&state.settings.preset, player, dino, engram);
        Ok(state.config.clone())
    }

    fn edit_table<F>(&self, table: LevelTable, edit: F) -> ApiResult<GeneratedLevelConfig>
    where
        F: FnOnce(&mut ProgressionTable) -> Result<(), EngineError>,
    {
        let mut state = self.lock()?;
        let mut player = state.config.player_levels.clone();
        let mut dino = state.config.dino_levels.clone();
        match table {
            LevelTable::Player => edit(&mut player)?,
            LevelTable::Dino => edit(&mut dino)?,
        }
        let engram = state.config.engram_points.clone();
        state.config = self
            .generator
            .assemble(&state.settings.preset, player, dino, engram);
        Ok(state.config.clone())
    }

    // ==========================================
    // 追加到 Game.ini
    // ==========================================

    /// 把当前片段追加到编辑器中打开的 Game.ini
    pub async fn apply_to_editor(&self, editor: &ConfigEditorApi) -> ApiResult<()> {
        let fragment = self.render()?;
        editor.apply_fragment(&fragment).await?;
        info!(bytes = fragment.len(), "经验片段已追加到 Game.ini");
        Ok(())
    }

    fn lock(&self) -> ApiResult<std::sync::MutexGuard<'_, ProgressionState>> {
        self.state
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))
    }
}

fn generate(
    generator: &ProgressionGenerator,
    settings: &ProgressionSettings,
) -> ApiResult<GeneratedLevelConfig> {
    Ok(generator.generate_level_config(
        &settings.preset,
        settings.player_curve,
        settings.dino_curve,
        settings.multiplier,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_preset() {
        let api = ProgressionApi::new().unwrap();
        let config = api.current().unwrap();
        assert_eq!(config.player_levels.len(), 105);
        assert_eq!(config.dino_levels.len(), 150 + 88);
        assert_eq!(config.engram_points.len(), 105);
        assert!(config.ini_code.contains("OverrideOfficialDifficulty=5.0"));
    }

    #[test]
    fn test_select_unknown_preset() {
        let api = ProgressionApi::new().unwrap();
        assert!(matches!(api.select_preset("Nope"), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_invalid_multiplier_keeps_settings() {
        let api = ProgressionApi::new().unwrap();
        let err = api
            .set_curves(CurveType::Linear, CurveType::Linear, 0.0)
            .unwrap_err();
        assert!(matches!(err, ApiError::Engine(EngineError::InvalidValue { .. })));
        assert_eq!(api.settings().unwrap().player_curve, CurveType::Official);
    }

    #[test]
    fn test_edit_rerenders_fragment() {
        let api = ProgressionApi::new().unwrap();
        api.set_custom_levels(3, 30, 0).unwrap();
        api.set_curves(CurveType::Linear, CurveType::Linear, 1.0).unwrap();

        let config = api.update_xp(LevelTable::Player, 1, 999).unwrap();
        assert_eq!(config.override_max_experience_points_player, 100 + 999 + 300);
        assert!(config
            .ini_code
            .contains("LevelExperienceRampOverrides=(ExperiencePointsForLevel=999,Alpha=1.0)"));

        let entry = api.append_level(LevelTable::Player).unwrap();
        assert_eq!(entry.level, 4);
        assert_eq!(entry.xp_for_level, 330);

        assert!(matches!(
            api.remove_level(LevelTable::Dino, 500),
            Err(ApiError::Engine(EngineError::IndexOutOfRange { index: 500, len: 30 }))
        ));
    }

    #[test]
    fn test_import_fragment_splits_tables() {
        let api = ProgressionApi::new().unwrap();
        api.set_custom_levels(2, 30, 0).unwrap();
        let text = "LevelExperienceRampOverrides=(ExperiencePointsForLevel=10,Alpha=1.0)\n\
                    LevelExperienceRampOverrides=(ExperiencePointsForLevel=20,Alpha=1.0)\n\
                    LevelExperienceRampOverrides=(ExperiencePointsForLevel=5,Alpha=1.0)\n";
        let config = api.import_fragment(text).unwrap();
        assert_eq!(config.player_levels.xp_values().collect::<Vec<_>>(), vec![10, 20]);
        assert_eq!(config.dino_levels.xp_values().collect::<Vec<_>>(), vec![5]);
        assert!(matches!(
            api.import_fragment("nothing here"),
            Err(ApiError::Engine(EngineError::EmptyTable))
        ));
    }

    #[test]
    fn test_high_official_presets_stay_finite() {
        let api = ProgressionApi::new().unwrap();
        let config = api.select_preset("Maximum (1000)").unwrap();
        assert_eq!(config.dino_levels.len(), 1200);
        assert!(config.dino_levels.is_consistent());
        assert!(config.override_max_experience_points_dino < u64::MAX);
        assert!(!config.ini_code.contains(&u64::MAX.to_string()));

        let err = api.update_xp(LevelTable::Dino, 0, u64::MAX).unwrap_err();
        assert!(matches!(err, ApiError::Engine(EngineError::InvalidValue { .. })));
        assert_eq!(api.current().unwrap(), config);
    }
}

