// ==========================================
// ARK 服务器配置工作台 - 预设引擎
// ==========================================
// 职责: 按名称查找预设并应用到会话工作副本
// 规则: 预设之间按应用顺序叠加，同键后应用者生效
// ==========================================

use crate::config::presets::builtin_presets;
use crate::domain::preset::Preset;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::session::ConfigSession;
use tracing::instrument;

// ==========================================
// PresetEngine - 预设引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct PresetEngine {
    presets: Vec<Preset>,
}

impl PresetEngine {
    /// 使用指定预设集合创建
    pub fn new(presets: Vec<Preset>) -> Self {
        Self { presets }
    }

    /// 使用内置预设创建
    pub fn with_builtin() -> Self {
        Self::new(builtin_presets().to_vec())
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// 按名称查找（忽略大小写）
    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// 注册自定义预设，同名者被替换
    pub fn register(&mut self, preset: Preset) {
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
    }

    /// 按名称应用预设
    ///
    /// # 返回
    /// - Ok(usize): 写入的键数量
    /// - Err(EngineError::UnknownPreset): 名称不存在
    #[instrument(skip(self, session))]
    pub fn apply(&self, session: &mut ConfigSession, name: &str) -> EngineResult<usize> {
        let preset = self
            .find(name)
            .ok_or_else(|| EngineError::UnknownPreset(name.to_string()))?;
        Ok(session.apply_preset(preset))
    }

    /// 依次应用多个预设
    ///
    /// 遇到未知名称时立即返回错误，此前已应用的预设保留
    pub fn apply_sequence(
        &self,
        session: &mut ConfigSession,
        names: &[&str],
    ) -> EngineResult<usize> {
        let mut total = 0;
        for name in names {
            total += self.apply(session, name)?;
        }
        Ok(total)
    }
}

impl Default for PresetEngine {
    fn default() -> Self {
        Self::with_builtin()
    }
}
