// ==========================================
// ARK 服务器配置工作台 - 模组设置 API
// ==========================================
// 职责: 编辑常用模组参数与自定义条目，渲染片段并追加到 Game.ini
// ==========================================

use crate::api::config_editor_api::ConfigEditorApi;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::mod_setting::ModDefinition;
use crate::engine::fragment::ModSettingsDraft;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

pub struct ModSettingsApi {
    draft: Mutex<ModSettingsDraft>,
}

impl ModSettingsApi {
    pub fn new(draft: ModSettingsDraft) -> Self {
        Self {
            draft: Mutex::new(draft),
        }
    }

    pub fn mods(&self) -> ApiResult<Vec<ModDefinition>> {
        Ok(self.lock()?.mods().to_vec())
    }

    pub fn value(&self, mod_id: &str, key: &str) -> ApiResult<Option<String>> {
        Ok(self.lock()?.value(mod_id, key).map(str::to_string))
    }

    pub fn update(&self, mod_id: &str, key: &str, value: &str) -> ApiResult<()> {
        Ok(self.lock()?.update(mod_id, key, value)?)
    }

    pub fn reset_mod(&self, mod_id: &str) -> ApiResult<()> {
        Ok(self.lock()?.reset_mod(mod_id)?)
    }

    pub fn add_custom(&self, key: &str, value: &str) -> ApiResult<()> {
        Ok(self.lock()?.add_custom(key, value)?)
    }

    pub fn remove_custom(&self, index: usize) -> ApiResult<(String, String)> {
        Ok(self.lock()?.remove_custom(index)?)
    }

    pub fn render(&self) -> ApiResult<String> {
        Ok(self.lock()?.render())
    }

    /// 把模组片段追加到编辑器中打开的 Game.ini
    pub async fn apply_to_editor(&self, editor: &ConfigEditorApi) -> ApiResult<()> {
        let fragment = self.render()?;
        editor.apply_fragment(&fragment).await?;
        info!(bytes = fragment.len(), "模组片段已追加到 Game.ini");
        Ok(())
    }

    fn lock(&self) -> ApiResult<MutexGuard<'_, ModSettingsDraft>> {
        self.draft
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))
    }
}

impl Default for ModSettingsApi {
    fn default() -> Self {
        Self::new(ModSettingsDraft::with_builtin())
    }
}
