// ==========================================
// ARK 服务器配置工作台 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 说明: 显式传递的状态对象，不使用全局单例
// ==========================================

use std::sync::Arc;

use crate::api::{ConfigEditorApi, ModSettingsApi, ProgressionApi};
use crate::config::editor_settings::EditorSettings;
use crate::engine::preset_engine::PresetEngine;
use crate::repository::{ConfigStore, FileConfigStore, ServerRepository};

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 运行参数
    pub settings: EditorSettings,

    /// 服务器档案
    pub servers: Arc<ServerRepository>,

    /// 配置文件存取
    pub store: Arc<dyn ConfigStore>,

    /// 配置编辑API
    pub editor_api: Arc<ConfigEditorApi>,

    /// 等级经验API
    pub progression_api: Arc<ProgressionApi>,

    /// 模组设置API
    pub mod_settings_api: Arc<ModSettingsApi>,
}

impl AppState {
    /// 创建新的AppState实例（磁盘存储）
    ///
    /// # 说明
    /// 根目录存在时把其下每个子目录登记为服务器；不存在时记录警告并以空列表启动
    pub fn new(settings: EditorSettings) -> Result<Self, String> {
        tracing::info!(
            "初始化AppState，服务器根目录: {}",
            settings.servers_root.display()
        );

        let servers = Arc::new(ServerRepository::new());
        match servers.register_from_root(&settings.servers_root, settings.default_variant) {
            Ok(count) => tracing::info!("已登记 {} 个服务器", count),
            Err(e) => tracing::warn!("服务器目录扫描失败(将以空列表启动): {}", e),
        }

        let store: Arc<dyn ConfigStore> = Arc::new(FileConfigStore::new(servers.clone()));
        Self::with_store(settings, servers, store)
    }

    /// 使用指定存储创建（测试中传入内存实现）
    pub fn with_store(
        settings: EditorSettings,
        servers: Arc<ServerRepository>,
        store: Arc<dyn ConfigStore>,
    ) -> Result<Self, String> {
        let editor_api = Arc::new(ConfigEditorApi::new(
            store.clone(),
            servers.clone(),
            PresetEngine::with_builtin(),
            settings.poll_interval(),
            settings.auto_sync,
        ));

        let progression_api = Arc::new(
            ProgressionApi::new().map_err(|e| format!("无法创建ProgressionApi: {}", e))?,
        );
        let mod_settings_api = Arc::new(ModSettingsApi::default());

        tracing::info!("AppState初始化完成");

        Ok(Self {
            settings,
            servers,
            store,
            editor_api,
            progression_api,
            mod_settings_api,
        })
    }
}

/// 从环境变量加载运行参数
pub fn load_settings() -> EditorSettings {
    EditorSettings::from_env()
}
