// ==========================================
// ARK 服务器配置工作台 - API 层
// ==========================================
// 职责: 面向宿主程序（界面/命令行）的业务接口
// ==========================================

pub mod config_editor_api;
pub mod error;
pub mod mod_settings_api;
pub mod progression_api;

// 重导出核心类型
pub use config_editor_api::{ConfigEditorApi, SaveReport, SessionSnapshot};
pub use error::{ApiError, ApiResult};
pub use mod_settings_api::ModSettingsApi;
pub use progression_api::{LevelTable, ProgressionApi, ProgressionSettings};
