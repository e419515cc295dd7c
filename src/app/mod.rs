// ==========================================
// ARK 服务器配置工作台 - 应用层
// ==========================================
// 职责: 组装仓储、引擎与API，供宿主程序持有
// ==========================================

pub mod state;

// 重导出
pub use state::{load_settings, AppState};
