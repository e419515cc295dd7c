// ==========================================
// ARK 服务器配置工作台 - 仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 服务器档案与配置文件的存取，屏蔽文件系统细节
// ==========================================

pub mod config_store;
pub mod error;
pub mod server_repo;

// 重导出核心仓储
pub use config_store::{ConfigStore, FileConfigStore};
pub use error::{RepositoryError, RepositoryResult};
pub use server_repo::ServerRepository;
