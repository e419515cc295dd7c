// ==========================================
// ARK 服务器配置工作台 - 领域模型层
// ==========================================
// 职责: 定义配置文档、字段、预设、经验表等数据结构
// 红线: 不含文件访问逻辑,不含引擎逻辑
// ==========================================

pub mod document;
pub mod mod_setting;
pub mod preset;
pub mod progression;
pub mod schema;
pub mod server;
pub mod types;

// 重导出核心类型
pub use document::{ConfigDocument, ConfigSection};
pub use mod_setting::{ModDefinition, ModSetting};
pub use preset::{LevelPreset, Preset};
pub use progression::{ProgressionEntry, ProgressionTable};
pub use schema::{ConfigGroup, FieldOption, FieldSchema};
pub use server::ServerProfile;
pub use types::{ConfigFileKind, CurveType, EditMode, FieldType, GameVariant};
