// ==========================================
// ARK 服务器配置工作台 - 配置层
// ==========================================
// 职责: 编译期目录（字段表、预设、模组）与运行参数
// 说明: 目录数据首次访问时构建，进程内只读共享
// ==========================================

pub mod editor_settings;
pub mod mod_catalog;
pub mod presets;
pub mod schema_catalog;
pub mod schema_registry;

// 重导出
pub use editor_settings::{setting_keys, EditorSettings};
pub use mod_catalog::builtin_mods;
pub use presets::{builtin_level_presets, builtin_presets, find_level_preset, preset_names};
pub use schema_registry::SchemaRegistry;
