// ==========================================
// ARK 服务器配置工作台 - 核心库
// ==========================================
// 职责: ARK 服务器 INI 配置的解析、可视化编辑、预设、经验表生成与外部变更同步
// 技术栈: Rust + tokio
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 数据结构与枚举
pub mod domain;

// 仓储层 - 服务器档案与配置文件存取
pub mod repository;

// 引擎层 - 解析、会话、预设、经验生成、片段、监视
pub mod engine;

// 配置层 - 内置目录与运行参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ConfigFileKind, CurveType, EditMode, FieldType, GameVariant};

// 领域实体
pub use domain::{
    ConfigDocument, ConfigGroup, ConfigSection, FieldSchema, LevelPreset, ModDefinition, Preset,
    ProgressionEntry, ProgressionTable, ServerProfile,
};

// 引擎
pub use engine::{
    ConfigSession, ExternalChangeWatcher, FragmentComposer, IniCodec, ModSettingsDraft,
    PresetEngine, ProgressionGenerator,
};

// 配置
pub use config::{EditorSettings, SchemaRegistry};

// API
pub use api::{ConfigEditorApi, ModSettingsApi, ProgressionApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "ARK 服务器配置工作台";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
