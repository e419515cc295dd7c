// ==========================================
// ARK 服务器配置工作台 - 引擎层
// ==========================================
// 职责: 解析/序列化、编辑会话、预设、经验生成、片段拼接、外部变更监视
// 红线: 引擎不直接访问文件系统（经由 repository::ConfigStore）
// ==========================================

pub mod error;
pub mod fragment;
pub mod ini_codec;
pub mod preset_engine;
pub mod progression;
pub mod session;
pub mod watcher;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use fragment::{FragmentComposer, ModSettingsDraft};
pub use ini_codec::IniCodec;
pub use preset_engine::PresetEngine;
pub use progression::{GeneratedLevelConfig, ProgressionGenerator};
pub use session::ConfigSession;
pub use watcher::{ExternalChangeWatcher, PollOutcome, SharedSession, WatcherHandle};
