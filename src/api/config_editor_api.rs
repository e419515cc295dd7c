// ==========================================
// ARK 服务器配置工作台 - 配置编辑 API
// ==========================================
// 职责: 打开/编辑/保存单个配置文件，管理外部变更监视任务
// 规则:
// - 同一时刻只有一个活动会话；切换前先停止旧监视任务并等待其结束
// - 保存在会话锁内完成: 写入 → 读取新 mtime → commit，与监视轮询互斥
// - 保存失败时会话保持原样，可直接重试
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::schema_registry::SchemaRegistry;
use crate::domain::document::ConfigDocument;
use crate::domain::schema::ConfigGroup;
use crate::domain::types::{ConfigFileKind, EditMode, GameVariant};
use crate::engine::fragment::FragmentComposer;
use crate::engine::preset_engine::PresetEngine;
use crate::engine::session::ConfigSession;
use crate::engine::watcher::{ExternalChangeWatcher, PollOutcome, SharedSession, WatcherHandle};
use crate::repository::config_store::ConfigStore;
use crate::repository::server_repo::ServerRepository;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

// ==========================================
// 返回结构
// ==========================================

/// 会话快照（供界面展示）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: String,
    pub server_id: String,
    pub file: ConfigFileKind,
    pub variant: GameVariant,
    pub mode: EditMode,
    pub has_schema: bool,
    /// 有字段表时为字段表内的修改数，否则为全文档修改键数
    pub modified_count: usize,
    pub has_unsaved_changes: bool,
    pub last_known_mtime: u64,
    pub document: ConfigDocument,
    pub raw_text: String,
}

/// 保存结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReport {
    pub bytes_written: usize,
    pub mtime: u64,
}

struct ActiveSession {
    session: SharedSession,
    variant: GameVariant,
    watcher: Option<WatcherHandle>,
}

// ==========================================
// ConfigEditorApi - 配置编辑 API
// ==========================================
pub struct ConfigEditorApi {
    store: Arc<dyn ConfigStore>,
    servers: Arc<ServerRepository>,
    presets: PresetEngine,
    poll_interval: Duration,
    auto_sync: bool,
    active: Mutex<Option<ActiveSession>>,
}

impl ConfigEditorApi {
    pub fn new(
        store: Arc<dyn ConfigStore>,
        servers: Arc<ServerRepository>,
        presets: PresetEngine,
        poll_interval: Duration,
        auto_sync: bool,
    ) -> Self {
        Self {
            store,
            servers,
            presets,
            poll_interval,
            auto_sync,
            active: Mutex::new(None),
        }
    }

    pub fn presets(&self) -> &PresetEngine {
        &self.presets
    }

    // ==========================================
    // 会话生命周期
    // ==========================================

    /// 打开 (服务器, 文件) 的编辑会话
    ///
    /// 先停止旧会话的监视任务，再读取文本、记录 mtime 基线、按需启动新的监视任务
    ///
    /// # 返回
    /// - Err(NotFound): 服务器不存在
    /// - Err(Io): 读取失败
    #[instrument(skip(self))]
    pub async fn open(&self, server_id: &str, file: ConfigFileKind) -> ApiResult<SessionSnapshot> {
        let server = self.servers.find_by_id(server_id)?;

        let mut active = self.active.lock().await;
        if let Some(previous) = active.take() {
            stop_watcher(previous).await;
        }

        let text = self.store.read_config(server_id, file).await?;
        let mtime = self.store.get_config_modified_time(server_id, file).await;

        let mut session = ConfigSession::from_text(server_id, file, &text);
        session.set_last_known_mtime(mtime);
        let snapshot = build_snapshot(&session, server.variant);
        let shared: SharedSession = Arc::new(Mutex::new(session));

        let watcher = if self.auto_sync {
            let watcher =
                ExternalChangeWatcher::new(self.store.clone(), shared.clone(), self.poll_interval);
            Some(watcher.spawn())
        } else {
            None
        };

        info!(
            server_id,
            file = %file,
            variant = %server.variant,
            bytes = text.len(),
            mtime,
            watching = watcher.is_some(),
            "编辑会话已打开"
        );

        *active = Some(ActiveSession {
            session: shared,
            variant: server.variant,
            watcher,
        });
        Ok(snapshot)
    }

    /// 关闭当前会话（停止监视任务并丢弃会话）
    ///
    /// # 返回
    /// 是否存在被关闭的会话
    pub async fn close(&self) -> bool {
        let previous = self.active.lock().await.take();
        match previous {
            Some(previous) => {
                stop_watcher(previous).await;
                info!("编辑会话已关闭");
                true
            }
            None => false,
        }
    }

    pub async fn is_open(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// 监视任务是否在运行
    pub async fn is_watching(&self) -> bool {
        self.active
            .lock()
            .await
            .as_ref()
            .and_then(|a| a.watcher.as_ref())
            .map(|w| w.is_running())
            .unwrap_or(false)
    }

    // ==========================================
    // 读取
    // ==========================================

    pub async fn snapshot(&self) -> ApiResult<SessionSnapshot> {
        let (session, variant) = self.current().await?;
        let session = session.lock().await;
        Ok(build_snapshot(&session, variant))
    }

    /// 读取设置；缺失或为空时回退到字段默认值，再回退到空串
    pub async fn get_setting(&self, section: &str, key: &str) -> ApiResult<String> {
        let (session, variant) = self.current().await?;
        let session = session.lock().await;
        let default = SchemaRegistry::get_schema(variant, session.file())
            .and_then(|schema| SchemaRegistry::find_field(schema, section, key))
            .and_then(|field| field.default_value)
            .unwrap_or("");
        Ok(session.get_setting(section, key, default).to_string())
    }

    pub async fn is_modified(&self, section: &str, key: &str) -> ApiResult<bool> {
        let (session, _) = self.current().await?;
        let session = session.lock().await;
        Ok(session.is_modified(section, key))
    }

    pub async fn modified_keys(&self) -> ApiResult<Vec<(String, String)>> {
        let (session, _) = self.current().await?;
        let session = session.lock().await;
        Ok(session.modified_keys())
    }

    /// 当前文件的字段表
    ///
    /// # 返回
    /// - Ok(None): 该文件没有字段表，应使用纯文本编辑
    pub async fn schema(&self) -> ApiResult<Option<&'static [ConfigGroup]>> {
        let (session, variant) = self.current().await?;
        let file = session.lock().await.file();
        Ok(SchemaRegistry::get_schema(variant, file))
    }

    /// 过滤后的字段表
    pub async fn filtered_schema(
        &self,
        query: &str,
        modified_only: bool,
    ) -> ApiResult<Vec<ConfigGroup>> {
        let (session, variant) = self.current().await?;
        let session = session.lock().await;
        let schema = require_schema(variant, session.file())?;
        Ok(SchemaRegistry::filter_schema(schema, query, modified_only, &session))
    }

    // ==========================================
    // 编辑
    // ==========================================

    /// 写入设置（不校验，节不存在时创建）
    pub async fn update_setting(&self, section: &str, key: &str, value: &str) -> ApiResult<()> {
        let (session, _) = self.current().await?;
        session.lock().await.update_setting(section, key, value);
        Ok(())
    }

    /// 按字段表严格写入
    ///
    /// # 返回
    /// - Err(SchemaUnavailable): 文件没有字段表
    /// - Err(InvalidInput): 字段不在字段表中
    /// - Err(FieldValidation): 取值不符合字段约束
    pub async fn update_field(&self, section: &str, key: &str, value: &str) -> ApiResult<()> {
        let (session, variant) = self.current().await?;
        let mut session = session.lock().await;
        let schema = require_schema(variant, session.file())?;
        let field = SchemaRegistry::find_field(schema, section, key).ok_or_else(|| {
            ApiError::InvalidInput(format!("字段表中没有 {}.{}", section, key))
        })?;
        field
            .validate(value)
            .map_err(|reason| ApiError::FieldValidation {
                section: section.to_string(),
                key: key.to_string(),
                reason,
            })?;
        session.update_setting(section, key, value);
        Ok(())
    }

    /// 按名称应用预设
    ///
    /// # 返回
    /// 写入的键数量
    pub async fn apply_preset_by_name(&self, name: &str) -> ApiResult<usize> {
        let (session, _) = self.current().await?;
        let mut session = session.lock().await;
        Ok(self.presets.apply(&mut session, name)?)
    }

    /// 按分组标题恢复默认值
    pub async fn reset_group_by_title(&self, title: &str) -> ApiResult<usize> {
        let (session, variant) = self.current().await?;
        let mut session = session.lock().await;
        let schema = require_schema(variant, session.file())?;
        let group = SchemaRegistry::find_group(schema, title)
            .ok_or_else(|| ApiError::NotFound(format!("分组 '{}' 不存在", title)))?;
        Ok(session.reset_group(group))
    }

    /// 切换编辑模式
    pub async fn set_mode(&self, mode: EditMode) -> ApiResult<()> {
        let (session, _) = self.current().await?;
        session.lock().await.switch_mode(mode);
        Ok(())
    }

    /// 替换原始文本（自动切换为 Raw 模式）
    pub async fn set_raw_text(&self, text: &str) -> ApiResult<()> {
        let (session, _) = self.current().await?;
        let mut session = session.lock().await;
        session.set_mode(EditMode::Raw);
        session.set_raw_text(text);
        Ok(())
    }

    /// 追加生成的片段（仅 Game.ini）
    pub async fn apply_fragment(&self, fragment: &str) -> ApiResult<()> {
        let (session, _) = self.current().await?;
        let mut session = session.lock().await;
        if session.file() != ConfigFileKind::Game {
            return Err(ApiError::InvalidInput(format!(
                "片段只能追加到 Game.ini，当前文件为 {}",
                session.file().file_name()
            )));
        }
        FragmentComposer::append_to_session(&mut session, fragment);
        Ok(())
    }

    // ==========================================
    // 保存与同步
    // ==========================================

    /// 保存当前会话
    ///
    /// 在会话锁内: 写入 → 读取新 mtime → commit；下一轮监视不会把本次写入当作外部修改
    #[instrument(skip(self))]
    pub async fn save(&self) -> ApiResult<SaveReport> {
        let (session, _) = self.current().await?;
        let mut session = session.lock().await;
        let server_id = session.server_id().to_string();
        let file = session.file();
        let text = session.text_for_save();

        if let Err(e) = self.store.save_config(&server_id, file, &text).await {
            warn!(server_id = %server_id, file = %file, error = %e, "保存失败，会话保持不变");
            return Err(e.into());
        }

        let mtime = self.store.get_config_modified_time(&server_id, file).await;
        session.commit(mtime);
        info!(server_id = %server_id, file = %file, bytes = text.len(), mtime, "配置已保存");

        Ok(SaveReport {
            bytes_written: text.len(),
            mtime,
        })
    }

    /// 放弃本地修改，从存储重新加载
    ///
    /// # 返回
    /// 被丢弃的修改键数量
    pub async fn reload(&self) -> ApiResult<usize> {
        let (session, _) = self.current().await?;
        let mut session = session.lock().await;
        let server_id = session.server_id().to_string();
        let file = session.file();
        let text = self.store.read_config(&server_id, file).await?;
        let mtime = self.store.get_config_modified_time(&server_id, file).await;
        Ok(session.reload(&text, mtime))
    }

    /// 立即执行一轮外部变更检测（不依赖后台任务）
    pub async fn poll_now(&self) -> ApiResult<PollOutcome> {
        let (session, _) = self.current().await?;
        let watcher = ExternalChangeWatcher::new(self.store.clone(), session, self.poll_interval);
        Ok(watcher.poll_once().await)
    }

    async fn current(&self) -> ApiResult<(SharedSession, GameVariant)> {
        self.active
            .lock()
            .await
            .as_ref()
            .map(|a| (a.session.clone(), a.variant))
            .ok_or(ApiError::NoActiveSession)
    }
}

async fn stop_watcher(active: ActiveSession) {
    if let Some(watcher) = active.watcher {
        watcher.stop().await;
    }
}

fn require_schema(variant: GameVariant, file: ConfigFileKind) -> ApiResult<&'static [ConfigGroup]> {
    SchemaRegistry::get_schema(variant, file).ok_or_else(|| ApiError::SchemaUnavailable {
        variant: variant.to_string(),
        file: file.file_name(),
    })
}

fn build_snapshot(session: &ConfigSession, variant: GameVariant) -> SessionSnapshot {
    let schema = SchemaRegistry::get_schema(variant, session.file());
    let modified_count = match schema {
        Some(schema) => SchemaRegistry::count_modified(schema, session),
        None => session.modified_keys().len(),
    };
    SessionSnapshot {
        session_id: session.session_id().to_string(),
        server_id: session.server_id().to_string(),
        file: session.file(),
        variant,
        mode: session.mode(),
        has_schema: schema.is_some(),
        modified_count,
        has_unsaved_changes: session.has_unsaved_changes(),
        last_known_mtime: session.last_known_mtime(),
        document: session.working().clone(),
        raw_text: session.raw_text().to_string(),
    }
}
