// ==========================================
// ARK 服务器配置工作台 - 外部变更监视
// ==========================================
// 职责: 定时查询配置文件修改时间，变化时静默重载会话
// 规则:
// - mtime > 0 且 ≠ 基线 → 更新基线并重载（丢弃未保存的本地修改）
// - mtime 查询/读取失败 → 记录日志，本轮不做任何改动
// - 每轮在会话锁内完成，与保存提交互斥
// ==========================================

use crate::engine::session::ConfigSession;
use crate::repository::config_store::ConfigStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// 会话共享句柄
pub type SharedSession = Arc<Mutex<ConfigSession>>;

/// 默认轮询间隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// 单轮轮询结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// 修改时间未知（0）
    Unavailable,
    /// 与基线相同
    Unchanged,
    /// 检测到外部变更并已重载
    Reloaded { mtime: u64, discarded: usize },
    /// 检测到变更但读取失败，基线保持不变
    ReadFailed,
}

// ==========================================
// ExternalChangeWatcher - 外部变更监视器
// ==========================================
#[derive(Clone)]
pub struct ExternalChangeWatcher {
    store: Arc<dyn ConfigStore>,
    session: SharedSession,
    interval: Duration,
}

impl ExternalChangeWatcher {
    pub fn new(store: Arc<dyn ConfigStore>, session: SharedSession, interval: Duration) -> Self {
        Self {
            store,
            session,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 执行一轮检测
    pub async fn poll_once(&self) -> PollOutcome {
        let mut session = self.session.lock().await;
        let server_id = session.server_id().to_string();
        let file = session.file();

        let mtime = self.store.get_config_modified_time(&server_id, file).await;
        if mtime == 0 {
            debug!(server_id = %server_id, file = %file, "修改时间不可用");
            return PollOutcome::Unavailable;
        }
        if mtime == session.last_known_mtime() {
            return PollOutcome::Unchanged;
        }

        match self.store.read_config(&server_id, file).await {
            Ok(text) => {
                let discarded = session.reload(&text, mtime);
                info!(
                    server_id = %server_id,
                    file = %file,
                    mtime,
                    discarded,
                    "检测到外部修改，已重新加载"
                );
                PollOutcome::Reloaded { mtime, discarded }
            }
            Err(e) => {
                warn!(server_id = %server_id, file = %file, error = %e, "外部修改后读取失败");
                PollOutcome::ReadFailed
            }
        }
    }

    /// 启动后台轮询任务
    ///
    /// 首次检测发生在一个间隔之后
    pub fn spawn(self) -> WatcherHandle {
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        let interval = self.interval;

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = &mut cancel_rx => {
                        debug!("监视任务收到停止信号");
                        break;
                    }
                    _ = ticker.tick() => {
                        let outcome = self.poll_once().await;
                        debug!(?outcome, "监视轮询完成");
                    }
                }
            }
        });

        WatcherHandle {
            cancel_tx: Some(cancel_tx),
            join: Some(join),
        }
    }
}

// ==========================================
// WatcherHandle - 取消句柄
// ==========================================
// 由会话持有者独占；drop 时中止任务
pub struct WatcherHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl WatcherHandle {
    pub fn is_running(&self) -> bool {
        self.join.as_ref().map(|j| !j.is_finished()).unwrap_or(false)
    }

    /// 发送停止信号并等待任务结束
    pub async fn stop(mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take() {
            if let Err(e) = join.await {
                if !e.is_cancelled() {
                    warn!(error = %e, "监视任务异常退出");
                }
            }
        }
    }
}

impl Drop for WatcherHandle {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}
