// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 内存版 ConfigStore（可控 mtime、故障注入、读写计数）、样例 INI 文本、测试用 AppState
// ==========================================
#![allow(dead_code)]

use ark_config_studio::app::AppState;
use ark_config_studio::config::EditorSettings;
use ark_config_studio::domain::server::ServerProfile;
use ark_config_studio::domain::types::{ConfigFileKind, GameVariant};
use ark_config_studio::logging;
use ark_config_studio::repository::{
    ConfigStore, RepositoryError, RepositoryResult, ServerRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const SERVER_ID: &str = "srv";

/// GameUserSettings.ini 样例
pub const GUS_FIXTURE: &str = "\
[ServerSettings]
SessionName=Test Server
MaxPlayers=70
XPMultiplier=1.0
ServerPVE=False

[MessageOfTheDay]
Message=Welcome
Duration=20
";

/// Game.ini 样例
pub const GAME_FIXTURE: &str = "\
[/Script/ShooterGame.ShooterGameMode]
BabyImprintingStatScaleMultiplier=1.0
";

// ==========================================
// MemoryConfigStore - 内存存储
// ==========================================

#[derive(Default)]
struct MemoryState {
    files: HashMap<(String, ConfigFileKind), (String, u64)>,
    clock: u64,
    fail_saves: bool,
    fail_reads: bool,
    reads: HashMap<(String, ConfigFileKind), usize>,
    saves: usize,
    mtime_queries: usize,
}

#[derive(Default)]
pub struct MemoryConfigStore {
    state: Mutex<MemoryState>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模拟外部写入（mtime 前进）
    pub fn put(&self, server_id: &str, file: ConfigFileKind, text: &str) -> u64 {
        let mut state = self.state.lock().unwrap();
        state.clock += 1000;
        let mtime = state.clock;
        state
            .files
            .insert((server_id.to_string(), file), (text.to_string(), mtime));
        mtime
    }

    pub fn text(&self, server_id: &str, file: ConfigFileKind) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .files
            .get(&(server_id.to_string(), file))
            .map(|(text, _)| text.clone())
    }

    pub fn mtime(&self, server_id: &str, file: ConfigFileKind) -> u64 {
        let state = self.state.lock().unwrap();
        state
            .files
            .get(&(server_id.to_string(), file))
            .map(|(_, mtime)| *mtime)
            .unwrap_or(0)
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.state.lock().unwrap().fail_saves = fail;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    /// 某文件被读取的次数（含失败的读取）
    pub fn read_count(&self, server_id: &str, file: ConfigFileKind) -> usize {
        let state = self.state.lock().unwrap();
        state
            .reads
            .get(&(server_id.to_string(), file))
            .copied()
            .unwrap_or(0)
    }

    pub fn save_count(&self) -> usize {
        self.state.lock().unwrap().saves
    }

    pub fn mtime_queries(&self) -> usize {
        self.state.lock().unwrap().mtime_queries
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn read_config(&self, server_id: &str, file: ConfigFileKind) -> RepositoryResult<String> {
        let mut state = self.state.lock().unwrap();
        *state.reads.entry((server_id.to_string(), file)).or_insert(0) += 1;
        if state.fail_reads {
            return Err(RepositoryError::Io("injected read failure".to_string()));
        }
        Ok(state
            .files
            .get(&(server_id.to_string(), file))
            .map(|(text, _)| text.clone())
            .unwrap_or_default())
    }

    async fn save_config(
        &self,
        server_id: &str,
        file: ConfigFileKind,
        text: &str,
    ) -> RepositoryResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_saves {
            return Err(RepositoryError::Io("injected write failure".to_string()));
        }
        state.clock += 1000;
        let mtime = state.clock;
        state
            .files
            .insert((server_id.to_string(), file), (text.to_string(), mtime));
        state.saves += 1;
        Ok(())
    }

    async fn get_config_modified_time(&self, server_id: &str, file: ConfigFileKind) -> u64 {
        let mut state = self.state.lock().unwrap();
        state.mtime_queries += 1;
        state
            .files
            .get(&(server_id.to_string(), file))
            .map(|(_, mtime)| *mtime)
            .unwrap_or(0)
    }
}

// ==========================================
// 测试环境
// ==========================================

pub struct TestEnv {
    pub store: Arc<MemoryConfigStore>,
    pub state: AppState,
}

/// 创建测试环境: 一个 ASE 服务器，两份样例文件
///
/// # 参数
/// - auto_sync: 是否启用外部变更监视
pub fn create_test_env(auto_sync: bool) -> TestEnv {
    create_test_env_with_variant(auto_sync, GameVariant::Ase)
}

pub fn create_test_env_with_variant(auto_sync: bool, variant: GameVariant) -> TestEnv {
    logging::init_test();

    let store = Arc::new(MemoryConfigStore::new());
    store.put(SERVER_ID, ConfigFileKind::GameUserSettings, GUS_FIXTURE);
    store.put(SERVER_ID, ConfigFileKind::Game, GAME_FIXTURE);

    let servers = Arc::new(ServerRepository::new());
    servers
        .upsert(ServerProfile::new(SERVER_ID, "Test Server", variant, "/srv/ark"))
        .unwrap();

    let settings = EditorSettings {
        poll_interval_ms: 3000,
        auto_sync,
        default_variant: variant,
        ..EditorSettings::default()
    };

    let state = AppState::with_store(settings, servers, store.clone()).unwrap();
    TestEnv { store, state }
}
