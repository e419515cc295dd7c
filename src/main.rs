// ==========================================
// ARK 服务器配置工作台 - 命令行入口
// ==========================================
// 用法:
//   ark-config-studio                     列出服务器根目录下的服务器
//   ark-config-studio <server_id> [file]  打开配置文件并监视外部修改，Ctrl-C 退出
//
// 环境变量见 config::editor_settings::setting_keys
// ==========================================

use anyhow::{anyhow, Context, Result};
use ark_config_studio::app::{load_settings, AppState};
use ark_config_studio::config::SchemaRegistry;
use ark_config_studio::domain::types::ConfigFileKind;
use ark_config_studio::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", ark_config_studio::APP_NAME);
    tracing::info!("系统版本: {}", ark_config_studio::VERSION);
    tracing::info!("==================================================");

    let settings = load_settings();
    let state = AppState::new(settings).map_err(|e| anyhow!(e))?;

    let mut args = std::env::args().skip(1);
    let server_id = match args.next() {
        Some(id) => id,
        None => {
            let servers = state.servers.list().context("读取服务器列表失败")?;
            if servers.is_empty() {
                println!(
                    "{} 下没有服务器目录",
                    state.settings.servers_root.display()
                );
            }
            for server in servers {
                println!("{}\t{}\t{}", server.id, server.variant, server.install_path.display());
            }
            return Ok(());
        }
    };

    let file = match args.next() {
        Some(raw) => raw
            .parse::<ConfigFileKind>()
            .map_err(|e| anyhow!(e))?,
        None => ConfigFileKind::GameUserSettings,
    };

    let editor = state.editor_api.clone();
    let snapshot = editor
        .open(&server_id, file)
        .await
        .with_context(|| format!("无法打开 {} 的 {}", server_id, file.file_name()))?;

    match SchemaRegistry::get_schema(snapshot.variant, file) {
        Some(schema) => {
            let fields: usize = schema.iter().map(|g| g.fields.len()).sum();
            tracing::info!(groups = schema.len(), fields, "可视化字段表已加载");
        }
        None => tracing::info!("{} 没有字段表，使用纯文本编辑", file.file_name()),
    }
    tracing::info!(
        sections = snapshot.document.len(),
        entries = snapshot.document.entry_count(),
        modified = snapshot.modified_count,
        mtime = snapshot.last_known_mtime,
        "配置摘要"
    );

    if editor.is_watching().await {
        tracing::info!(
            "正在监视外部修改（间隔 {}ms），按 Ctrl-C 退出",
            state.settings.poll_interval_ms
        );
        tokio::signal::ctrl_c().await.context("等待 Ctrl-C 失败")?;
    } else {
        tracing::info!("外部修改监视已关闭");
    }

    editor.close().await;
    tracing::info!("已退出");
    Ok(())
}
