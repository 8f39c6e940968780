//! ダッシュボード エントリポイント

use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use subdash_dashboard::probe::{Collector, ProbeConfig};
use subdash_dashboard::registry::BackendRegistry;
use subdash_dashboard::{logging, server, AppState};

/// コマンドライン引数
#[derive(Parser, Debug)]
#[command(
    name = "subdash-dashboard",
    version,
    about = "Aggregating dashboard over registered backend services"
)]
struct Cli {
    /// バインドするホストアドレス
    #[arg(long, env = "SUBDASH_HOST", default_value = "0.0.0.0")]
    host: String,

    /// バインドするポート番号
    #[arg(long, env = "SUBDASH_PORT", default_value_t = 8000)]
    port: u16,

    /// 監視対象バックエンド（`Name=URL` 形式、カンマ区切りまたは複数指定）
    #[arg(long = "backend", env = "SUBDASH_BACKENDS", value_delimiter = ',')]
    backends: Vec<String>,

    /// ヘルスチェックのタイムアウト（秒）
    #[arg(long, env = "SUBDASH_HEALTH_TIMEOUT_SECS", default_value_t = 2)]
    health_timeout_secs: u64,

    /// 一覧取得のタイムアウト（秒）
    #[arg(long, env = "SUBDASH_USERS_TIMEOUT_SECS", default_value_t = 3)]
    users_timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init().expect("failed to initialize logging");

    info!("subdash-dashboard v{} starting", env!("CARGO_PKG_VERSION"));

    let registry = match BackendRegistry::parse(&cli.backends) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("invalid backend registry: {}", e);
            std::process::exit(1);
        }
    };
    if registry.is_empty() {
        warn!("no backends configured, dashboard will render an empty page");
    }
    for entry in registry.entries() {
        info!("registered backend {} at {}", entry.name, entry.base_url);
    }

    let config = ProbeConfig {
        health_timeout: Duration::from_secs(cli.health_timeout_secs),
        users_timeout: Duration::from_secs(cli.users_timeout_secs),
    };
    let state = AppState::new(registry, Collector::new(config));
    let bind_addr = format!("{}:{}", cli.host, cli.port);

    server::run(state, &bind_addr).await;
}
