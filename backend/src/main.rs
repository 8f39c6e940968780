//! 登録サービス エントリポイント

use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use subdash_backend::store::Store;
use subdash_backend::{logging, server, AppState};

/// コマンドライン引数
#[derive(Parser, Debug)]
#[command(name = "subdash-backend", version, about = "Subscriber registration service")]
struct Cli {
    /// バインドするホストアドレス
    #[arg(long, env = "SUBDASH_HOST", default_value = "0.0.0.0")]
    host: String,

    /// バインドするポート番号
    #[arg(long, env = "SUBDASH_PORT", default_value_t = 3000)]
    port: u16,

    /// データベースURL
    #[arg(
        long,
        env = "SUBDASH_DATABASE_URL",
        default_value = "sqlite://subscribers.db"
    )]
    database_url: String,

    /// サービス識別名（表示名兼 `source` タグ）
    #[arg(long, env = "SUBDASH_SERVICE_NAME", default_value = "subdash-backend")]
    service_name: String,

    /// ストア接続タイムアウト（秒）
    #[arg(long, env = "SUBDASH_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    connect_timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init().expect("failed to initialize logging");

    info!(
        "subdash-backend v{} starting as {}",
        env!("CARGO_PKG_VERSION"),
        cli.service_name
    );

    let store = Store::connect(
        &cli.database_url,
        Duration::from_secs(cli.connect_timeout_secs),
    )
    .await;
    if !store.is_connected() {
        warn!("starting degraded: {}", store.status_line());
    }

    let state = AppState::new(cli.service_name, store);
    let bind_addr = format!("{}:{}", cli.host, cli.port);

    server::run(state, &bind_addr).await;
}
