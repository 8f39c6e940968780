//! ログ初期化

use subdash_common::error::{CommonError, CommonResult};
use tracing_subscriber::EnvFilter;

/// tracingサブスクライバーを初期化する
///
/// `RUST_LOG` 未設定時はinfoレベル。
pub fn init() -> CommonResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| CommonError::Config(format!("Failed to initialize logging: {}", e)))?;
    Ok(())
}
