//! 購読者ストアハンドル
//!
//! 起動時に一度だけ接続を試み、成否を明示的な値として保持する。
//! 接続に失敗してもサービスは起動し、ストア依存の操作だけが拒否される。

use std::time::Duration;

use sqlx::SqlitePool;
use tracing::{info, warn};

use subdash_common::error::{BackendError, BackendResult};

use crate::db;

/// 接続済みストア、または接続失敗の記録
#[derive(Debug, Clone)]
pub enum Store {
    /// 接続済み
    Connected(SqlitePool),
    /// 未接続（理由を保持したまま稼働継続）
    Unavailable(String),
}

impl Store {
    /// 起動時接続
    ///
    /// タイムアウトや接続失敗では panic せず `Unavailable` に落とす。
    pub async fn connect(database_url: &str, timeout: Duration) -> Self {
        match tokio::time::timeout(timeout, db::create_pool(database_url)).await {
            Ok(Ok(pool)) => {
                info!("subscriber store connected: {}", database_url);
                Store::Connected(pool)
            }
            Ok(Err(e)) => {
                warn!("subscriber store connection failed: {}", e);
                Store::Unavailable(e.to_string())
            }
            Err(_) => {
                warn!(
                    "subscriber store connection timed out after {}s",
                    timeout.as_secs()
                );
                Store::Unavailable(format!(
                    "connection timed out after {}s",
                    timeout.as_secs()
                ))
            }
        }
    }

    /// 接続済みならプールを返す
    pub fn pool(&self) -> BackendResult<&SqlitePool> {
        match self {
            Store::Connected(pool) => Ok(pool),
            Store::Unavailable(_) => Err(BackendError::StoreUnavailable),
        }
    }

    /// 接続済みかどうか
    pub fn is_connected(&self) -> bool {
        matches!(self, Store::Connected(_))
    }

    /// ランディングページや起動ログに載せるステータス行
    pub fn status_line(&self) -> String {
        match self {
            Store::Connected(_) => "✅ subscriber store connected".to_string(),
            Store::Unavailable(reason) => {
                format!("❌ subscriber store unavailable: {}", reason)
            }
        }
    }
}
