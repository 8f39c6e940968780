//! データベース層
//!
//! SQLite接続プールの作成とマイグレーション

/// 購読者クエリ
pub mod subscribers;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use subdash_common::error::{BackendError, BackendResult};

/// 接続プールを作成し、マイグレーションを適用する
///
/// ファイルDBが存在しない場合は作成する。
pub async fn create_pool(database_url: &str) -> BackendResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| BackendError::Database(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| BackendError::Database(format!("Failed to connect to database: {}", e)))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| BackendError::Database(format!("Failed to run migrations: {}", e)))?;

    Ok(pool)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool_in_memory() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM subscribers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.0, 0);
    }

    #[tokio::test]
    async fn test_create_pool_with_invalid_url() {
        let result = create_pool("invalid://url").await;
        assert!(result.is_err());
    }
}
