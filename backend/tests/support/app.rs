//! テスト用アプリ組み立て
//!
//! インメモリSQLiteを使った登録サービスのRouterを構築する

use axum::Router;
use sqlx::SqlitePool;

use subdash_backend::store::Store;
use subdash_backend::{api, AppState};

/// テスト用サービス識別名
pub const TEST_SERVICE_NAME: &str = "test-service";

/// テスト用のインメモリSQLiteプールを作成し、マイグレーションを実行する
pub async fn create_test_db_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// ストア接続済みのテストアプリを作成する
pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = create_test_db_pool().await;
    let state = AppState::new(TEST_SERVICE_NAME, Store::Connected(pool.clone()));
    (api::create_router(state), pool)
}

/// ストア未接続のテストアプリを作成する
pub fn create_degraded_app() -> Router {
    let state = AppState::new(
        TEST_SERVICE_NAME,
        Store::Unavailable("storage offline".to_string()),
    );
    api::create_router(state)
}
