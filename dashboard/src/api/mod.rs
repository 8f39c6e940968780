//! ダッシュボードHTTP API
//!
//! ルーター組み立てとハンドラー

/// ステータス系ハンドラー
pub mod status;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status::dashboard))
        .route("/api/status", get(status::status))
        .route("/health", get(status::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
