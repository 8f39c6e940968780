//! 登録サービスHTTP API
//!
//! ルーター組み立てと各エンドポイントのハンドラー

/// APIエラー応答
pub mod error;

/// 一覧・ヘルスチェックハンドラー
pub mod listing;

/// 登録フォーム関連ハンドラー
pub mod registration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(registration::home))
        .route("/register", post(registration::register))
        .route("/success", get(registration::success))
        .route("/users", get(listing::users))
        .route("/health", get(listing::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
