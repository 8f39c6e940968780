//! 一覧・ヘルスチェックハンドラー

use axum::extract::State;
use axum::Json;

use subdash_common::protocol::UserListing;

use crate::api::error::AppError;
use crate::{db, AppState};

/// GET /users - 購読者一覧（JSON）
///
/// ストア未接続時は500を返す。
pub async fn users(State(state): State<AppState>) -> Result<Json<UserListing>, AppError> {
    let pool = state.store.pool()?;
    let subscribers = db::subscribers::list(pool).await?;
    Ok(Json(UserListing::new(subscribers)))
}

/// GET /health - ヘルスチェック
///
/// ストアの状態に関わらず200を返す。
pub async fn health(State(state): State<AppState>) -> String {
    state.health_line()
}
