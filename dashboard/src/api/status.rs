//! ステータス系ハンドラー
//!
//! 集約ページ（HTML）、集約結果のJSON表現、自身のヘルスチェック

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::probe::ResultSet;
use crate::{render, AppState};

/// `/api/status` 応答
#[derive(Debug, Clone, Serialize)]
pub struct StatusOverview {
    /// 生成時刻
    pub generated_at: DateTime<Utc>,
    /// バックエンドごとの集約結果（レジストリ順）
    pub services: ResultSet,
}

/// GET / - 集約ダッシュボードページ
pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let reports = state.collector.collect(&state.registry).await;
    Html(render::render_dashboard(&reports))
}

/// GET /api/status - 集約結果のJSON表現
pub async fn status(State(state): State<AppState>) -> Json<StatusOverview> {
    let services = state.collector.collect(&state.registry).await;
    Json(StatusOverview {
        generated_at: Utc::now(),
        services,
    })
}

/// GET /health - ダッシュボード自身のヘルスチェック
pub async fn health() -> &'static str {
    "✅ dashboard healthy"
}
