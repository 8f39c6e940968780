//! APIエラー応答
//!
//! `BackendError` をHTTP応答へ変換するラッパー

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use subdash_common::error::BackendError;

/// ハンドラー用エラーラッパー
///
/// 本文は人間向けの短いテキスト。内部詳細はログ側にのみ出す。
pub struct AppError(pub BackendError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        error!("request failed: {}", self.0);
        (status, self.0.external_message()).into_response()
    }
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        Self(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_unavailable_maps_to_500() {
        let response = AppError(BackendError::StoreUnavailable).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let err = BackendError::Database("insert failed".to_string());
        let response = AppError(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
