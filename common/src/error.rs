//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `BackendError` は `external_message()` と `status_code()` を提供し、
//! HTTP応答への変換は各サービスのAPI層が行う。

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Registration service error type
#[derive(Debug, Error)]
pub enum BackendError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Subscriber store was never connected
    #[error("Subscriber store is unavailable")]
    StoreUnavailable,
}

impl BackendError {
    /// Returns a safe error message for external clients.
    ///
    /// This message never exposes internal details such as connection
    /// strings or SQL fragments. For debugging, use the `Display`
    /// implementation in server logs instead.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(_) => "Internal error",
            Self::Database(_) => "Database error",
            Self::StoreUnavailable => "Subscriber store is unavailable",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Common(_) => 500,
            Self::Database(_) => 500,
            Self::StoreUnavailable => 500,
        }
    }
}

/// 共通層のResult型
pub type CommonResult<T> = Result<T, CommonError>;

/// 登録サービスのResult型
pub type BackendResult<T> = Result<T, BackendError>;
