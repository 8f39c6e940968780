//! 登録フォーム関連ハンドラー
//!
//! ランディングページ、購読者登録、登録完了ページ

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use tracing::info;

use subdash_common::types::Subscriber;

use crate::api::error::AppError;
use crate::{db, pages, AppState};

/// 登録フォーム入力
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    /// 名前
    pub name: String,
    /// メールアドレス
    pub email: String,
}

/// 登録完了ページのクエリ
#[derive(Debug, Deserialize)]
pub struct SuccessParams {
    /// 登録した名前
    #[serde(default)]
    pub name: String,
}

/// GET / - ランディングページ
///
/// ストアが未接続でも件数0で応答する。
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let count = match state.store.pool() {
        Ok(pool) => db::subscribers::count(pool).await.unwrap_or(0),
        Err(_) => 0,
    };
    Html(pages::home(
        &state.service_name,
        &state.store.status_line(),
        count,
    ))
}

/// POST /register - 購読者登録
///
/// 成功時は302で `/success?name=<name>` へリダイレクトする。
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let pool = state.store.pool()?;
    let subscriber = Subscriber::new(form.name.clone(), form.email, &state.service_name);
    db::subscribers::insert(pool, &subscriber).await?;
    info!(
        "registered subscriber {} via {}",
        subscriber.id, state.service_name
    );
    let location = format!("/success?name={}", encode_query_value(&form.name));
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// GET /success - 登録完了ページ
pub async fn success(Query(params): Query<SuccessParams>) -> Html<String> {
    Html(pages::success(&params.name))
}

/// クエリ値のパーセントエンコード（RFC 3986 unreserved以外を変換）
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query_value_passes_unreserved() {
        assert_eq!(encode_query_value("Alice"), "Alice");
        assert_eq!(encode_query_value("a-b.c_d~e"), "a-b.c_d~e");
    }

    #[test]
    fn test_encode_query_value_escapes_reserved() {
        assert_eq!(encode_query_value("Alice Smith"), "Alice%20Smith");
        assert_eq!(encode_query_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query_value("日"), "%E6%97%A5");
    }
}
