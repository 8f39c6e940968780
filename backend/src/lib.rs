//! subdash 登録サービス
//!
//! 購読者の登録・一覧・ヘルスチェックを提供するHTTPサービス。
//! ストアへ接続できない場合も起動は継続し、ストアに依存しない
//! エンドポイントは提供し続ける。

#![warn(missing_docs)]

/// HTTP API
pub mod api;

/// データベース層
pub mod db;

/// ログ初期化
pub mod logging;

/// HTMLページ組み立て
pub mod pages;

/// HTTPサーバー起動
pub mod server;

/// 購読者ストアハンドル
pub mod store;

use store::Store;

/// アプリケーション全体の共有状態
#[derive(Clone)]
pub struct AppState {
    /// サービス識別名（表示名兼 `source` タグ）
    pub service_name: String,
    /// 購読者ストア
    pub store: Store,
}

impl AppState {
    /// 共有状態を作成する
    pub fn new(service_name: impl Into<String>, store: Store) -> Self {
        Self {
            service_name: service_name.into(),
            store,
        }
    }

    /// `/health` 応答文字列
    pub fn health_line(&self) -> String {
        format!("✅ {} healthy", self.service_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_line_includes_service_name() {
        let state = AppState::new("node-rs", Store::Unavailable("boot".to_string()));
        assert_eq!(state.health_line(), "✅ node-rs healthy");
    }
}
