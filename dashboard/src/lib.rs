//! subdash ダッシュボード
//!
//! 設定されたバックエンドをレジストリ順にプローブし、集約ビューを
//! HTMLとJSONで提供するサービス

#![warn(missing_docs)]

/// HTTP API
pub mod api;

/// ログ初期化
pub mod logging;

/// アグリゲーター（プローブと集約）
pub mod probe;

/// バックエンドレジストリ
pub mod registry;

/// プレゼンター（集約結果の描画）
pub mod render;

/// HTTPサーバー起動
pub mod server;

use std::sync::Arc;

use probe::Collector;
use registry::BackendRegistry;

/// アプリケーション全体の共有状態
#[derive(Clone)]
pub struct AppState {
    /// 監視対象レジストリ（起動後は不変）
    pub registry: Arc<BackendRegistry>,
    /// アグリゲーター
    pub collector: Collector,
}

impl AppState {
    /// 共有状態を作成する
    pub fn new(registry: BackendRegistry, collector: Collector) -> Self {
        Self {
            registry: Arc::new(registry),
            collector,
        }
    }
}
