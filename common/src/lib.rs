//! subdash 共通ライブラリ
//!
//! ダッシュボードと登録サービスが共有する型・エラー・HTMLヘルパー

#![warn(missing_docs)]

/// エラー型定義
pub mod error;

/// HTMLエスケープとページ組み立て
pub mod html;

/// サービス間の応答契約
pub mod protocol;

/// 共有データ型
pub mod types;
