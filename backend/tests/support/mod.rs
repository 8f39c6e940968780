//! 統合テスト用ヘルパー

/// テスト用アプリ組み立て
pub mod app;
