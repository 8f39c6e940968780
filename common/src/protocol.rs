//! 通信プロトコル定義
//!
//! 登録サービス↔ダッシュボード間の応答契約

use serde::{Deserialize, Serialize};

use crate::types::Subscriber;

/// `/users` 応答
///
/// 各登録サービスが返し、ダッシュボードのプレゼンターが描画する構造化一覧。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserListing {
    /// 登録件数
    pub count: usize,
    /// 購読者一覧（登録順）
    pub users: Vec<Subscriber>,
}

impl UserListing {
    /// 購読者一覧から応答を組み立てる
    pub fn new(users: Vec<Subscriber>) -> Self {
        Self {
            count: users.len(),
            users,
        }
    }

    /// 空の応答
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}
