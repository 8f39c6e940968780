//! 共通型定義
//!
//! 購読者レコード等、サービス間で共有するコアデータ型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 購読者
///
/// 登録サービスのストアに保存されるレコード。`/users` 応答にもそのまま載るため、
/// フィールドは外部公開可能な内容に限る。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscriber {
    /// 一意識別子
    pub id: Uuid,
    /// 名前
    pub name: String,
    /// メールアドレス
    pub email: String,
    /// 登録元サービスタグ
    pub source: String,
    /// 登録日時
    pub subscribed_at: DateTime<Utc>,
}

impl Subscriber {
    /// 新規購読者を作成する（ID採番・登録時刻付与）
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            source: source.into(),
            subscribed_at: Utc::now(),
        }
    }
}
