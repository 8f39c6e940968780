//! 購読者クエリ
//!
//! `subscribers` テーブルへの挿入・一覧・件数取得

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use subdash_common::error::{BackendError, BackendResult};
use subdash_common::types::Subscriber;

/// DB行（idはTEXT保存のため文字列で受ける）
#[derive(Debug, sqlx::FromRow)]
struct SubscriberRow {
    id: String,
    name: String,
    email: String,
    source: String,
    subscribed_at: DateTime<Utc>,
}

impl SubscriberRow {
    fn into_subscriber(self) -> BackendResult<Subscriber> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| BackendError::Database(format!("Invalid subscriber id: {}", e)))?;
        Ok(Subscriber {
            id,
            name: self.name,
            email: self.email,
            source: self.source,
            subscribed_at: self.subscribed_at,
        })
    }
}

/// 購読者を保存する
pub async fn insert(pool: &SqlitePool, subscriber: &Subscriber) -> BackendResult<()> {
    sqlx::query(
        r#"
        INSERT INTO subscribers (id, name, email, source, subscribed_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(subscriber.id.to_string())
    .bind(&subscriber.name)
    .bind(&subscriber.email)
    .bind(&subscriber.source)
    .bind(subscriber.subscribed_at)
    .execute(pool)
    .await
    .map_err(|e| BackendError::Database(format!("Failed to insert subscriber: {}", e)))?;

    Ok(())
}

/// 全購読者を登録順で取得する
pub async fn list(pool: &SqlitePool) -> BackendResult<Vec<Subscriber>> {
    let rows = sqlx::query_as::<_, SubscriberRow>(
        r#"
        SELECT id, name, email, source, subscribed_at
        FROM subscribers
        ORDER BY subscribed_at ASC, rowid ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| BackendError::Database(format!("Failed to list subscribers: {}", e)))?;

    rows.into_iter().map(SubscriberRow::into_subscriber).collect()
}

/// 登録件数を取得する
pub async fn count(pool: &SqlitePool) -> BackendResult<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM subscribers")
        .fetch_one(pool)
        .await
        .map_err(|e| BackendError::Database(format!("Failed to count subscribers: {}", e)))?;

    Ok(row.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::test_db_pool;

    #[tokio::test]
    async fn test_insert_and_list() {
        let pool = test_db_pool().await;

        let alice = Subscriber::new("Alice", "alice@x.com", "svc-a");
        let bob = Subscriber::new("Bob", "bob@x.com", "svc-a");
        insert(&pool, &alice).await.unwrap();
        insert(&pool, &bob).await.unwrap();

        let listed = list(&pool).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Alice");
        assert_eq!(listed[0].email, "alice@x.com");
        assert_eq!(listed[0].source, "svc-a");
        assert_eq!(listed[0].id, alice.id);
        assert_eq!(listed[1].name, "Bob");
    }

    #[tokio::test]
    async fn test_count_tracks_inserts() {
        let pool = test_db_pool().await;
        assert_eq!(count(&pool).await.unwrap(), 0);

        insert(&pool, &Subscriber::new("Alice", "alice@x.com", "svc-a"))
            .await
            .unwrap();
        assert_eq!(count(&pool).await.unwrap(), 1);

        insert(&pool, &Subscriber::new("Bob", "bob@x.com", "svc-a"))
            .await
            .unwrap();
        assert_eq!(count(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_source_tag_is_preserved() {
        let pool = test_db_pool().await;
        insert(&pool, &Subscriber::new("Alice", "alice@x.com", "node-rs"))
            .await
            .unwrap();

        let listed = list(&pool).await.unwrap();
        assert_eq!(listed[0].source, "node-rs");
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let pool = test_db_pool().await;
        let alice = Subscriber::new("Alice", "alice@x.com", "svc-a");
        insert(&pool, &alice).await.unwrap();

        let result = insert(&pool, &alice).await;
        assert!(matches!(result, Err(BackendError::Database(_))));
    }
}
