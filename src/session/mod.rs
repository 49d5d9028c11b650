use sqlx::{Row, SqlitePool};
use teloxide::types::ChatId;
use thiserror::Error;

use crate::db::models::User;

pub mod guard;

pub use guard::{check_access, Access};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("Stored session is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Per-chat persistence of the signed-in user, one JSON record per key.
#[derive(Clone)]
pub struct SessionStore {
    pool: SqlitePool,
}

impl SessionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn key(chat_id: ChatId) -> String {
        format!("user:{}", chat_id.0)
    }

    pub async fn load(&self, chat_id: ChatId) -> Result<Option<User>, SessionError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = $1")
            .bind(Self::key(chat_id))
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let value: String = row.get("value");
                Ok(Some(serde_json::from_str(&value)?))
            }
            None => Ok(None),
        }
    }

    /// Loads the session for a page check. Storage failures and corrupt
    /// records count as "not signed in".
    pub async fn current(&self, chat_id: ChatId) -> Option<User> {
        match self.load(chat_id).await {
            Ok(user) => user,
            Err(e @ SessionError::Corrupt(_)) => {
                log::warn!("Ignoring unreadable session for chat {}: {}", chat_id.0, e);
                None
            }
            Err(e) => {
                log::error!("Failed to load session for chat {}: {}", chat_id.0, e);
                None
            }
        }
    }

    pub async fn save(&self, chat_id: ChatId, user: &User) -> Result<(), SessionError> {
        let value = serde_json::to_string(user)?;
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES ($1, $2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(Self::key(chat_id))
        .bind(value)
        .execute(&self.pool)
        .await?;

        log::info!("Stored session for chat {} as {}", chat_id.0, user.role);
        Ok(())
    }

    pub async fn clear(&self, chat_id: ChatId) -> Result<(), SessionError> {
        sqlx::query("DELETE FROM kv_store WHERE key = $1")
            .bind(Self::key(chat_id))
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{memory_pool, models::Role};

    #[tokio::test]
    async fn test_save_load_clear() {
        let store = SessionStore::new(memory_pool().await);
        let chat = ChatId(42);
        assert_eq!(store.load(chat).await.unwrap(), None);

        let user = User::sign_in("jane@example.com", Role::Doctor).unwrap();
        store.save(chat, &user).await.unwrap();
        assert_eq!(store.load(chat).await.unwrap(), Some(user));

        store.clear(chat).await.unwrap();
        assert_eq!(store.load(chat).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_again_replaces_record() {
        let store = SessionStore::new(memory_pool().await);
        let chat = ChatId(7);
        store
            .save(chat, &User::sign_in("a@b.co", Role::Patient).unwrap())
            .await
            .unwrap();
        let admin = User::sign_in("a@b.co", Role::Admin).unwrap();
        store.save(chat, &admin).await.unwrap();

        assert_eq!(store.load(chat).await.unwrap(), Some(admin));
    }

    #[tokio::test]
    async fn test_sessions_are_per_chat() {
        let store = SessionStore::new(memory_pool().await);
        let user = User::sign_in("a@b.co", Role::Patient).unwrap();
        store.save(ChatId(1), &user).await.unwrap();
        assert_eq!(store.load(ChatId(2)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_record_reads_as_signed_out() {
        let pool = memory_pool().await;
        sqlx::query("INSERT INTO kv_store (key, value) VALUES ('user:5', '{not json')")
            .execute(&pool)
            .await
            .unwrap();
        let store = SessionStore::new(pool);

        assert!(matches!(
            store.load(ChatId(5)).await,
            Err(SessionError::Corrupt(_))
        ));
        assert_eq!(store.current(ChatId(5)).await, None);
    }

    #[tokio::test]
    async fn test_stored_json_layout() {
        let pool = memory_pool().await;
        let store = SessionStore::new(pool.clone());
        store
            .save(ChatId(3), &User::sign_in("p@q.rs", Role::Patient).unwrap())
            .await
            .unwrap();

        let value: String = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = 'user:3'")
            .fetch_one(&pool)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&value).unwrap();
        assert_eq!(json["role"], "patient");
        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["email"], "p@q.rs");
    }
}
