//! Message repository

use crate::domain::entities::Message;
use courier_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List messages for a conversation, oldest first
    pub async fn list_by_conversation(&self, conversation_id: Uuid) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, conversation_id, sender_id, content, created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Create a new message
    pub async fn create(&self, msg: &Message) -> Result<Message> {
        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (id, conversation_id, sender_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, conversation_id, sender_id, content, created_at
            "#,
        )
        .bind(msg.id)
        .bind(msg.conversation_id)
        .bind(msg.sender_id)
        .bind(&msg.content)
        .bind(msg.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
