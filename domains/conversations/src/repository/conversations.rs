//! Conversation repository
//!
//! A conversation row carries only identity and creation time; participants
//! live in the `conversation_participants` join table and are written in the
//! same transaction as the conversation itself.

use crate::domain::entities::Conversation;
use courier_common::Result;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Participant as rendered inside a conversation payload
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ParticipantProfile {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
}

#[derive(Clone)]
pub struct ConversationRepository {
    pool: PgPool,
}

impl ConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find conversation by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Conversation>> {
        let conv = sqlx::query_as::<_, Conversation>(
            "SELECT id, created_at FROM conversations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(conv)
    }

    /// List conversations the given user participates in, newest first
    pub async fn list_by_participant(&self, user_id: Uuid) -> Result<Vec<Conversation>> {
        let convs = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT c.id, c.created_at
            FROM conversations c
            JOIN conversation_participants cp ON cp.conversation_id = c.id
            WHERE cp.user_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(convs)
    }

    /// Create a conversation and its participant rows atomically
    pub async fn create(
        &self,
        conv: &Conversation,
        participant_ids: &[Uuid],
    ) -> Result<Conversation> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Conversation>(
            r#"
            INSERT INTO conversations (id, created_at)
            VALUES ($1, $2)
            RETURNING id, created_at
            "#,
        )
        .bind(conv.id)
        .bind(conv.created_at)
        .fetch_one(&mut *tx)
        .await?;

        for user_id in participant_ids {
            sqlx::query(
                r#"
                INSERT INTO conversation_participants (conversation_id, user_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(created.id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(created)
    }

    /// Load participant profiles for a conversation
    pub async fn participants(&self, conversation_id: Uuid) -> Result<Vec<ParticipantProfile>> {
        let participants = sqlx::query_as::<_, ParticipantProfile>(
            r#"
            SELECT u.id, u.email, u.username, u.display_name
            FROM conversation_participants cp
            JOIN users u ON u.id = cp.user_id
            WHERE cp.conversation_id = $1
            ORDER BY u.username ASC
            "#,
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(participants)
    }

    /// Check whether a user participates in a conversation
    pub async fn is_participant(&self, conversation_id: Uuid, user_id: Uuid) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM conversation_participants
                WHERE conversation_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(conversation_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Resolve which of the given user ids exist in the users table
    pub async fn resolve_user_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>> {
        let found = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(found)
    }
}
