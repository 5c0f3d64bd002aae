//! Domain entities for the Conversations domain
//!
//! Each entity includes proper validation, serialization, and business rules.
//! Timestamps are assigned once, server-side, at creation and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use courier_common::{Error, Result};

/// Conversation entity
///
/// Participants live in an explicit join mapping (conversation id → set of
/// user ids) managed by the repository layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Conversation {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new conversation
    pub fn new() -> Self {
        Conversation {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message with a server-assigned timestamp
    pub fn new(conversation_id: Uuid, sender_id: Uuid, content: String) -> Result<Self> {
        Self::validate_content(&content)?;

        Ok(Message {
            id: Uuid::new_v4(),
            conversation_id,
            sender_id,
            content,
            created_at: Utc::now(),
        })
    }

    /// Validate message content (non-empty after trim)
    fn validate_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(Error::Validation(
                "Message content cannot be empty or whitespace-only".to_string(),
            ));
        }
        Ok(())
    }

    /// Select the most recent message by send time.
    ///
    /// A conversation with zero messages is an error for this derived
    /// field, not an omission: callers must not render it as null/empty.
    pub fn most_recent(messages: &[Message]) -> Result<&Message> {
        messages
            .iter()
            .max_by_key(|m| m.created_at)
            .ok_or_else(|| Error::Validation("Conversation has no messages".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn message_at(content: &str, created_at: DateTime<Utc>) -> Message {
        Message {
            id: Uuid::new_v4(),
            conversation_id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            content: content.to_string(),
            created_at,
        }
    }

    #[test]
    fn test_conversation_creation_assigns_identity_and_timestamp() {
        let a = Conversation::new();
        let b = Conversation::new();

        assert_ne!(a.id, b.id);
        assert!(a.created_at <= Utc::now());
    }

    #[test]
    fn test_message_creation() {
        let conv_id = Uuid::new_v4();
        let sender_id = Uuid::new_v4();
        let msg = Message::new(conv_id, sender_id, "Hello".to_string()).unwrap();

        assert_eq!(msg.conversation_id, conv_id);
        assert_eq!(msg.sender_id, sender_id);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_content_empty_rejected() {
        let result = Message::new(Uuid::new_v4(), Uuid::new_v4(), "".to_string());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_message_content_whitespace_only_rejected() {
        let result = Message::new(Uuid::new_v4(), Uuid::new_v4(), "   \t\n  ".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_message_content_single_char_valid() {
        let result = Message::new(Uuid::new_v4(), Uuid::new_v4(), "x".to_string());
        assert!(result.is_ok());
    }

    #[test]
    fn test_message_content_surrounding_whitespace_preserved() {
        let msg = Message::new(Uuid::new_v4(), Uuid::new_v4(), "  hello  ".to_string()).unwrap();
        assert_eq!(msg.content, "  hello  ");
    }

    #[test]
    fn test_most_recent_empty_is_error() {
        let result = Message::most_recent(&[]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Conversation has no messages"));
    }

    #[test]
    fn test_most_recent_picks_latest_send_time() {
        let t1 = Utc::now();
        let t2 = t1 + Duration::seconds(30);

        let older = message_at("first", t1);
        let newer = message_at("second", t2);

        let messages = vec![newer.clone(), older];
        let latest = Message::most_recent(&messages).unwrap();
        assert_eq!(latest.content, "second");

        // Order in the slice does not matter
        let t3 = t2 + Duration::seconds(30);
        let newest = message_at("third", t3);
        let messages = vec![message_at("first", t1), newest.clone(), message_at("second", t2)];
        assert_eq!(Message::most_recent(&messages).unwrap().id, newest.id);
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::new(Uuid::new_v4(), Uuid::new_v4(), "hello".to_string()).unwrap();

        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();

        assert_eq!(msg, deserialized);
    }
}
