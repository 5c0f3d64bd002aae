//! Conversation management API handlers
//!
//! Implements conversation operations including:
//! - POST /v1/conversations - Create a conversation
//! - GET /v1/conversations - List the caller's conversations
//! - GET /v1/conversations/{id} - Get a conversation with derived detail

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use courier_auth::AuthUser;
use courier_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::handlers::messages::MessageResponse;
use crate::api::middleware::ConversationsState;
use crate::domain::entities::{Conversation, Message};
use crate::domain::participants::assemble_participant_set;
use crate::repository::ParticipantProfile;

/// Request for creating a conversation
#[derive(Debug, Deserialize, Validate)]
pub struct CreateConversationRequest {
    pub participant_ids: Vec<Uuid>,
}

/// Conversation summary DTO (create and list)
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<ParticipantProfile>,
}

impl ConversationResponse {
    pub fn new(conv: Conversation, participants: Vec<ParticipantProfile>) -> Self {
        Self {
            id: conv.id,
            created_at: conv.created_at,
            participants,
        }
    }
}

/// Conversation detail DTO
///
/// The most recent message is a required field here. Requesting the detail
/// view of a conversation that has no messages yet is a validation error,
/// not a null field.
#[derive(Debug, Serialize)]
pub struct ConversationDetailResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<ParticipantProfile>,
    pub messages: Vec<MessageResponse>,
    pub most_recent_message: MessageResponse,
}

/// Create a new conversation
///
/// The stored participant set is the requested ids unioned with the caller.
pub async fn create_conversation(
    AuthUser(ctx): AuthUser,
    State(state): State<ConversationsState>,
    ValidatedJson(req): ValidatedJson<CreateConversationRequest>,
) -> Result<(StatusCode, Json<ConversationResponse>)> {
    let participant_ids = assemble_participant_set(ctx.user.id, &req.participant_ids)?;

    let resolved = state
        .repos
        .conversations
        .resolve_user_ids(&participant_ids)
        .await?;
    if resolved.len() != participant_ids.len() {
        return Err(Error::Validation(
            "Some participants not found".to_string(),
        ));
    }

    let conv = Conversation::new();
    let created = state
        .repos
        .conversations
        .create(&conv, &participant_ids)
        .await?;

    let participants = state.repos.conversations.participants(created.id).await?;

    tracing::info!(
        conversation_id = %created.id,
        participant_count = participants.len(),
        "Conversation created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ConversationResponse::new(created, participants)),
    ))
}

/// List conversations the caller participates in
pub async fn list_conversations(
    AuthUser(ctx): AuthUser,
    State(state): State<ConversationsState>,
) -> Result<Json<Vec<ConversationResponse>>> {
    let convs = state
        .repos
        .conversations
        .list_by_participant(ctx.user.id)
        .await?;

    let mut responses = Vec::with_capacity(convs.len());
    for conv in convs {
        let participants = state.repos.conversations.participants(conv.id).await?;
        responses.push(ConversationResponse::new(conv, participants));
    }

    Ok(Json(responses))
}

/// Get a single conversation with its most recent message
///
/// Conversations the caller does not participate in are indistinguishable
/// from ones that do not exist.
pub async fn get_conversation(
    AuthUser(ctx): AuthUser,
    State(state): State<ConversationsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConversationDetailResponse>> {
    let conv = state
        .repos
        .conversations
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))?;

    if !state
        .repos
        .conversations
        .is_participant(conv.id, ctx.user.id)
        .await?
    {
        return Err(Error::NotFound("Conversation not found".to_string()));
    }

    let participants = state.repos.conversations.participants(conv.id).await?;
    let messages = state.repos.messages.list_by_conversation(conv.id).await?;
    let most_recent = Message::most_recent(&messages)?.clone();

    Ok(Json(ConversationDetailResponse {
        id: conv.id,
        created_at: conv.created_at,
        participants,
        messages: messages.into_iter().map(Into::into).collect(),
        most_recent_message: most_recent.into(),
    }))
}
