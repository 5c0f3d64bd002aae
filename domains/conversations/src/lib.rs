//! Conversations domain: conversations, participants, messages

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Conversation, Message};
pub use domain::participants::assemble_participant_set;

// Re-export repository types
pub use repository::{
    ConversationRepository, ConversationsRepositories, MessageRepository, ParticipantProfile,
};

// Re-export API types
pub use api::routes;
pub use api::ConversationsState;
