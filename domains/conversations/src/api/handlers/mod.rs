//! API handlers for the Conversations domain

pub mod conversations;
pub mod messages;
