//! Domain layer for the Conversations domain

pub mod entities;
pub mod participants;
