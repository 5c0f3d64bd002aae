//! API handlers for the Accounts domain

pub mod users;
