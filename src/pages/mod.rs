//! Routed page components.

pub mod chat;
pub mod conversations;
pub mod login;
pub mod profile;
