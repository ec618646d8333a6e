//! Reusable UI components.

pub mod conversation_card;
pub mod nav;
