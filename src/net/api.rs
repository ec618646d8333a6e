//! REST endpoint helpers for the WASAText server API.
//!
//! Thin async functions over [`ApiClient`]; each maps one endpoint.
//! All of them return [`ApiError`] unchanged from the client wrapper,
//! so a 401 has already cleared the session and redirected by the time
//! the caller sees it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use super::client::{ApiClient, ApiError, ApiRequest};
use super::types::{Conversation, ConversationPreview, Message, User};

/// Log in (or register) with a username via `POST /session`.
///
/// Returns the user identifier, which doubles as the session token.
///
/// # Errors
///
/// [`ApiError`] on transport failure or a non-2xx status.
pub async fn login(client: &ApiClient, name: &str) -> Result<String, ApiError> {
    #[derive(serde::Deserialize)]
    struct LoginResponse {
        identifier: String,
    }

    let response: LoginResponse = client
        .send_json(ApiRequest::post("/session", json!({ "name": name })))
        .await?;
    Ok(response.identifier)
}

/// Fetch the user's conversation list.
///
/// # Errors
///
/// [`ApiError`] on transport failure or a non-2xx status.
pub async fn fetch_conversations(
    client: &ApiClient,
    user_id: &str,
) -> Result<Vec<ConversationPreview>, ApiError> {
    client
        .send_json(ApiRequest::get(format!("/users/{user_id}/conversations")))
        .await
}

/// Fetch a single conversation with members and messages.
///
/// # Errors
///
/// [`ApiError`] on transport failure or a non-2xx status.
pub async fn fetch_conversation(
    client: &ApiClient,
    conversation_id: &str,
) -> Result<Conversation, ApiError> {
    client
        .send_json(ApiRequest::get(format!("/conversations/{conversation_id}")))
        .await
}

/// Start (or return the existing) private conversation with a user.
///
/// # Errors
///
/// [`ApiError`] on transport failure or a non-2xx status.
pub async fn start_conversation(
    client: &ApiClient,
    user_id: &str,
) -> Result<ConversationPreview, ApiError> {
    client
        .send_json(ApiRequest::post("/conversations", json!({ "userId": user_id })))
        .await
}

/// Send a text message to a conversation.
///
/// # Errors
///
/// [`ApiError`] on transport failure or a non-2xx status.
pub async fn send_message(
    client: &ApiClient,
    conversation_id: &str,
    content: &str,
) -> Result<Message, ApiError> {
    client
        .send_json(ApiRequest::post(
            format!("/conversations/{conversation_id}/messages"),
            json!({ "type": "text", "content": content }),
        ))
        .await
}

/// Change the logged-in user's username.
///
/// # Errors
///
/// [`ApiError`] on transport failure or a non-2xx status (409 when the
/// name is taken).
pub async fn set_my_username(
    client: &ApiClient,
    user_id: &str,
    username: &str,
) -> Result<(), ApiError> {
    client
        .send_unit(ApiRequest::put(
            format!("/users/{user_id}/username"),
            json!({ "username": username }),
        ))
        .await
}

/// Search users by username fragment.
///
/// # Errors
///
/// [`ApiError`] on transport failure or a non-2xx status.
pub async fn search_users(client: &ApiClient, query: &str) -> Result<Vec<User>, ApiError> {
    client.send_json(ApiRequest::get(search_path(query))).await
}

/// Percent-encodes the search query so reserved characters survive the
/// query string.
fn search_path(query: &str) -> String {
    format!("/users?q={}", urlencoding::encode(query))
}
