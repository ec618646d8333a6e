use super::*;

#[test]
fn conversation_preview_decodes_server_json() {
    let json = r#"{
        "id": "c-1",
        "type": "private",
        "name": "alice",
        "latestMessage": {
            "content": "hey",
            "timestamp": "2024-05-01T10:00:00Z",
            "senderId": "u-2"
        }
    }"#;

    let preview: ConversationPreview = serde_json::from_str(json).unwrap();
    assert_eq!(preview.id, "c-1");
    assert_eq!(preview.kind, "private");
    assert!(preview.photo_url.is_none());

    let latest = preview.latest_message.unwrap();
    assert_eq!(latest.sender_id, "u-2");
    assert_eq!(latest.content, "hey");
}

#[test]
fn conversation_preview_without_latest_message() {
    let json = r#"{"id": "c-2", "type": "group", "name": "team"}"#;
    let preview: ConversationPreview = serde_json::from_str(json).unwrap();
    assert!(preview.latest_message.is_none());
}

#[test]
fn message_decodes_with_optional_fields_missing() {
    let json = r#"{
        "id": "m-1",
        "senderId": "u-1",
        "senderUsername": "alice",
        "type": "text",
        "content": "hello",
        "timestamp": "2024-05-01T10:00:00Z"
    }"#;

    let message: Message = serde_json::from_str(json).unwrap();
    assert_eq!(message.kind, "text");
    assert_eq!(message.checkmarks, 0);
    assert!(!message.forwarded);
    assert!(message.reply_to.is_none());
    assert!(message.comments.is_empty());
}

#[test]
fn message_decodes_comments_and_reply() {
    let json = r#"{
        "id": "m-2",
        "senderId": "u-1",
        "senderUsername": "alice",
        "type": "text",
        "content": "sure",
        "timestamp": "2024-05-01T10:05:00Z",
        "checkmarks": 2,
        "forwarded": true,
        "replyTo": {
            "content": "lunch?",
            "timestamp": "2024-05-01T10:00:00Z",
            "senderId": "u-2"
        },
        "comments": [
            {"userId": "u-2", "username": "bob", "comment": "👍"}
        ]
    }"#;

    let message: Message = serde_json::from_str(json).unwrap();
    assert_eq!(message.checkmarks, 2);
    assert!(message.forwarded);
    assert_eq!(message.reply_to.unwrap().content, "lunch?");
    assert_eq!(message.comments[0].username, "bob");
}

#[test]
fn user_decodes_with_photo_url() {
    let json = r#"{"id": "u-1", "username": "alice", "photoUrl": "/users/u-1/photo"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.photo_url.as_deref(), Some("/users/u-1/photo"));
}

#[test]
fn conversation_decodes_members_and_messages() {
    let json = r#"{
        "id": "c-1",
        "type": "private",
        "name": "alice",
        "members": [
            {"id": "u-1", "username": "me"},
            {"id": "u-2", "username": "alice"}
        ],
        "messages": []
    }"#;

    let conversation: Conversation = serde_json::from_str(json).unwrap();
    assert_eq!(conversation.members.len(), 2);
    assert!(conversation.messages.is_empty());
}
