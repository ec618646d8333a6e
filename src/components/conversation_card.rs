//! Card component for entries in the conversation list.

use leptos::prelude::*;

use crate::net::types::ConversationPreview;
use crate::routes::paths;

/// A clickable card linking to one conversation.
#[component]
pub fn ConversationCard(conversation: ConversationPreview) -> impl IntoView {
    let href = paths::conversation(&conversation.id);
    let preview = conversation
        .latest_message
        .map(|message| message.content)
        .unwrap_or_else(|| "No messages yet".to_owned());

    view! {
        <a class="conversation-card" href=href>
            <span class="conversation-card__name">{conversation.name}</span>
            <span class="conversation-card__preview">{preview}</span>
        </a>
    }
}
