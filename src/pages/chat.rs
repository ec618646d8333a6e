//! Chat page: one conversation's message history and a send box.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::client::ApiClient;
use crate::net::types::{Conversation, Message};
use crate::session::Session;

/// Chat page — reads the conversation ID from the route parameter,
/// fetches the conversation, and refetches after each sent message.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let params = use_params_map();

    let conversation_id = move || params.read().get("id");

    let conversation = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = conversation_id();
            async move {
                let id = id?;
                crate::net::api::fetch_conversation(&client, &id).await.ok()
            }
        }
    });

    let my_id = session.user_id().unwrap_or_default();
    let draft = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let send = Callback::new(move |()| {
        let content = draft.get().trim().to_owned();
        let Some(id) = conversation_id() else {
            return;
        };
        if content.is_empty() || sending.get() {
            return;
        }

        let client = client.clone();
        sending.set(true);

        leptos::task::spawn_local(async move {
            match crate::net::api::send_message(&client, &id, &content).await {
                Ok(_) => {
                    draft.set(String::new());
                    conversation.refetch();
                }
                Err(e) => {
                    leptos::logging::warn!("send failed: {e}");
                }
            }
            sending.set(false);
        });
    });

    view! {
        <div class="chat-page">
            <Suspense fallback=move || view! { <p>"Loading conversation..."</p> }>
                {
                    let my_id = my_id.clone();
                    move || {
                        let my_id = my_id.clone();
                        conversation
                            .get()
                            .map(|maybe| match maybe {
                                Some(conv) => view! { <ConversationView conv=conv my_id=my_id/> }
                                    .into_any(),
                                None => view! { <p>"Conversation not found."</p> }.into_any(),
                            })
                    }
                }
            </Suspense>

            <div class="chat-page__composer">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Type a message"
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        draft.set(event_target_value(&ev));
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            send.run(());
                        }
                    }
                />
                <button
                    class="btn btn--primary"
                    disabled=move || sending.get()
                    on:click=move |_| send.run(())
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Header plus message list for a loaded conversation.
#[component]
fn ConversationView(conv: Conversation, my_id: String) -> impl IntoView {
    view! {
        <header class="chat-page__header">
            <h1>{conv.name.clone()}</h1>
            <span class="chat-page__members">{format!("{} members", conv.members.len())}</span>
        </header>
        <div class="chat-page__messages">
            {conv
                .messages
                .into_iter()
                .map(|message| {
                    let mine = message.sender_id == my_id;
                    view! { <MessageItem message=message mine=mine/> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn MessageItem(message: Message, mine: bool) -> impl IntoView {
    let class = if mine {
        "message message--mine"
    } else {
        "message"
    };

    view! {
        <div class=class>
            <span class="message__sender">{message.sender_username}</span>
            <p class="message__content">{message.content}</p>
            <span class="message__timestamp">{message.timestamp}</span>
        </div>
    }
}
