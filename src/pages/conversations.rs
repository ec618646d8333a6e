//! Conversation list page with a new-chat dialog.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::conversation_card::ConversationCard;
use crate::net::client::ApiClient;
use crate::net::types::ConversationPreview;
use crate::routes::paths;
use crate::session::Session;

/// Conversation list — fetches the user's conversations on mount and
/// offers a dialog to start a new one.
#[component]
pub fn ConversationsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();

    let conversations = LocalResource::new(move || {
        let session = session.clone();
        let client = client.clone();
        async move {
            let Some(user_id) = session.user_id() else {
                return Vec::new();
            };
            crate::net::api::fetch_conversations(&client, &user_id)
                .await
                .unwrap_or_default()
        }
    });

    let show_new_chat = RwSignal::new(false);

    view! {
        <div class="conversations-page">
            <header class="conversations-page__header">
                <h1>"Conversations"</h1>
                <button class="btn btn--primary" on:click=move |_| show_new_chat.set(true)>
                    "+ New Chat"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading conversations..."</p> }>
                {move || {
                    conversations
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="conversations-page__empty">
                                        "No conversations yet. Start one!"
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="conversations-page__list">
                                        {list
                                            .into_iter()
                                            .map(|preview| {
                                                view! { <ConversationCard conversation=preview/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_new_chat.get()>
                <NewChatDialog on_cancel=Callback::new(move |()| show_new_chat.set(false))/>
            </Show>
        </div>
    }
}

/// Modal dialog that searches users by name and starts a private
/// conversation with the first match.
#[component]
fn NewChatDialog(on_cancel: Callback<()>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let username = query.get().trim().to_owned();
        if username.is_empty() {
            return;
        }

        let client = client.clone();
        let navigate = navigate.clone();
        error.set(None);

        leptos::task::spawn_local(async move {
            match start_chat_with(&client, &username).await {
                Ok(preview) => {
                    navigate(&paths::conversation(&preview.id), NavigateOptions::default());
                }
                Err(message) => error.set(Some(message)),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Chat"</h2>

                {move || error.get().map(|message| view! { <p class="dialog__error">{message}</p> })}

                <label class="dialog__label">
                    "Username"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            query.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Start"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Resolve a username to a user and open the private conversation.
async fn start_chat_with(
    client: &ApiClient,
    username: &str,
) -> Result<ConversationPreview, String> {
    let users = crate::net::api::search_users(client, username)
        .await
        .map_err(|e| e.to_string())?;
    let user = users
        .iter()
        .find(|u| u.username == username)
        .or_else(|| users.first())
        .ok_or_else(|| format!("no user named \"{username}\""))?;

    crate::net::api::start_conversation(client, &user.id)
        .await
        .map_err(|e| e.to_string())
}
