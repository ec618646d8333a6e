//! Login page with the username form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::client::ApiClient;
use crate::routes::paths;
use crate::session::Session;

/// Login page — submits the username to the server and establishes the
/// session with the returned identifier before moving on to the
/// conversation list.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let username = name.get().trim().to_owned();
        if username.is_empty() || pending.get() {
            return;
        }

        let session = session.clone();
        let client = client.clone();
        let navigate = navigate.clone();
        pending.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            match crate::net::api::login(&client, &username).await {
                Ok(identifier) => {
                    // The session token is the user identifier.
                    session.establish(&identifier, &identifier);
                    navigate(paths::CONVERSATIONS, NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"WASAText"</h1>
                <p>"Enter a username to start chatting"</p>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="login-error">{message}</div> })
                }}

                <label class="login-card__label">
                    "Username"
                    <input
                        class="login-card__input"
                        type="text"
                        placeholder="your_name"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <button
                    class="btn btn--primary"
                    disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </div>
        </div>
    }
}
