//! Profile page: change the logged-in user's username.

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::session::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();

    let username = RwSignal::new(String::new());
    let status = RwSignal::new(None::<Result<String, String>>);
    let user_id = session.user_id().unwrap_or_default();

    let submit = Callback::new(move |()| {
        let name = username.get().trim().to_owned();
        if name.is_empty() {
            return;
        }

        let session = session.clone();
        let client = client.clone();
        status.set(None);

        leptos::task::spawn_local(async move {
            let Some(user_id) = session.user_id() else {
                return;
            };
            match crate::net::api::set_my_username(&client, &user_id, &name).await {
                Ok(()) => status.set(Some(Ok(format!("Username changed to {name}")))),
                Err(e) => status.set(Some(Err(e.to_string()))),
            }
        });
    });

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <p class="profile-page__id">{format!("User ID: {user_id}")}</p>

            {move || {
                status
                    .get()
                    .map(|result| match result {
                        Ok(message) => view! { <p class="profile-page__ok">{message}</p> }.into_any(),
                        Err(message) => {
                            view! { <p class="profile-page__error">{message}</p> }.into_any()
                        }
                    })
            }}

            <label class="profile-page__label">
                "New username"
                <input
                    class="profile-page__input"
                    type="text"
                    placeholder="3-16 letters, digits, underscores"
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        username.set(event_target_value(&ev));
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>

            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Save"
            </button>
        </div>
    }
}
