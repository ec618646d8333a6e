//! Navigation bar shown on authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::paths;
use crate::session::Session;

/// Top navigation — links to the main views plus logout, which clears
/// the session and returns to the login route.
#[component]
pub fn Nav() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let logout = move |_| {
        session.clear();
        navigate(paths::LOGIN, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"WASAText"</span>
            <ul class="nav-bar__links">
                <li>
                    <a href=paths::CONVERSATIONS>"Conversations"</a>
                </li>
                <li>
                    <a href=paths::PROFILE>"Profile"</a>
                </li>
            </ul>
            <button class="nav-bar__logout" on:click=logout>
                "Log out"
            </button>
        </nav>
    }
}
