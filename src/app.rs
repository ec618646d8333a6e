//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::nav::Nav;
use crate::net::client::ApiClient;
use crate::pages::{
    chat::ChatPage, conversations::ConversationsPage, login::LoginPage, profile::ProfilePage,
};
use crate::routes::{self, Navigator, RouteName};
use crate::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The
/// route table mirrors [`crate::routes::ROUTES`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One session handle for the whole application. Browser storage when
    // hydrating, an inert in-memory store during server renders.
    #[cfg(feature = "hydrate")]
    let session = Session::browser();
    #[cfg(not(feature = "hydrate"))]
    let session = Session::in_memory();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/wasatext-client.css"/>
        <Title text="WASAText"/>

        <Router>
            <ApiProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginView/>
                    <Route path=StaticSegment("conversations") view=ConversationsView/>
                    <Route
                        path=(StaticSegment("conversations"), ParamSegment("id"))
                        view=ChatView
                    />
                    <Route path=StaticSegment("profile") view=ProfileView/>
                </Routes>
            </ApiProvider>
        </Router>
    }
}

/// Builds the [`ApiClient`] once the router context exists and provides
/// it to every routed view.
#[component]
fn ApiProvider(children: Children) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let navigator = Navigator::new(move |path: &str| navigate(path, NavigateOptions::default()));
    provide_context(ApiClient::new(session, navigator));
    children()
}

/// Evaluates the navigation guard for its route on mount and issues the
/// redirect through the router when the guard says so.
#[component]
fn Guarded(route: RouteName, children: Children) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    Effect::new(move || {
        let outcome = routes::guard(routes::descriptor(route), session.is_authenticated());
        if let Some(target) = outcome.redirect_target() {
            navigate(target, NavigateOptions::default());
        }
    });

    children()
}

#[component]
fn LoginView() -> impl IntoView {
    view! {
        <Guarded route=RouteName::Login>
            <LoginPage/>
        </Guarded>
    }
}

#[component]
fn ConversationsView() -> impl IntoView {
    view! {
        <Guarded route=RouteName::Conversations>
            <div class="app-layout">
                <Nav/>
                <main class="main-content">
                    <ConversationsPage/>
                </main>
            </div>
        </Guarded>
    }
}

#[component]
fn ChatView() -> impl IntoView {
    view! {
        <Guarded route=RouteName::Chat>
            <div class="app-layout">
                <Nav/>
                <main class="main-content">
                    <ChatPage/>
                </main>
            </div>
        </Guarded>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    view! {
        <Guarded route=RouteName::Profile>
            <div class="app-layout">
                <Nav/>
                <main class="main-content">
                    <ProfilePage/>
                </main>
            </div>
        </Guarded>
    }
}
