//! Route table and authentication guard.
//!
//! The guard is a pure decision function of two inputs — the
//! destination's auth requirement and whether a session token exists —
//! with exactly three outcomes. Redirects are issued through
//! [`Navigator`], a thin command over the router's navigate hook, so
//! every navigation (including the one forced by a 401) goes through the
//! same abstraction.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::sync::Arc;

/// View identifiers for the four application routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Login,
    Conversations,
    Chat,
    Profile,
}

/// Static mapping from path pattern to view and auth requirement.
#[derive(Clone, Copy, Debug)]
pub struct RouteDescriptor {
    pub name: RouteName,
    pub pattern: &'static str,
    pub requires_auth: bool,
}

/// The application route table. Defined once, immutable.
pub const ROUTES: [RouteDescriptor; 4] = [
    RouteDescriptor {
        name: RouteName::Login,
        pattern: "/",
        requires_auth: false,
    },
    RouteDescriptor {
        name: RouteName::Conversations,
        pattern: "/conversations",
        requires_auth: true,
    },
    RouteDescriptor {
        name: RouteName::Chat,
        pattern: "/conversations/:id",
        requires_auth: true,
    },
    RouteDescriptor {
        name: RouteName::Profile,
        pattern: "/profile",
        requires_auth: true,
    },
];

/// Concrete paths for navigation targets.
pub mod paths {
    pub const LOGIN: &str = "/";
    pub const CONVERSATIONS: &str = "/conversations";
    pub const PROFILE: &str = "/profile";

    /// Path to a single conversation.
    pub fn conversation(id: &str) -> String {
        format!("/conversations/{id}")
    }
}

/// Look up the descriptor for a route name.
pub fn descriptor(name: RouteName) -> &'static RouteDescriptor {
    ROUTES
        .iter()
        .find(|route| route.name == name)
        .unwrap_or(&ROUTES[0])
}

/// Resolve a concrete path against the route table.
///
/// A `:param` pattern segment matches any single non-empty path segment.
/// Returns `None` for paths outside the table; the router renders its
/// not-found fallback for those.
pub fn resolve(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| matches(route.pattern, path))
}

fn matches(pattern: &str, path: &str) -> bool {
    let mut wanted = segments(pattern);
    let mut given = segments(path);

    loop {
        match (wanted.next(), given.next()) {
            (None, None) => return true,
            (Some(w), Some(g)) => {
                if w.starts_with(':') {
                    if g.is_empty() {
                        return false;
                    }
                } else if w != g {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Result of the pre-navigation guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Continue to the requested destination.
    Proceed,
    /// Destination requires a session and none exists.
    RedirectToLogin,
    /// Already authenticated visitor on the login route.
    RedirectToConversations,
}

impl GuardOutcome {
    /// Path to redirect to, if this outcome is a redirect.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Proceed => None,
            Self::RedirectToLogin => Some(paths::LOGIN),
            Self::RedirectToConversations => Some(paths::CONVERSATIONS),
        }
    }
}

/// Pre-navigation guard decision.
///
/// Every (destination, token-presence) combination maps to exactly one
/// outcome; there is no error path.
pub fn guard(route: &RouteDescriptor, authenticated: bool) -> GuardOutcome {
    if route.requires_auth && !authenticated {
        GuardOutcome::RedirectToLogin
    } else if route.name == RouteName::Login && authenticated {
        GuardOutcome::RedirectToConversations
    } else {
        GuardOutcome::Proceed
    }
}

/// Cloneable navigation command.
///
/// Wraps the router's navigate closure so non-component code (the 401
/// response hook) can issue a redirect without touching `window.location`.
/// `Send + Sync` so it can ride along inside context-provided values.
#[derive(Clone)]
pub struct Navigator(Arc<dyn Fn(&str) + Send + Sync>);

impl Navigator {
    pub fn new(navigate: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(navigate))
    }

    pub fn go(&self, path: &str) {
        (self.0)(path);
    }
}
