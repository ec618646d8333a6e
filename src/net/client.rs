//! HTTP client wrapper with explicit middleware composition.
//!
//! DESIGN
//! ======
//! Every request runs through three deterministic stages:
//!
//! 1. `prepare` — default headers plus an ordered list of
//!    [`RequestTransform`]s (bearer token injection lives here);
//! 2. dispatch — `gloo-net` send raced against a `gloo-timers` sleep for
//!    the per-request timeout (browser builds only);
//! 3. `classify` — ordered [`ResponseHook`]s observe the status before
//!    the result propagates, then the status maps to `Ok` or a single
//!    [`ApiError`].
//!
//! The only storage mutation in the pipeline is the [`AuthExpiry`] hook:
//! on a 401 it clears the session and navigates to the login route, and
//! the caller still receives [`ApiError::Unauthorized`] afterwards. All
//! other failures pass through unchanged; there is no retry.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use crate::routes::{Navigator, paths};
use crate::session::Session;

/// Base path prefixed to every application request.
pub const BASE_PATH: &str = "/api";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Errors surfaced by the client wrapper.
///
/// Only `Unauthorized` receives local handling; the rest are passed
/// through to the caller untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed with status {status}")]
    Status { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// An outgoing request before dispatch.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self { method, path: path.into(), headers: Vec::new(), body }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, None)
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(Method::Post, path, Some(body))
    }

    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(Method::Put, path, Some(body))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path, None)
    }

    /// First header value with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Ordered request mutation applied before dispatch.
///
/// `Send + Sync` because the client lives in the reactive context.
pub trait RequestTransform: Send + Sync {
    fn apply(&self, request: &mut ApiRequest);
}

/// Ordered response observer, run on every response status before the
/// result propagates to the caller.
pub trait ResponseHook: Send + Sync {
    fn on_response(&self, status: u16);
}

/// Adds `Authorization: Bearer <token>` when a session token exists.
pub struct BearerAuth {
    session: Session,
}

impl RequestTransform for BearerAuth {
    fn apply(&self, request: &mut ApiRequest) {
        if let Some(token) = self.session.token() {
            request
                .headers
                .push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
    }
}

/// Reacts to an unauthorized response: clears the session and issues a
/// navigation command to the login route.
pub struct AuthExpiry {
    session: Session,
    navigator: Navigator,
}

impl ResponseHook for AuthExpiry {
    fn on_response(&self, status: u16) {
        if status == 401 {
            self.session.clear();
            self.navigator.go(paths::LOGIN);
        }
    }
}

/// The application HTTP client.
///
/// Cheap to clone; transforms and hooks are shared behind `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    timeout_ms: u32,
    transforms: Vec<Arc<dyn RequestTransform>>,
    hooks: Vec<Arc<dyn ResponseHook>>,
}

impl ApiClient {
    /// Client with the standard pipeline: bearer injection on the way
    /// out, session expiry handling on the way back.
    pub fn new(session: Session, navigator: Navigator) -> Self {
        Self {
            base: BASE_PATH.to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            transforms: vec![Arc::new(BearerAuth { session: session.clone() })],
            hooks: vec![Arc::new(AuthExpiry { session, navigator })],
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Per-request timeout applied at dispatch.
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Apply default headers and the ordered request transforms.
    pub fn prepare(&self, mut request: ApiRequest) -> ApiRequest {
        if request.header("Content-Type").is_none() {
            request
                .headers
                .push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        for transform in &self.transforms {
            transform.apply(&mut request);
        }
        request
    }

    /// Run the response hooks, then map the status to a result.
    ///
    /// Hooks run first so the 401 side effects (storage clear, redirect)
    /// complete before the rejection reaches the caller.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for 401, `Status` for any other non-2xx status.
    pub fn classify(&self, status: u16) -> Result<(), ApiError> {
        for hook in &self.hooks {
            hook.on_response(status);
        }
        match status {
            200..=299 => Ok(()),
            401 => Err(ApiError::Unauthorized),
            other => Err(ApiError::Status { status: other }),
        }
    }

    /// Send a request and decode the JSON response body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; on the server this always fails, since HTTP is
    /// only available in the browser.
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.dispatch(self.prepare(request)).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("HTTP is only available in the browser".to_owned()))
        }
    }

    /// Send a request and discard the response body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn send_unit(&self, request: ApiRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.dispatch(self.prepare(request)).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("HTTP is only available in the browser".to_owned()))
        }
    }

    /// Dispatch a prepared request, racing it against the timeout.
    #[cfg(feature = "hydrate")]
    async fn dispatch(&self, request: ApiRequest) -> Result<gloo_net::http::Response, ApiError> {
        use futures::future::{Either, select};

        let url = self.url_for(&request.path);
        let mut builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
            Method::Put => gloo_net::http::Request::put(&url),
            Method::Delete => gloo_net::http::Request::delete(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let ready = match request.body {
            Some(body) => builder.body(body.to_string()),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            self.timeout_ms,
        )));

        let response = match select(Box::pin(ready.send()), Box::pin(timeout)).await {
            Either::Left((outcome, _)) => outcome.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(_) => return Err(ApiError::Timeout(self.timeout_ms)),
        };

        self.classify(response.status())?;
        Ok(response)
    }
}
