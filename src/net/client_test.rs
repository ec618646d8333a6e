use super::*;
use std::sync::Mutex;

fn recording_navigator() -> (Navigator, Arc<Mutex<Vec<String>>>) {
    let visited = Arc::new(Mutex::new(Vec::new()));
    let log = visited.clone();
    let navigator = Navigator::new(move |path: &str| log.lock().unwrap().push(path.to_owned()));
    (navigator, visited)
}

fn client_with(session: &Session) -> (ApiClient, Arc<Mutex<Vec<String>>>) {
    let (navigator, visited) = recording_navigator();
    (ApiClient::new(session.clone(), navigator), visited)
}

// =============================================================
// Request preparation
// =============================================================

#[test]
fn prepare_adds_default_content_type() {
    let session = Session::in_memory();
    let (client, _) = client_with(&session);

    let prepared = client.prepare(ApiRequest::get("/conversations"));
    assert_eq!(prepared.header("Content-Type"), Some("application/json"));
}

#[test]
fn prepare_keeps_an_explicit_content_type() {
    let session = Session::in_memory();
    let (client, _) = client_with(&session);

    let mut request = ApiRequest::get("/conversations");
    request
        .headers
        .push(("Content-Type".to_owned(), "text/plain".to_owned()));

    let prepared = client.prepare(request);
    assert_eq!(prepared.header("content-type"), Some("text/plain"));
    let count = prepared
        .headers
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn prepare_without_token_omits_authorization() {
    let session = Session::in_memory();
    let (client, _) = client_with(&session);

    let prepared = client.prepare(ApiRequest::get("/conversations"));
    assert!(prepared.header("Authorization").is_none());
}

#[test]
fn prepare_with_token_adds_bearer_header() {
    let session = Session::in_memory();
    session.establish("tok-1", "user-1");
    let (client, _) = client_with(&session);

    let prepared = client.prepare(ApiRequest::post(
        "/conversations",
        serde_json::json!({ "userId": "user-2" }),
    ));
    assert_eq!(prepared.header("Authorization"), Some("Bearer tok-1"));
}

#[test]
fn url_for_prefixes_the_base_path() {
    let session = Session::in_memory();
    let (client, _) = client_with(&session);

    assert_eq!(client.url_for("/session"), "/api/session");
    assert_eq!(client.url_for("/conversations/c-42"), "/api/conversations/c-42");
}

#[test]
fn defaults_match_the_contract() {
    let session = Session::in_memory();
    let (client, _) = client_with(&session);

    assert_eq!(client.timeout_ms(), 10_000);
    assert_eq!(BASE_PATH, "/api");
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn success_statuses_classify_as_ok() {
    let session = Session::in_memory();
    session.establish("tok-1", "user-1");
    let (client, visited) = client_with(&session);

    assert_eq!(client.classify(200), Ok(()));
    assert_eq!(client.classify(201), Ok(()));
    assert_eq!(client.classify(204), Ok(()));
    assert!(visited.lock().unwrap().is_empty());
    assert!(session.is_authenticated());
}

#[test]
fn unauthorized_clears_session_redirects_and_still_fails() {
    let session = Session::in_memory();
    session.establish("tok-1", "user-1");
    let (client, visited) = client_with(&session);

    let result = client.classify(401);

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert!(session.token().is_none());
    assert!(session.user_id().is_none());
    assert_eq!(*visited.lock().unwrap(), vec!["/".to_owned()]);
}

#[test]
fn other_failures_pass_through_untouched() {
    let session = Session::in_memory();
    session.establish("tok-1", "user-1");
    let (client, visited) = client_with(&session);

    assert_eq!(client.classify(404), Err(ApiError::Status { status: 404 }));
    assert_eq!(client.classify(500), Err(ApiError::Status { status: 500 }));

    // Session and navigation are untouched by non-401 failures.
    assert_eq!(session.token().as_deref(), Some("tok-1"));
    assert_eq!(session.user_id().as_deref(), Some("user-1"));
    assert!(visited.lock().unwrap().is_empty());
}

#[test]
fn unauthorized_without_a_session_still_redirects() {
    let session = Session::in_memory();
    let (client, visited) = client_with(&session);

    assert_eq!(client.classify(401), Err(ApiError::Unauthorized));
    assert_eq!(*visited.lock().unwrap(), vec!["/".to_owned()]);
}

#[test]
fn client_is_shareable_across_threads() {
    // The client is provided via the reactive context, which requires
    // Send + Sync values.
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
}

// =============================================================
// Request constructors
// =============================================================

#[test]
fn constructors_set_method_and_body() {
    let get = ApiRequest::get("/users");
    assert_eq!(get.method, Method::Get);
    assert!(get.body.is_none());

    let post = ApiRequest::post("/session", serde_json::json!({ "name": "alice" }));
    assert_eq!(post.method, Method::Post);
    assert_eq!(post.body, Some(serde_json::json!({ "name": "alice" })));

    let put = ApiRequest::put("/users/u-1/username", serde_json::json!({ "username": "bob" }));
    assert_eq!(put.method, Method::Put);

    let delete = ApiRequest::delete("/messages/m-1");
    assert_eq!(delete.method, Method::Delete);
    assert!(delete.body.is_none());
}

#[test]
fn error_messages_are_stable() {
    assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(
        ApiError::Status { status: 503 }.to_string(),
        "request failed with status 503",
    );
    assert_eq!(ApiError::Timeout(10_000).to_string(), "request timed out after 10000 ms");
}
