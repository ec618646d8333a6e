use super::*;

// =============================================================
// Session over MemoryStore
// =============================================================

#[test]
fn fresh_session_has_no_token() {
    let session = Session::in_memory();
    assert!(session.token().is_none());
    assert!(session.user_id().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn establish_stores_both_keys() {
    let session = Session::in_memory();
    session.establish("tok-1", "user-1");

    assert_eq!(session.token().as_deref(), Some("tok-1"));
    assert_eq!(session.user_id().as_deref(), Some("user-1"));
    assert!(session.is_authenticated());
}

#[test]
fn clear_removes_both_keys() {
    let session = Session::in_memory();
    session.establish("tok-1", "user-1");
    session.clear();

    assert!(session.token().is_none());
    assert!(session.user_id().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn clones_share_the_same_store() {
    let session = Session::in_memory();
    let other = session.clone();

    session.establish("tok-1", "user-1");
    assert_eq!(other.token().as_deref(), Some("tok-1"));

    other.clear();
    assert!(session.token().is_none());
}

#[test]
fn session_is_shareable_across_threads() {
    // Session handles live in the reactive context, which requires
    // Send + Sync values.
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
}

#[test]
fn store_uses_documented_keys() {
    let store = Arc::new(MemoryStore::default());
    let session = Session::new(store.clone());
    session.establish("tok-1", "user-1");

    assert_eq!(store.get("wasatext_token").as_deref(), Some("tok-1"));
    assert_eq!(store.get("wasatext_user_id").as_deref(), Some("user-1"));
}
