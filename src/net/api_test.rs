use super::*;

// =============================================================
// Search path encoding
// =============================================================

#[test]
fn search_path_passes_plain_usernames_through() {
    assert_eq!(search_path("alice"), "/users?q=alice");
    assert_eq!(search_path("bob_42"), "/users?q=bob_42");
}

#[test]
fn search_path_escapes_reserved_characters() {
    assert_eq!(search_path("a b"), "/users?q=a%20b");
    assert_eq!(search_path("a&b=c"), "/users?q=a%26b%3Dc");
    assert_eq!(search_path("a#b"), "/users?q=a%23b");
}
