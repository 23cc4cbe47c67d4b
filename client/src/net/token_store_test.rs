use super::*;

fn credential(access: &str) -> Credential {
    Credential::new(access)
}

// =============================================================================
// store / read round trip
// =============================================================================

#[test]
fn store_then_read_returns_equal_credential() {
    let store = TokenStore::new();
    let cred = credential("abc");
    store.store(&cred);
    assert_eq!(store.read(), Some(cred));
}

#[test]
fn read_on_empty_store_is_none() {
    assert_eq!(TokenStore::new().read(), None);
}

#[test]
fn store_keeps_refresh_companion() {
    let store = TokenStore::new();
    let cred = Credential { access: "abc".to_owned(), refresh: Some("def".to_owned()) };
    store.store(&cred);
    assert_eq!(store.read(), Some(cred));
}

#[test]
fn storing_without_refresh_drops_stale_companion() {
    let store = TokenStore::new();
    store.store(&Credential { access: "a".to_owned(), refresh: Some("r".to_owned()) });
    store.store(&credential("b"));
    assert_eq!(store.read(), Some(credential("b")));
}

#[test]
fn store_replaces_previous_credential() {
    let store = TokenStore::new();
    store.store(&credential("old"));
    store.store(&credential("new"));
    assert_eq!(store.read().unwrap().access, "new");
}

// =============================================================================
// clear
// =============================================================================

#[test]
fn clear_removes_credential() {
    let store = TokenStore::new();
    store.store(&credential("abc"));
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn clear_is_idempotent() {
    let store = TokenStore::new();
    store.store(&credential("abc"));
    store.clear();
    store.clear();
    assert_eq!(store.read(), None);
    assert_eq!(store.cached_user(), None);
}

#[test]
fn clear_on_empty_store_is_a_noop() {
    let store = TokenStore::new();
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn clear_also_drops_cached_user() {
    let store = TokenStore::new();
    store.store(&credential("abc"));
    store.cache_user(&sample_user());
    store.clear();
    assert_eq!(store.cached_user(), None);
}

// =============================================================================
// user cache
// =============================================================================

fn sample_user() -> User {
    User { id: "1".to_owned(), name: "A".to_owned(), email: "user@example.com".to_owned() }
}

#[test]
fn cached_user_round_trips() {
    let store = TokenStore::new();
    store.cache_user(&sample_user());
    assert_eq!(store.cached_user(), Some(sample_user()));
}

#[test]
fn cached_user_on_empty_store_is_none() {
    assert_eq!(TokenStore::new().cached_user(), None);
}

// =============================================================================
// shared medium
// =============================================================================

#[test]
fn clones_share_the_same_medium() {
    let store = TokenStore::new();
    let alias = store.clone();
    store.store(&credential("abc"));
    assert_eq!(alias.read(), Some(credential("abc")));
    alias.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn separate_stores_are_independent() {
    let a = TokenStore::new();
    let b = TokenStore::new();
    a.store(&credential("abc"));
    assert_eq!(b.read(), None);
}
