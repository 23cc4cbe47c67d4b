use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

#[test]
fn uninitialized_shows_loading() {
    let state = SessionState::default();
    assert_eq!(view_gate(&state), ViewGate::Loading);
}

#[test]
fn verifying_shows_loading() {
    let mut state = SessionState::default();
    state.begin_verify();
    assert_eq!(view_gate(&state), ViewGate::Loading);
}

#[test]
fn authenticated_shows_content() {
    let mut state = SessionState::default();
    state.login_succeeded(user());
    assert_eq!(view_gate(&state), ViewGate::Content);
}

#[test]
fn unauthenticated_hides_content() {
    let mut state = SessionState::default();
    state.skip_verify();
    assert_eq!(view_gate(&state), ViewGate::Hidden);
}

// A failed verification must never flash protected content: the gate goes
// Loading -> Hidden, never through Content.
#[test]
fn failed_verification_never_passes_through_content() {
    let mut state = SessionState::default();
    let epoch = state.begin_verify();
    assert_eq!(view_gate(&state), ViewGate::Loading);
    assert!(state.finish_verify(epoch, None));
    assert_eq!(view_gate(&state), ViewGate::Hidden);
}
