use super::*;

fn sample_user() -> User {
    User { id: "1".to_owned(), name: "A".to_owned(), email: "user@example.com".to_owned() }
}

fn other_user() -> User {
    User { id: "2".to_owned(), name: "B".to_owned(), email: "b@example.com".to_owned() }
}

// =============================================================================
// Aggregate invariant: is_authenticated == user().is_some() at every phase.
// =============================================================================

#[test]
fn invariant_holds_across_all_transitions() {
    let mut state = SessionState::default();
    assert_eq!(state.is_authenticated(), state.user().is_some());

    let epoch = state.begin_verify();
    assert_eq!(state.is_authenticated(), state.user().is_some());

    state.finish_verify(epoch, Some(sample_user()));
    assert_eq!(state.is_authenticated(), state.user().is_some());

    state.logged_out();
    assert_eq!(state.is_authenticated(), state.user().is_some());

    state.login_succeeded(sample_user());
    assert_eq!(state.is_authenticated(), state.user().is_some());
}

// =============================================================================
// Phase transitions
// =============================================================================

#[test]
fn default_is_uninitialized_and_loading() {
    let state = SessionState::default();
    assert_eq!(state.phase(), &SessionPhase::Uninitialized);
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn skip_verify_settles_unauthenticated_without_loading() {
    let mut state = SessionState::default();
    state.skip_verify();
    assert_eq!(state.phase(), &SessionPhase::Unauthenticated);
    assert!(!state.is_loading());
}

#[test]
fn begin_verify_is_loading() {
    let mut state = SessionState::default();
    state.begin_verify();
    assert_eq!(state.phase(), &SessionPhase::Verifying);
    assert!(state.is_loading());
}

#[test]
fn verify_success_authenticates() {
    let mut state = SessionState::default();
    let epoch = state.begin_verify();
    assert!(state.finish_verify(epoch, Some(sample_user())));
    assert_eq!(state.user(), Some(&sample_user()));
    assert!(!state.is_loading());
}

#[test]
fn verify_failure_settles_unauthenticated() {
    let mut state = SessionState::default();
    let epoch = state.begin_verify();
    assert!(state.finish_verify(epoch, None));
    assert_eq!(state.phase(), &SessionPhase::Unauthenticated);
}

#[test]
fn login_succeeded_from_unauthenticated() {
    let mut state = SessionState::default();
    state.skip_verify();
    state.login_succeeded(sample_user());
    assert!(state.is_authenticated());
}

#[test]
fn logged_out_from_authenticated() {
    let mut state = SessionState::default();
    state.login_succeeded(sample_user());
    state.logged_out();
    assert_eq!(state.phase(), &SessionPhase::Unauthenticated);
    assert_eq!(state.user(), None);
}

// =============================================================================
// Stale-resolution discard: last initiated verification wins.
// =============================================================================

#[test]
fn stale_resolution_is_discarded() {
    let mut state = SessionState::default();
    let epoch_a = state.begin_verify();
    let epoch_b = state.begin_verify();

    // B resolves first with a user.
    assert!(state.finish_verify(epoch_b, Some(other_user())));
    // A resolves late; must not overwrite B's result.
    assert!(!state.finish_verify(epoch_a, Some(sample_user())));

    assert_eq!(state.user(), Some(&other_user()));
}

#[test]
fn stale_failure_cannot_clobber_fresh_success() {
    let mut state = SessionState::default();
    let epoch_a = state.begin_verify();
    let epoch_b = state.begin_verify();

    assert!(state.finish_verify(epoch_b, Some(sample_user())));
    assert!(!state.finish_verify(epoch_a, None));
    assert!(state.is_authenticated());
}

#[test]
fn resolution_after_logout_is_discarded() {
    let mut state = SessionState::default();
    let epoch = state.begin_verify();
    state.logged_out();
    // The verify initiated before logout resolves afterwards; teardown wins.
    assert!(!state.finish_verify(epoch, Some(sample_user())));
    assert!(!state.is_authenticated());
}

#[test]
fn finish_verify_applies_only_once() {
    let mut state = SessionState::default();
    let epoch = state.begin_verify();
    assert!(state.finish_verify(epoch, None));
    assert!(!state.finish_verify(epoch, Some(sample_user())));
    assert!(!state.is_authenticated());
}
