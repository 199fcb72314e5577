//! Scope tracker tests.

use tmplc_checker::ScopeTracker;

#[test]
fn test_empty_tracker_binds_nothing() {
    let scopes = ScopeTracker::new();
    assert_eq!(scopes.depth(), 0);
    assert!(!scopes.is_bound("foo"));
}

#[test]
fn test_enter_and_exit() {
    let mut scopes = ScopeTracker::new();
    scopes.enter_scope(&["foo", "bar"]);
    assert!(scopes.is_bound("foo"));
    assert!(scopes.is_bound("bar"));
    assert!(!scopes.is_bound("baz"));
    scopes.exit_scope();
    assert!(!scopes.is_bound("foo"));
    assert!(!scopes.is_bound("bar"));
    assert_eq!(scopes.depth(), 0);
}

#[test]
fn test_empty_frame_counts_toward_depth() {
    let mut scopes = ScopeTracker::new();
    scopes.enter_scope(&[]);
    assert_eq!(scopes.depth(), 1);
    scopes.exit_scope();
    assert_eq!(scopes.depth(), 0);
}

#[test]
fn test_nested_frames_compose() {
    let mut scopes = ScopeTracker::new();
    scopes.enter_scope(&["outer"]);
    scopes.enter_scope(&["inner"]);
    assert!(scopes.is_bound("outer"));
    assert!(scopes.is_bound("inner"));
    scopes.exit_scope();
    assert!(scopes.is_bound("outer"));
    assert!(!scopes.is_bound("inner"));
    scopes.exit_scope();
    assert!(!scopes.is_bound("outer"));
}

#[test]
fn test_inner_rebinding_does_not_unbind_outer() {
    let mut scopes = ScopeTracker::new();
    scopes.enter_scope(&["item"]);
    scopes.enter_scope(&["item", "index"]);
    scopes.exit_scope();
    assert!(scopes.is_bound("item"));
    assert!(!scopes.is_bound("index"));
    scopes.exit_scope();
    assert!(!scopes.is_bound("item"));
}

#[test]
#[should_panic(expected = "without a matching enter_scope")]
fn test_unbalanced_exit_panics() {
    let mut scopes = ScopeTracker::new();
    scopes.exit_scope();
}
