use super::*;

// =============================================================
// Pushing
// =============================================================

#[test]
fn success_and_error_set_levels() {
    let mut state = ToastState::default();
    state.success("Login successfully");
    state.error("Login failed: Unauthorized");

    let toasts = state.toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0].level, ToastLevel::Success);
    assert_eq!(toasts[0].message, "Login successfully");
    assert_eq!(toasts[1].level, ToastLevel::Error);
    assert_eq!(toasts[1].message, "Login failed: Unauthorized");
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut state = ToastState::default();
    let first = state.success("a");
    let second = state.error("b");
    assert!(second > first);
}

// =============================================================
// Dismissing
// =============================================================

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.success("a");
    let second = state.success("b");

    state.dismiss(first);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.success("a");
    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.success("a");
    state.dismiss(first);
    let second = state.success("b");
    assert_ne!(first, second);
}
