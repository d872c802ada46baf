use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "a", "first");
    let second = state.push(ToastKind::Error, "b", "second");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "a", "first");
    let second = state.push(ToastKind::Success, "b", "second");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "a", "first");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "a", "first");
    state.dismiss(first);
    let second = state.push(ToastKind::Info, "b", "second");
    assert!(second > first);
}
