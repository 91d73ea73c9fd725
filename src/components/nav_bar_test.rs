use super::*;

#[test]
fn lookup_applies_for_same_user() {
    assert!(still_current(Some("123"), "123"));
}

#[test]
fn lookup_for_previous_user_is_dropped() {
    assert!(!still_current(Some("456"), "123"));
}

#[test]
fn lookup_after_sign_out_is_dropped() {
    assert!(!still_current(None, "123"));
}
