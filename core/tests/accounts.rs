use pricewatch_core::{
    accounts::AccountRegistry,
    config::DefaultAccount,
    session::Session,
    WatchError,
};

#[test]
fn default_admin_account_authenticates() {
    let registry = AccountRegistry::default();
    assert!(registry.authenticate("admin", "1234"));
    assert!(!registry.authenticate("admin", "wrong"));
    assert!(!registry.authenticate("nobody", "1234"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registering_an_existing_username_fails() {
    let mut registry = AccountRegistry::default();
    assert!(matches!(
        registry.register("admin", "x"),
        Err(WatchError::DuplicateUser(u)) if u == "admin"
    ));
    // The original password still works.
    assert!(registry.authenticate("admin", "1234"));
}

#[test]
fn registering_requires_both_fields() {
    let mut registry = AccountRegistry::default();
    assert!(matches!(registry.register("", "pw"), Err(WatchError::InvalidInput(_))));
    assert!(matches!(registry.register("chef", ""), Err(WatchError::InvalidInput(_))));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registered_account_can_log_in() {
    let mut registry = AccountRegistry::default();
    registry.register("chef", "masala").unwrap();
    assert!(registry.contains("chef"));
    assert!(registry.authenticate("chef", "masala"));
    assert!(!registry.authenticate("chef", "Masala"));
}

#[test]
fn session_login_and_logout() {
    let mut session = Session::new(&DefaultAccount::default());
    assert!(!session.is_logged_in());

    assert!(!session.login("admin", "nope"));
    assert!(!session.is_logged_in());

    assert!(session.login("admin", "1234"));
    assert_eq!(session.user(), Some("admin"));
    session.select_region("Karnataka");

    session.logout();
    assert!(!session.is_logged_in());
    assert_eq!(session.selected_region(), None);
    // Registry survives logout.
    assert!(session.accounts.contains("admin"));
}

#[test]
fn sessions_do_not_share_registrations() {
    let default = DefaultAccount::default();
    let mut a = Session::new(&default);
    let b = Session::new(&default);

    a.accounts.register("chef", "masala").unwrap();
    assert!(!b.accounts.contains("chef"));
}
