//! Per-operator session context.
//!
//! A session is created at the first interaction and dropped when the
//! process exits. It is passed explicitly to every dashboard handler;
//! nothing about the login state lives in globals.

use crate::{accounts::AccountRegistry, config::DefaultAccount};

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub accounts: AccountRegistry,
    user: Option<String>,
    selected_region: Option<String>,
}

impl Session {
    pub fn new(default_account: &DefaultAccount) -> Self {
        Self {
            accounts: AccountRegistry::seeded(default_account),
            user: None,
            selected_region: None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns whether the credentials were accepted. A failed attempt
    /// leaves an existing login untouched.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if self.accounts.authenticate(username, password) {
            self.user = Some(username.to_string());
            true
        } else {
            false
        }
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.selected_region = None;
    }

    pub fn selected_region(&self) -> Option<&str> {
        self.selected_region.as_deref()
    }

    pub fn select_region(&mut self, region: impl Into<String>) {
        self.selected_region = Some(region.into());
    }
}
