//! In-memory account registry.
//!
//! Passwords are stored and compared as plain text. This is a login gate
//! for a single-operator dashboard, not a security boundary. Nothing is
//! persisted; registrations are lost when the session ends.

use crate::{
    config::DefaultAccount,
    error::{WatchError, WatchResult},
};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct AccountRegistry {
    users: HashMap<String, String>,
}

impl AccountRegistry {
    /// A registry holding only `default`.
    pub fn seeded(default: &DefaultAccount) -> Self {
        let mut users = HashMap::new();
        users.insert(default.username.clone(), default.password.clone());
        Self { users }
    }

    pub fn register(&mut self, username: &str, password: &str) -> WatchResult<()> {
        if username.is_empty() || password.is_empty() {
            return Err(WatchError::InvalidInput(
                "enter both username and password".into(),
            ));
        }
        if self.users.contains_key(username) {
            return Err(WatchError::DuplicateUser(username.to_string()));
        }
        self.users.insert(username.to_string(), password.to_string());
        log::debug!("registered account '{username}'");
        Ok(())
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.users.get(username).is_some_and(|p| p == password)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::seeded(&DefaultAccount::default())
    }
}
