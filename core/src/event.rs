//! Notices: the user-visible outcome of each interaction.
//!
//! RULE: a handler never fails for something the operator can fix.
//! Rejections are reported here and the table is left as it was.

use crate::types::{Dish, Region};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    // ── Login gate ────────────────────────────────
    LoggedIn { username: String },
    LoginRejected,
    Registered { username: String },
    RegistrationRejected { reason: String },
    LoggedOut,
    LoginRequired { command: String },

    // ── Table mutations ───────────────────────────
    DemoLoaded { rows: usize },
    PricesRefreshed { rows: usize },
    DishAdded { region: Region, dish: Dish },
    DishRejected { reason: String },

    // ── View ──────────────────────────────────────
    RegionSelected { region: Region },

    /// Any other rejected interaction, e.g. an unreadable price file.
    ActionFailed { command: String, reason: String },
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Self::LoggedIn { .. }
            | Self::Registered { .. }
            | Self::LoggedOut
            | Self::DemoLoaded { .. }
            | Self::PricesRefreshed { .. }
            | Self::DishAdded { .. }
            | Self::RegionSelected { .. } => NoticeLevel::Success,
            Self::RegistrationRejected { .. } | Self::LoginRequired { .. } => NoticeLevel::Warning,
            Self::LoginRejected | Self::DishRejected { .. } | Self::ActionFailed { .. } => {
                NoticeLevel::Error
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::LoggedIn { username } => format!("Welcome, {username}"),
            Self::LoginRejected => "Wrong login".into(),
            Self::Registered { .. } => "Registration successful! Please login.".into(),
            Self::RegistrationRejected { reason } => reason.clone(),
            Self::LoggedOut => "Logged out".into(),
            Self::LoginRequired { command } => format!("Log in before '{command}'"),
            Self::DemoLoaded { .. } => "Loaded demo data".into(),
            Self::PricesRefreshed { .. } => "Prices refreshed".into(),
            Self::DishAdded { region, dish } => format!("New dish '{dish}' added for {region}"),
            Self::DishRejected { reason } => reason.clone(),
            Self::RegionSelected { region } => format!("Showing {region}"),
            Self::ActionFailed { command, reason } => format!("{command} failed: {reason}"),
        }
    }
}
