use crate::types::{Dish, Price, Region};
use serde::{Deserialize, Serialize};

/// Every operator interaction the dashboard accepts.
/// Variants may be added but never renamed: the tag is the wire name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DashboardCommand {
    // ── Login gate ────────────────────────────────
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        password: String,
    },
    Logout,

    // ── Sidebar controls ──────────────────────────
    LoadDemo,
    LiveUpdate,
    AddDish {
        region: Region,
        dish:   Dish,
        /// Left out of the request means missing, never zero.
        own_price: Option<Price>,
        competitor_a_price: Option<Price>,
        competitor_b_price: Option<Price>,
    },

    // ── Main view ─────────────────────────────────
    SelectRegion {
        region: Region,
    },
}

impl DashboardCommand {
    /// Stable wire name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. }        => "login",
            Self::Register { .. }     => "register",
            Self::Logout              => "logout",
            Self::LoadDemo            => "load_demo",
            Self::LiveUpdate          => "live_update",
            Self::AddDish { .. }      => "add_dish",
            Self::SelectRegion { .. } => "select_region",
        }
    }

    /// Everything past the login gate needs a logged-in session.
    pub fn requires_login(&self) -> bool {
        !matches!(self, Self::Login { .. } | Self::Register { .. })
    }
}
