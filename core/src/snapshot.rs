//! Rendered dashboard state, as handed to whatever draws it.

use crate::{
    event::{Notice, NoticeLevel},
    view::{Chart, DerivedRow, RegionSummary},
};
use serde::Serialize;

pub const EMPTY_TABLE_HINT: &str = "No prices yet. Load demo data or add a dish.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub logged_in:       bool,
    pub user:            Option<String>,
    pub regions:         Vec<String>,
    pub selected_region: Option<String>,
    pub summary:         Option<RegionSummary>,
    pub rows:            Vec<DerivedRow>,
    pub charts:          Vec<Chart>,
    pub hint:            Option<&'static str>,
}

impl DashboardState {
    pub fn logged_out() -> Self {
        Self {
            logged_in:       false,
            user:            None,
            regions:         Vec::new(),
            selected_region: None,
            summary:         None,
            rows:            Vec::new(),
            charts:          Vec::new(),
            hint:            None,
        }
    }

    pub fn empty_table(user: &str) -> Self {
        Self {
            logged_in: true,
            user: Some(user.to_string()),
            hint: Some(EMPTY_TABLE_HINT),
            ..Self::logged_out()
        }
    }
}

/// A notice flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNotice {
    pub level:   NoticeLevel,
    pub message: String,
}

impl From<&Notice> for RenderedNotice {
    fn from(notice: &Notice) -> Self {
        Self {
            level:   notice.level(),
            message: notice.message(),
        }
    }
}
