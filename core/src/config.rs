use crate::{
    error::{WatchError, WatchResult},
    types::{Dish, Price, Region},
    view::SUGGESTED_RATIO,
};
use serde::{Deserialize, Serialize};

/// An inclusive integer range `[lo, hi]` used for random price draws.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawRange {
    pub lo: i64,
    pub hi: i64,
}

impl DrawRange {
    pub const fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }
}

/// Regions and dishes used to synthesize demo data, plus the ranges the
/// demo prices are drawn from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoCatalog {
    pub regions: Vec<Region>,
    pub dishes: Vec<Dish>,
    /// Competitor A base price.
    pub base_price: DrawRange,
    /// Offset of competitor B from competitor A.
    pub competitor_spread: DrawRange,
    /// How far the operator's own price sits below competitor A.
    pub own_undercut: DrawRange,
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self {
            regions: ["Karnataka", "Tamil Nadu", "Telangana"]
                .into_iter()
                .map(String::from)
                .collect(),
            dishes: ["Dosa", "Idli", "Vada", "Biryani", "Pizza", "Burger"]
                .into_iter()
                .map(String::from)
                .collect(),
            base_price: DrawRange::new(100, 220),
            competitor_spread: DrawRange::new(-10, 10),
            own_undercut: DrawRange::new(10, 20),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultAccount {
    pub username: String,
    pub password: String,
}

impl Default for DefaultAccount {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            password: "1234".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Path of the shared price file.
    pub data_file: String,
    /// Suggested price = market average * this ratio.
    pub suggested_ratio: Price,
    pub demo: DemoCatalog,
    /// Per-tick jitter applied to each competitor price by a live update.
    pub live_jitter: DrawRange,
    /// Account every new session starts with.
    pub default_account: DefaultAccount,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: "menu_prices.csv".into(),
            suggested_ratio: SUGGESTED_RATIO,
            demo: DemoCatalog::default(),
            live_jitter: DrawRange::new(-5, 5),
            default_account: DefaultAccount::default(),
        }
    }
}

impl DashboardConfig {
    /// Load from a JSON file. Fields left out keep their defaults.
    pub fn load(path: &str) -> WatchResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: DashboardConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> WatchResult<()> {
        let ranges = [
            ("demo.base_price", self.demo.base_price),
            ("demo.competitor_spread", self.demo.competitor_spread),
            ("demo.own_undercut", self.demo.own_undercut),
            ("live_jitter", self.live_jitter),
        ];
        if let Some((name, r)) = ranges.iter().find(|(_, r)| r.lo > r.hi) {
            return Err(WatchError::InvalidInput(format!(
                "{name}: lo {} is above hi {}",
                r.lo, r.hi
            )));
        }
        if self.demo.regions.is_empty() || self.demo.dishes.is_empty() {
            return Err(WatchError::InvalidInput(
                "demo catalog needs at least one region and one dish".into(),
            ));
        }
        if !self.suggested_ratio.is_finite() || self.suggested_ratio <= 0.0 {
            return Err(WatchError::InvalidInput(format!(
                "suggested_ratio must be positive (got {})",
                self.suggested_ratio
            )));
        }
        if self.data_file.trim().is_empty() {
            return Err(WatchError::InvalidInput("data_file must not be empty".into()));
        }
        Ok(())
    }
}
