//! The persisted row type.

use crate::{
    error::{WatchError, WatchResult},
    types::{Dish, Price, Region},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column order of the persisted file. Never reorder: existing files
/// written by earlier runs must keep loading.
pub const COLUMNS: [&str; 6] = [
    "State",
    "Dish",
    "Your_Price",
    "Swiggy_Price",
    "Zomato_Price",
    "Date",
];

/// One dish's pricing in one region on one date.
///
/// Competitor A is the Swiggy listing, competitor B the Zomato listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "State")]
    pub region: Region,
    #[serde(rename = "Dish")]
    pub dish: Dish,
    #[serde(rename = "Your_Price")]
    pub own_price: Price,
    #[serde(rename = "Swiggy_Price")]
    pub competitor_a_price: Price,
    #[serde(rename = "Zomato_Price")]
    pub competitor_b_price: Price,
    #[serde(rename = "Date")]
    pub recorded_date: NaiveDate,
}

impl PriceRecord {
    pub fn new(
        region: impl Into<Region>,
        dish: impl Into<Dish>,
        own_price: Price,
        competitor_a_price: Price,
        competitor_b_price: Price,
        recorded_date: NaiveDate,
    ) -> Self {
        Self {
            region: region.into(),
            dish: dish.into(),
            own_price,
            competitor_a_price,
            competitor_b_price,
            recorded_date,
        }
    }

    /// Check the constraints an operator-entered row must satisfy.
    pub fn validate(&self) -> WatchResult<()> {
        if self.region.is_empty() {
            return Err(WatchError::InvalidInput("region must not be empty".into()));
        }
        if self.dish.is_empty() {
            return Err(WatchError::InvalidInput("dish must not be empty".into()));
        }
        for (field, value) in self.prices() {
            if !value.is_finite() {
                return Err(WatchError::InvalidInput(format!("{field} must be a number")));
            }
            if value < 0.0 {
                return Err(WatchError::InvalidInput(format!(
                    "{field} must not be negative (got {value})"
                )));
            }
        }
        Ok(())
    }

    fn prices(&self) -> [(&'static str, Price); 3] {
        [
            ("own_price", self.own_price),
            ("competitor_a_price", self.competitor_a_price),
            ("competitor_b_price", self.competitor_b_price),
        ]
    }
}
