//! Read-only per-region projections. Nothing here is persisted.

use crate::{
    error::{WatchError, WatchResult},
    record::PriceRecord,
    table::PriceTable,
    types::Price,
};
use serde::Serialize;

/// Default ratio applied to the market average to get a suggested price.
pub const SUGGESTED_RATIO: Price = 0.95;

/// A record together with its computed market figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRow {
    #[serde(flatten)]
    pub record: PriceRecord,
    #[serde(rename = "Market_Avg")]
    pub market_average: Price,
    #[serde(rename = "Suggested_Price")]
    pub suggested_price: Price,
}

/// Mean of the two competitor prices.
pub fn market_average(record: &PriceRecord) -> WatchResult<Price> {
    for (field, value) in [
        ("competitor_a_price", record.competitor_a_price),
        ("competitor_b_price", record.competitor_b_price),
    ] {
        if !value.is_finite() {
            return Err(WatchError::InvalidInput(format!(
                "{} / {}: {field} is not a number",
                record.region, record.dish
            )));
        }
    }
    Ok((record.competitor_a_price + record.competitor_b_price) / 2.0)
}

pub fn derive_row(record: &PriceRecord, ratio: Price) -> WatchResult<DerivedRow> {
    let market_average = market_average(record)?;
    Ok(DerivedRow {
        record: record.clone(),
        market_average,
        suggested_price: market_average * ratio,
    })
}

/// Derived rows for every record of `region`, in table order.
/// An unknown region yields an empty view.
pub fn derive_region(table: &PriceTable, region: &str, ratio: Price) -> WatchResult<Vec<DerivedRow>> {
    table
        .for_region(region)
        .map(|r| derive_row(r, ratio))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub region: String,
    /// Rows in the region, duplicates included.
    pub total_dishes: usize,
}

pub fn summarize(region: &str, rows: &[DerivedRow]) -> RegionSummary {
    RegionSummary {
        region: region.to_string(),
        total_dishes: rows.len(),
    }
}

// ── Charts ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One plotted series: a (dish, value) point per row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<(String, Price)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: &'static str,
    pub kind: ChartKind,
    pub series: Vec<Series>,
}

fn series(name: &'static str, rows: &[DerivedRow], value: impl Fn(&DerivedRow) -> Price) -> Series {
    Series {
        name,
        points: rows
            .iter()
            .map(|r| (r.record.dish.clone(), value(r)))
            .collect(),
    }
}

/// Own price against both competitors, one line each.
pub fn market_comparison(rows: &[DerivedRow]) -> Chart {
    Chart {
        title: "Live Market Comparison",
        kind: ChartKind::Line,
        series: vec![
            series("Your Price", rows, |r| r.record.own_price),
            series("Swiggy", rows, |r| r.record.competitor_a_price),
            series("Zomato", rows, |r| r.record.competitor_b_price),
        ],
    }
}

/// Own price against market average and suggested price, as bars.
pub fn price_strategy(rows: &[DerivedRow]) -> Chart {
    Chart {
        title: "Profitable Price Strategy",
        kind: ChartKind::Bar,
        series: vec![
            series("Your Price", rows, |r| r.record.own_price),
            series("Market Avg", rows, |r| r.market_average),
            series("Suggested Price", rows, |r| r.suggested_price),
        ],
    }
}
