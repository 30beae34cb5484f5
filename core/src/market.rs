//! Synthetic market data: demo tables and live competitor price ticks.
//!
//! No marketplace is ever contacted. Demo generation draws fresh prices
//! from the configured ranges; a live update jitters the competitor
//! columns of the existing table.

use crate::{
    config::{DemoCatalog, DrawRange},
    record::PriceRecord,
    rng::PriceRng,
    table::PriceTable,
    types::Price,
};
use chrono::NaiveDate;

/// Build a full replacement table: one row per (region, dish), regions in
/// the outer loop. Prior rows are not carried over.
///
/// Per row, in draw order:
///   competitor A = base_price draw
///   competitor B = A + competitor_spread draw
///   own price    = A - own_undercut draw
pub fn generate_demo<R: PriceRng + ?Sized>(
    catalog: &DemoCatalog,
    date: NaiveDate,
    rng: &mut R,
) -> PriceTable {
    let mut rows = Vec::with_capacity(catalog.regions.len() * catalog.dishes.len());
    for region in &catalog.regions {
        for dish in &catalog.dishes {
            let competitor_a = draw(rng, catalog.base_price);
            let competitor_b = competitor_a + draw(rng, catalog.competitor_spread);
            let own = competitor_a - draw(rng, catalog.own_undercut);

            rows.push(PriceRecord::new(
                region.as_str(),
                dish.as_str(),
                own as Price,
                competitor_a as Price,
                competitor_b as Price,
                date,
            ));
        }
    }
    log::debug!(
        "demo: generated {} rows ({} regions x {} dishes) dated {date}",
        rows.len(),
        catalog.regions.len(),
        catalog.dishes.len()
    );
    PriceTable::from_rows(rows)
}

/// Shift both competitor prices of every row by an independent `jitter`
/// draw (A then B, row by row). Everything else is untouched and the
/// previous prices are not kept.
pub fn perturb_competitor_prices<R: PriceRng + ?Sized>(
    table: &PriceTable,
    jitter: DrawRange,
    rng: &mut R,
) -> PriceTable {
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            let mut next = row.clone();
            next.competitor_a_price += draw(rng, jitter) as Price;
            next.competitor_b_price += draw(rng, jitter) as Price;
            next
        })
        .collect();
    log::debug!("live update: jittered {} rows by [{}, {}]", table.len(), jitter.lo, jitter.hi);
    PriceTable::from_rows(rows)
}

fn draw<R: PriceRng + ?Sized>(rng: &mut R, range: DrawRange) -> i64 {
    rng.int_between(range.lo, range.hi)
}
