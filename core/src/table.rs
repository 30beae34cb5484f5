//! The in-memory price table.
//!
//! RULE: rows are only ever appended, or have their competitor prices
//! overwritten in bulk by a live update. Nothing is deleted or edited
//! in place. Duplicate (region, dish) rows are kept.

use crate::{error::WatchResult, record::PriceRecord};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceTable {
    rows: Vec<PriceRecord>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<PriceRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PriceRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&PriceRecord> {
        self.rows.last()
    }

    /// Return a new table with `record` at the end.
    /// The record is validated first; an invalid record leaves `self` untouched.
    pub fn append(&self, record: PriceRecord) -> WatchResult<PriceTable> {
        record.validate()?;
        let mut rows = self.rows.clone();
        rows.push(record);
        Ok(Self { rows })
    }

    /// Distinct regions in first-appearance order.
    pub fn regions(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.region.as_str()) {
                seen.push(&row.region);
            }
        }
        seen
    }

    /// All rows for `region`, in table order.
    pub fn for_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a PriceRecord> + 'a {
        self.rows.iter().filter(move |r| r.region == region)
    }
}
