//! Shared primitive types used across the dashboard.

/// A price in rupees. Demo data is whole-rupee but manual entry is not.
pub type Price = f64;

/// A region name, persisted as the `State` column.
pub type Region = String;

/// A dish name.
pub type Dish = String;
