//! PriceWatch core: the menu price table, its CSV store, synthetic market
//! data and the per-region pricing view.

pub mod accounts;
pub mod clock;
pub mod command;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod market;
pub mod record;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod table;
pub mod types;
pub mod view;

pub use error::{WatchError, WatchResult};
