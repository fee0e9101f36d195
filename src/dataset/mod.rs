//! Order dataset loading and per-row field derivation
//!
//! The raw table is loaded once from a CSV export and is immutable
//! afterwards; every downstream structure is recomputed from it.

pub mod derive;
pub mod loader;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use derive::derive_records;
pub use loader::DatasetLoader;

/// One raw order row from the CSV export.
///
/// `order_date` is a serial day-count offset from 1899-12-30, the legacy
/// spreadsheet date scheme, not an ISO date string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub order_id: u64,
    pub customer_id: String,
    pub product_id: String,
    pub country: String,
    pub category: String,
    pub payment_method: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub order_date: f64,
}

/// A record with the derived columns every reduction depends on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    pub order_id: u64,
    pub customer_id: String,
    pub product_id: String,
    pub country: String,
    pub category: String,
    pub payment_method: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub order_date: NaiveDate,
    pub sales: f64,
    pub period: String,
}
