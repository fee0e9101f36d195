//! # Salescope
//!
//! Batch analytics for transactional e-commerce order exports. Loads a
//! CSV of raw order rows, derives the per-row fields every breakdown
//! needs (sales amount, calendar date, month bucket), and reduces them to
//! four breakdown tables plus headline metrics. The pipeline is a chain
//! of pure transforms over an immutable table; rendering happens on the
//! far side of a series-object boundary.
//!
//! ## Modules
//!
//! - `dataset` - CSV loading, schema validation, and field derivation
//! - `analytics` - group-and-sum reductions and report assembly
//! - `error` - crate-wide error taxonomy

pub mod analytics;
pub mod dataset;
pub mod error;

pub use analytics::engine::build_report;
pub use analytics::models::{
    AggregateEntry, AggregateTable, SalesReport, Series, SeriesOrdering, SummaryScalars,
};
pub use dataset::{derive_records, DatasetLoader, EnrichedRecord, Record};
pub use error::{Error, Result, RowViolation};
