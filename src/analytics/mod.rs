//! Sales aggregation module
//!
//! Five independent reductions over the enriched order table: four
//! group-and-sum breakdowns and one summary-scalar pass, assembled into a
//! renderer-agnostic report.

pub mod engine;
pub mod models;

pub use engine::{
    build_report, sum_by_category, sum_by_country, sum_by_payment_method, sum_by_period,
    summary_scalars,
};
pub use models::*;
