//! Aggregation engine for enriched order records
//!
//! Each reduction takes the full table and owns its accumulator; none
//! depends on another's output, so `build_report` runs all five on
//! blocking worker threads over a shared read-only view.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::task;
use tracing::{debug, info};

use super::models::{AggregateTable, SalesReport, SummaryScalars};
use crate::dataset::EnrichedRecord;
use crate::error::Result;

/// Sum sales per country, in first-appearance order.
pub fn sum_by_country(records: &[EnrichedRecord]) -> AggregateTable {
    AggregateTable::from_groups(records.iter().map(|r| (r.country.as_str(), r.sales)))
}

/// Sum sales per category, sorted descending by total.
pub fn sum_by_category(records: &[EnrichedRecord]) -> AggregateTable {
    AggregateTable::from_groups(records.iter().map(|r| (r.category.as_str(), r.sales)))
        .sorted_by_total_desc()
}

/// Sum sales per `YYYY-MM` period, sorted chronologically.
pub fn sum_by_period(records: &[EnrichedRecord]) -> AggregateTable {
    AggregateTable::from_groups(records.iter().map(|r| (r.period.as_str(), r.sales)))
        .sorted_by_key_asc()
}

/// Sum sales per payment method, in first-appearance order.
pub fn sum_by_payment_method(records: &[EnrichedRecord]) -> AggregateTable {
    AggregateTable::from_groups(records.iter().map(|r| (r.payment_method.as_str(), r.sales)))
}

/// Headline metrics: truncated total sales plus distinct-value counts.
pub fn summary_scalars(records: &[EnrichedRecord]) -> SummaryScalars {
    let mut orders = HashSet::new();
    let mut customers = HashSet::new();
    let mut products = HashSet::new();
    let mut total = 0.0_f64;

    for record in records {
        orders.insert(record.order_id);
        customers.insert(record.customer_id.as_str());
        products.insert(record.product_id.as_str());
        total += record.sales;
    }

    debug!(
        "Summary pass over {} rows: {:.2} total sales",
        records.len(),
        total
    );

    SummaryScalars {
        // Drop fractional cents; the display contract truncates, never rounds.
        total_sales: total.trunc() as u64,
        total_orders: orders.len(),
        total_customers: customers.len(),
        total_products: products.len(),
    }
}

/// Run all five reductions concurrently and assemble the report.
///
/// The enriched table is shared read-only; an empty table yields empty
/// breakdowns and all-zero scalars, never an error.
pub async fn build_report(records: Arc<[EnrichedRecord]>) -> Result<SalesReport> {
    let country_rows = Arc::clone(&records);
    let category_rows = Arc::clone(&records);
    let period_rows = Arc::clone(&records);
    let payment_rows = Arc::clone(&records);
    let summary_rows = Arc::clone(&records);

    let (by_country, by_category, by_period, by_payment_method, summary) = tokio::join!(
        task::spawn_blocking(move || sum_by_country(&country_rows)),
        task::spawn_blocking(move || sum_by_category(&category_rows)),
        task::spawn_blocking(move || sum_by_period(&period_rows)),
        task::spawn_blocking(move || sum_by_payment_method(&payment_rows)),
        task::spawn_blocking(move || summary_scalars(&summary_rows)),
    );

    let report = SalesReport {
        by_country: by_country?,
        by_category: by_category?,
        by_period: by_period?,
        by_payment_method: by_payment_method?,
        summary: summary?,
    };

    info!(
        "Aggregated {} rows into {} countries, {} categories, {} periods, {} payment methods",
        records.len(),
        report.by_country.len(),
        report.by_category.len(),
        report.by_period.len(),
        report.by_payment_method.len()
    );

    Ok(report)
}
