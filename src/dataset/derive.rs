//! Row-wise field derivation
//!
//! Pure map from raw records to enriched records. A batch containing any
//! invalid row fails as a whole with one aggregate validation error; no
//! partial output is produced.

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::{EnrichedRecord, Record};
use crate::error::{Error, Result, RowViolation};

/// Day 0 of the serial date scheme used by spreadsheet exports.
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("fixed epoch date is valid")
}

/// Convert a serial day-count into a calendar date.
///
/// Day 0 is 1899-12-30 and day 1 is 1899-12-31, the classic spreadsheet
/// scheme without the historical 1900 leap-year quirk. Fractional days
/// truncate toward the day boundary. Returns `None` for non-finite or
/// negative inputs, or when the count overflows the calendar range.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    serial_epoch().checked_add_days(Days::new(serial.trunc() as u64))
}

fn enrich(record: &Record) -> std::result::Result<EnrichedRecord, String> {
    if record.quantity < 0 {
        return Err(format!("negative quantity {}", record.quantity));
    }
    if record.unit_price < 0.0 {
        return Err(format!("negative unit_price {}", record.unit_price));
    }
    let order_date = serial_to_date(record.order_date).ok_or_else(|| {
        format!(
            "order_date {} is not a valid serial day-count",
            record.order_date
        )
    })?;

    Ok(EnrichedRecord {
        order_id: record.order_id,
        customer_id: record.customer_id.clone(),
        product_id: record.product_id.clone(),
        country: record.country.clone(),
        category: record.category.clone(),
        payment_method: record.payment_method.clone(),
        quantity: record.quantity,
        unit_price: record.unit_price,
        order_date,
        sales: record.quantity as f64 * record.unit_price,
        period: order_date.format("%Y-%m").to_string(),
    })
}

/// Derive the computed columns for every row.
///
/// Scans the whole batch and collects a violation per invalid row, so a
/// failure reports every offending `order_id` at once.
pub fn derive_records(records: &[Record]) -> Result<Vec<EnrichedRecord>> {
    let mut enriched = Vec::with_capacity(records.len());
    let mut violations = Vec::new();

    for record in records {
        match enrich(record) {
            Ok(row) => enriched.push(row),
            Err(reason) => violations.push(RowViolation {
                order_id: record.order_id,
                reason,
            }),
        }
    }

    if !violations.is_empty() {
        return Err(Error::Validation(violations));
    }

    debug!("Derived fields for {} rows", enriched.len());
    Ok(enriched)
}
