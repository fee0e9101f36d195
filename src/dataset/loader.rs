//! CSV dataset loader

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use super::Record;
use crate::error::{Error, Result};

/// Columns every order export must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "order_id",
    "customer_id",
    "product_id",
    "country",
    "category",
    "payment_method",
    "quantity",
    "unit_price",
    "order_date",
];

pub struct DatasetLoader;

impl DatasetLoader {
    fn verify_required_columns(headers: &csv::StringRecord) -> Result<()> {
        let present: HashSet<&str> = headers.iter().collect();
        for column in REQUIRED_COLUMNS {
            if !present.contains(column) {
                return Err(Error::MissingColumn(column.to_string()));
            }
        }
        Ok(())
    }

    /// Read an order export into memory, verifying the schema first.
    ///
    /// Header matching is exact; no case folding.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
        let file = File::open(&path)?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        Self::verify_required_columns(rdr.headers()?)?;

        let mut records = Vec::new();
        for row in rdr.deserialize() {
            let record: Record = row?;
            records.push(record);
        }

        debug!(
            "Loaded {} order rows from {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(records)
    }
}
