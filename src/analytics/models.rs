//! Data models for the sales report

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One group in a breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEntry {
    pub key: String,
    pub total: f64,
}

/// Ordered mapping from a group key to its summed sales.
///
/// Entries keep the order in which keys first appeared in the input, so
/// repeated runs over the same file produce identical output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateTable {
    entries: Vec<AggregateEntry>,
}

impl AggregateTable {
    /// Accumulate `(key, value)` pairs into per-key sums.
    ///
    /// Key equality is exact string equality; no case folding.
    pub fn from_groups<'a, I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<AggregateEntry> = Vec::new();

        for (key, value) in groups {
            match index.get(key) {
                Some(&at) => entries[at].total += value,
                None => {
                    index.insert(key.to_string(), entries.len());
                    entries.push(AggregateEntry {
                        key: key.to_string(),
                        total: value,
                    });
                }
            }
        }

        Self { entries }
    }

    /// Sort descending by summed sales. The sort is stable, so groups with
    /// equal totals keep their first-appearance order.
    pub fn sorted_by_total_desc(mut self) -> Self {
        self.entries.sort_by(|a, b| b.total.total_cmp(&a.total));
        self
    }

    /// Sort ascending by group key.
    pub fn sorted_by_key_asc(mut self) -> Self {
        self.entries.sort_by(|a, b| a.key.cmp(&b.key));
        self
    }

    pub fn entries(&self) -> &[AggregateEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.total)
    }

    /// Sum of all group totals.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.total).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_series(&self, ordering: SeriesOrdering) -> Series {
        Series {
            labels: self.entries.iter().map(|entry| entry.key.clone()).collect(),
            values: self.entries.iter().map(|entry| entry.total).collect(),
            ordering,
        }
    }
}

/// How a series' entries were ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesOrdering {
    /// First-appearance order of the group keys.
    Unordered,
    ValueDescending,
    KeyAscending,
}

/// Renderer-agnostic series handed across the presentation boundary.
///
/// The core never builds chart objects for a specific rendering framework;
/// a consumer turns this into whatever its plotting layer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub ordering: SeriesOrdering,
}

/// Headline metrics for the report.
///
/// `total_sales` is truncated (not rounded) to whole currency units for
/// display; the counts are distinct-value cardinalities, not row counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryScalars {
    pub total_sales: u64,
    pub total_orders: usize,
    pub total_customers: usize,
    pub total_products: usize,
}

/// The full aggregation output consumed by a presentation adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub by_country: AggregateTable,
    /// Sorted descending by summed sales.
    pub by_category: AggregateTable,
    /// Sorted ascending by period so trend consumers get chronological order.
    pub by_period: AggregateTable,
    pub by_payment_method: AggregateTable,
    pub summary: SummaryScalars,
}

impl SalesReport {
    pub fn country_series(&self) -> Series {
        self.by_country.to_series(SeriesOrdering::Unordered)
    }

    pub fn category_series(&self) -> Series {
        self.by_category.to_series(SeriesOrdering::ValueDescending)
    }

    pub fn period_series(&self) -> Series {
        self.by_period.to_series(SeriesOrdering::KeyAscending)
    }

    pub fn payment_method_series(&self) -> Series {
        self.by_payment_method.to_series(SeriesOrdering::Unordered)
    }
}
