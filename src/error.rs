use thiserror::Error;

/// A single row that failed domain validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RowViolation {
    pub order_id: u64,
    pub reason: String,
}

impl std::fmt::Display for RowViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order {}: {}", self.order_id, self.reason)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("{} row(s) failed validation: {}", .0.len(), describe_violations(.0))]
    Validation(Vec<RowViolation>),

    #[error("Aggregation worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

fn describe_violations(violations: &[RowViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, Error>;
