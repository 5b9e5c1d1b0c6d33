use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the customer churn dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The backing file could not be opened or read.
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed against the expected schema.
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    /// The file parsed but contained no data rows.
    #[error("dataset file {0} contains no rows")]
    Empty(PathBuf),
}
