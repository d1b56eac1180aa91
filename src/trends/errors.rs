use thiserror::Error;
use tracing::{debug, error};

use crate::shared::datetime::interval::InvalidIntervalError;

/// Raised by the external filter-compilation capability.
#[derive(Debug, Error)]
pub enum FilterCompilationError {
    #[error("Malformed property filter: {0}")]
    Malformed(String),

    #[error("Unsupported predicate: {0}")]
    Unsupported(String),
}

/// Raised by the external aggregate-query capability.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("Query execution failed: {0}")]
    Execution(String),

    #[error("Query timed out after {0} ms")]
    Timeout(u64),

    #[error("Malformed result row: {0}")]
    MalformedRow(String),
}

/// Errors that can abort a trend run. Any of these fails the whole run;
/// partial result sets are never returned.
#[derive(Debug, Error)]
pub enum TrendError {
    #[error("Invalid interval: {0}")]
    InvalidInterval(#[from] InvalidIntervalError),

    #[error("Filter compilation failed: {0}")]
    FilterCompilation(#[from] FilterCompilationError),

    #[error("Event store query failed: {0}")]
    DataSource(#[from] DataSourceError),
}

impl TrendError {
    pub fn log_error(&self) {
        match self {
            TrendError::InvalidInterval(e) => {
                error!("Invalid interval: {}", e);
                debug!("Invalid interval details: {:?}", e);
            }
            TrendError::FilterCompilation(e) => {
                error!("Filter compilation failed: {}", e);
                debug!("Filter compilation error details: {:?}", e);
            }
            TrendError::DataSource(e) => {
                error!("Event store query failed: {}", e);
                debug!("Event store error details: {:?}", e);
            }
        }
    }
}
