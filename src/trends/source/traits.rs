use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::trends::errors::{DataSourceError, FilterCompilationError};

/// A compiled property predicate: an opaque SQL fragment plus the bound
/// parameters it references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledPredicate {
    pub fragment: String,
    pub params: HashMap<String, Value>,
}

impl CompiledPredicate {
    pub fn is_empty(&self) -> bool {
        self.fragment.trim().is_empty()
    }
}

/// One sparse row from the aggregate query: a truncated bucket start and the
/// number of matching events in that bucket (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateRow {
    pub total: u64,
    pub bucket_start: DateTime<Utc>,
}

/// Compiles a raw property-filter description into a predicate fragment.
pub trait FilterCompiler: Send + Sync {
    fn compile(&self, raw: &Value) -> Result<CompiledPredicate, FilterCompilationError>;
}

/// Executes a read-only aggregate query against the event store.
///
/// The session behind this is shared and stateless; dropping the returned
/// future must cancel the in-flight query.
#[async_trait::async_trait]
pub trait AggregateQueryExecutor: Send + Sync {
    async fn execute(
        &self,
        sql: &str,
        params: &HashMap<String, Value>,
    ) -> Result<Vec<AggregateRow>, DataSourceError>;
}
