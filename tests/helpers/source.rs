use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Value;

use crate::trends::errors::{DataSourceError, FilterCompilationError};
use crate::trends::source::{
    AggregateQueryExecutor, AggregateRow, CompiledPredicate, FilterCompiler,
};

/// Scripted event-store stand-in. Returns canned rows keyed by the bound
/// `event` parameter and records every issued query.
pub struct StubExecutor {
    rows_by_event: HashMap<String, Vec<AggregateRow>>,
    delay_by_event: HashMap<String, Duration>,
    fail_with: Option<String>,
    pub issued: Mutex<Vec<(String, HashMap<String, Value>)>>,
}

impl StubExecutor {
    pub fn new() -> Self {
        Self {
            rows_by_event: HashMap::new(),
            delay_by_event: HashMap::new(),
            fail_with: None,
            issued: Mutex::new(Vec::new()),
        }
    }

    pub fn with_rows(mut self, event: &str, rows: Vec<AggregateRow>) -> Self {
        self.rows_by_event.insert(event.to_string(), rows);
        self
    }

    /// Delay responses for one event, to exercise completion-order shuffles.
    pub fn with_delay(mut self, event: &str, delay: Duration) -> Self {
        self.delay_by_event.insert(event.to_string(), delay);
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn issued_count(&self) -> usize {
        self.issued.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl AggregateQueryExecutor for StubExecutor {
    async fn execute(
        &self,
        sql: &str,
        params: &HashMap<String, Value>,
    ) -> Result<Vec<AggregateRow>, DataSourceError> {
        self.issued
            .lock()
            .unwrap()
            .push((sql.to_string(), params.clone()));

        if let Some(message) = &self.fail_with {
            return Err(DataSourceError::Execution(message.clone()));
        }

        let event = params
            .get("event")
            .and_then(|value| value.as_str())
            .unwrap_or_default();

        if let Some(delay) = self.delay_by_event.get(event) {
            tokio::time::sleep(*delay).await;
        }

        Ok(self.rows_by_event.get(event).cloned().unwrap_or_default())
    }
}

/// Compiles `{"key": value}` objects into parameterized equality predicates.
pub struct StubCompiler;

impl FilterCompiler for StubCompiler {
    fn compile(&self, raw: &Value) -> Result<CompiledPredicate, FilterCompilationError> {
        let object = raw
            .as_object()
            .ok_or_else(|| FilterCompilationError::Malformed(raw.to_string()))?;

        let mut clauses = Vec::new();
        let mut params = HashMap::new();
        for (key, value) in object {
            let name = format!("prop_{key}");
            clauses.push(format!("properties['{key}'] = {{{name}:String}}"));
            params.insert(name, value.clone());
        }

        Ok(CompiledPredicate {
            fragment: clauses.join(" AND "),
            params,
        })
    }
}

/// Rejects every filter, for exercising compilation failures.
pub struct FailingCompiler;

impl FilterCompiler for FailingCompiler {
    fn compile(&self, raw: &Value) -> Result<CompiledPredicate, FilterCompilationError> {
        Err(FilterCompilationError::Malformed(raw.to_string()))
    }
}
