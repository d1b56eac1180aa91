use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::trends::range::ResolvedRange;
use crate::trends::types::Team;

use super::traits::CompiledPredicate;

const EVENTS_TABLE: &str = "events";
const TIMESTAMP_COLUMN: &str = "timestamp";

/// Builds the per-entity aggregate query.
///
/// Everything request- or entity-controlled travels as a bound parameter;
/// only the truncation function name and pre-compiled predicate fragments
/// (themselves parameterized) land in the SQL text.
#[derive(Debug, Clone)]
pub struct TrendQueryBuilder {
    bucket_expr: &'static str,
    team_id: u64,
    event: String,
    date_from: DateTime<Utc>,
    date_to: DateTime<Utc>,
    predicates: Vec<CompiledPredicate>,
}

impl TrendQueryBuilder {
    pub fn new(range: &ResolvedRange, team: &Team, event: &str) -> Self {
        Self {
            bucket_expr: range.interval.bucket_expr(),
            team_id: team.id,
            event: event.to_string(),
            date_from: range.date_from,
            date_to: range.date_to,
            predicates: Vec::new(),
        }
    }

    /// Append a compiled predicate. Empty fragments are dropped.
    pub fn predicate(mut self, predicate: CompiledPredicate) -> Self {
        if !predicate.is_empty() {
            self.predicates.push(predicate);
        }
        self
    }

    pub fn build(self) -> (String, HashMap<String, Value>) {
        let mut params: HashMap<String, Value> = HashMap::new();
        params.insert("team_id".to_string(), json!(self.team_id));
        params.insert("event".to_string(), json!(self.event));
        params.insert("date_from".to_string(), json!(format_bound(self.date_from)));
        params.insert("date_to".to_string(), json!(format_bound(self.date_to)));

        let mut sql = format!(
            "SELECT count(*) AS total, {bucket}({ts}) AS bucket_start \
             FROM {table} \
             WHERE team_id = {{team_id:UInt64}} \
             AND event = {{event:String}} \
             AND {ts} > {{date_from:DateTime}} \
             AND {ts} < {{date_to:DateTime}}",
            bucket = self.bucket_expr,
            ts = TIMESTAMP_COLUMN,
            table = EVENTS_TABLE,
        );

        for predicate in self.predicates {
            sql.push_str(" AND (");
            sql.push_str(&predicate.fragment);
            sql.push(')');
            params.extend(predicate.params);
        }

        sql.push_str(" GROUP BY bucket_start ORDER BY bucket_start");

        (sql, params)
    }
}

fn format_bound(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
