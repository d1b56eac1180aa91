use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scope every event-store query is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
}

/// A metric to trend: an event name plus optional property predicates.
/// Immutable for the duration of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub event: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

/// How the per-bucket series is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    LineGraph,
    Cumulative,
}

/// One trend request: granularity, date range, display mode, and the
/// entities to compute, in caller order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendFilter {
    pub interval: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub display: DisplayMode,
    pub entities: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

/// One slot of a series: interval-aligned start plus event count.
/// Never persisted; lives only while one entity's series is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub start: DateTime<Utc>,
    pub count: u64,
}

/// Per-entity output row. `count` is the series total before any display
/// transform is applied to `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendResult {
    pub action: Entity,
    pub label: String,
    pub count: u64,
    pub data: Vec<u64>,
    pub labels: Vec<String>,
    pub days: Vec<String>,
}
