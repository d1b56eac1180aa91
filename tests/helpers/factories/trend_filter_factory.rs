use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::trends::types::{DisplayMode, Entity, TrendFilter};

use super::entity_factory::EntityFactory;

pub struct TrendFilterFactory {
    inner: TrendFilter,
}

impl TrendFilterFactory {
    pub fn new() -> Self {
        Self {
            inner: TrendFilter {
                interval: None,
                date_from: None,
                date_to: None,
                display: DisplayMode::default(),
                entities: vec![EntityFactory::new().create()],
                properties: None,
            },
        }
    }

    pub fn with_interval(mut self, value: &str) -> Self {
        self.inner.interval = Some(value.to_string());
        self
    }

    pub fn with_date_from(mut self, value: DateTime<Utc>) -> Self {
        self.inner.date_from = Some(value);
        self
    }

    pub fn with_date_to(mut self, value: DateTime<Utc>) -> Self {
        self.inner.date_to = Some(value);
        self
    }

    pub fn with_display(mut self, value: DisplayMode) -> Self {
        self.inner.display = value;
        self
    }

    pub fn with_entities(mut self, value: Vec<Entity>) -> Self {
        self.inner.entities = value;
        self
    }

    pub fn with_properties(mut self, value: Value) -> Self {
        self.inner.properties = Some(value);
        self
    }

    pub fn create(self) -> TrendFilter {
        self.inner
    }
}
