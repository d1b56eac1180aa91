use serde_json::Value;

use crate::trends::types::Entity;

pub struct EntityFactory {
    inner: Entity,
}

impl EntityFactory {
    pub fn new() -> Self {
        Self {
            inner: Entity {
                event: "page_view".into(),
                name: "Page views".into(),
                properties: None,
            },
        }
    }

    pub fn with_event(mut self, value: &str) -> Self {
        self.inner.event = value.to_string();
        self
    }

    pub fn with_name(mut self, value: &str) -> Self {
        self.inner.name = value.to_string();
        self
    }

    pub fn with_properties(mut self, value: Value) -> Self {
        self.inner.properties = Some(value);
        self
    }

    pub fn create(self) -> Entity {
        self.inner
    }
}
