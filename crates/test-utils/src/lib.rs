//! Nova test utilities.
//!
//! Helpers for integration testing: menu entry fixtures and listener
//! payload builders.

use serde_json::{Map, Value as JsonValue, json};

/// Create a test menu entry with the four core fields set.
pub fn test_entry(path: &str, url: &str, title: &str, weight: i32) -> TestEntry {
    TestEntry {
        path: path.to_string(),
        url: url.to_string(),
        title: title.to_string(),
        weight,
        extra: Map::new(),
        children: Vec::new(),
    }
}

/// A menu entry builder for creating listener payloads.
#[derive(Debug, Clone)]
pub struct TestEntry {
    pub path: String,
    pub url: String,
    pub title: String,
    pub weight: i32,
    pub extra: Map<String, JsonValue>,
    pub children: Vec<TestEntry>,
}

impl TestEntry {
    /// Set the icon.
    pub fn with_icon(self, icon: &str) -> Self {
        self.with("icon", json!(icon))
    }

    /// Require a permission.
    pub fn with_permission(self, permission: &str) -> Self {
        self.with("permission", json!(permission))
    }

    /// Set an arbitrary extra key.
    pub fn with(mut self, key: &str, value: JsonValue) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    /// Nest a child entry in the descriptor itself.
    pub fn with_child(mut self, child: TestEntry) -> Self {
        self.children.push(child);
        self
    }

    /// Convert to the JSON object a provider would emit.
    pub fn to_json(&self) -> JsonValue {
        let mut object = Map::new();
        object.insert("path".to_string(), json!(self.path));
        object.insert("url".to_string(), json!(self.url));
        object.insert("title".to_string(), json!(self.title));
        object.insert("weight".to_string(), json!(self.weight));
        for (key, value) in &self.extra {
            object.insert(key.clone(), value.clone());
        }
        if !self.children.is_empty() {
            let children: Vec<JsonValue> = self.children.iter().map(TestEntry::to_json).collect();
            object.insert("children".to_string(), JsonValue::Array(children));
        }
        JsonValue::Object(object)
    }
}

/// Build the JSON array a single listener returns.
pub fn listener(entries: &[TestEntry]) -> JsonValue {
    JsonValue::Array(entries.iter().map(TestEntry::to_json).collect())
}

/// Assert that a JSON array of menu items is ordered by weight, then title.
pub fn assert_sorted(items: &[JsonValue]) {
    for pair in items.windows(2) {
        let key = |v: &JsonValue| {
            (
                v["weight"].as_i64().unwrap_or_default(),
                v["title"].as_str().unwrap_or_default().to_string(),
            )
        };
        assert!(
            key(&pair[0]) <= key(&pair[1]),
            "menu items out of order: {} before {}",
            pair[0]["path"],
            pair[1]["path"]
        );
    }
}
