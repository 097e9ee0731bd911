//! Core types for Nova modules.
//!
//! Menu contributions travel from modules to the kernel as JSON arrays of
//! [`MenuDescriptor`] objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Well-known menu event names.
pub mod events {
    /// Menu shown in the administration backend.
    pub const BACKEND_MENU: &str = "backend.menu";
}

/// A menu entry contributed by a module.
///
/// `path` is dot-delimited (`"platform.users"`) and positions the entry in the
/// menu tree. Keys the kernel does not know about are kept in `attributes` and
/// passed through to the rendering layer unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDescriptor {
    /// Dot-delimited tree position, unique per menu.
    pub path: String,

    /// Target URL.
    #[serde(default)]
    pub url: String,

    /// Display title.
    #[serde(default)]
    pub title: String,

    /// Sort weight (lower = listed first).
    #[serde(default)]
    pub weight: i32,

    /// Icon class name used by the theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Permission the user needs to see the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    /// Nested entries, each carrying its own full path.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuDescriptor>,

    /// Any other keys supplied by the module.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MenuDescriptor {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: String::new(),
            title: title.into(),
            weight: 0,
            icon: None,
            permission: None,
            children: Vec::new(),
            attributes: Map::new(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn child(mut self, child: MenuDescriptor) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Last segment of the dotted path.
    pub fn key(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

/// Serialize a list of descriptors into the JSON array a provider returns.
pub fn to_listener_output(items: &[MenuDescriptor]) -> serde_json::Result<Value> {
    serde_json::to_value(items)
}
