//! Render-ready menu items.

use nova_sdk::MenuDescriptor;
use serde::Serialize;
use serde_json::{Map, Value};

/// A menu item as handed to the rendering layer.
///
/// `active` is computed per request and never persisted. `children` is always
/// present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    /// Dot-delimited tree position.
    pub path: String,
    /// Target URL.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Sort weight (lower = listed first).
    pub weight: i32,
    /// Icon class name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Permission the contributor required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    /// Whether the item matches the current request.
    pub active: bool,
    /// Child items.
    pub children: Vec<MenuItem>,
    /// Extra keys supplied by the contributor.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MenuItem {
    /// Item for a tree position that no contributor described.
    pub(crate) fn placeholder(path: String) -> Self {
        Self {
            path,
            url: String::new(),
            title: String::new(),
            weight: 0,
            icon: None,
            permission: None,
            active: false,
            children: Vec::new(),
            attributes: Map::new(),
        }
    }

    /// Convert a descriptor, leaving its nested children to the tree builder.
    pub(crate) fn from_descriptor(descriptor: MenuDescriptor) -> (Self, Vec<MenuDescriptor>) {
        let MenuDescriptor {
            path,
            url,
            title,
            weight,
            icon,
            permission,
            children,
            attributes,
        } = descriptor;

        let item = Self {
            path,
            url,
            title,
            weight,
            icon,
            permission,
            active: false,
            children: Vec::new(),
            attributes,
        };

        (item, children)
    }

    /// Whether the item points at `url`. Items without a URL never match.
    pub fn matches_url(&self, url: &str) -> bool {
        !self.url.is_empty() && self.url == url
    }

    /// Find the path of the first item (pre-order) whose URL equals `url`.
    pub fn find_path_by_url<'a>(items: &'a [MenuItem], url: &str) -> Option<&'a str> {
        for item in items {
            if item.matches_url(url) {
                return Some(&item.path);
            }
            if let Some(path) = Self::find_path_by_url(&item.children, url) {
                return Some(path);
            }
        }
        None
    }
}
