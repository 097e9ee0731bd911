//! Menu tree builder - folds provider outputs into one hierarchical tree.
//!
//! Providers return JSON arrays of descriptors. Each descriptor's dotted path
//! addresses a node (`"a.b"` is child `b` of root `a`). The first descriptor
//! for a path wins; later ones are dropped.

use indexmap::IndexMap;
use indexmap::map::Entry;
use nova_sdk::MenuDescriptor;
use serde_json::Value;
use tracing::{debug, warn};

use super::MenuItem;
use crate::tap::TapResult;

/// A tree position. `item` is `None` while only descendants have been seen.
#[derive(Debug, Default)]
struct MenuNode {
    item: Option<MenuItem>,
    children: IndexMap<String, MenuNode>,
}

impl MenuNode {
    fn with_item(item: MenuItem) -> Self {
        Self {
            item: Some(item),
            children: IndexMap::new(),
        }
    }

    fn count(&self) -> usize {
        usize::from(self.item.is_some()) + self.children.values().map(Self::count).sum::<usize>()
    }
}

/// Request-scoped menu tree, roots kept in first-seen order.
#[derive(Debug, Default)]
pub struct MenuTree {
    roots: IndexMap<String, MenuNode>,
}

impl MenuTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from provider outputs, in dispatch order.
    ///
    /// Outputs that are not JSON arrays and entries that are not valid
    /// descriptors are skipped.
    pub fn from_tap_results(results: Vec<TapResult>) -> Self {
        let mut tree = Self::new();

        for result in results {
            let Value::Array(entries) = result.output else {
                debug!(
                    provider = %result.provider_name,
                    "provider output is not an array, skipping"
                );
                continue;
            };

            for entry in entries {
                match serde_json::from_value::<MenuDescriptor>(entry) {
                    Ok(descriptor) => {
                        tree.insert(descriptor);
                    }
                    Err(e) => {
                        warn!(
                            provider = %result.provider_name,
                            error = %e,
                            "skipping malformed menu descriptor"
                        );
                    }
                }
            }
        }

        debug!(items = tree.len(), "built menu tree");
        tree
    }

    /// Insert a descriptor at the position named by its path.
    ///
    /// Returns `false` when the descriptor was dropped, either because its
    /// path is malformed or because the position is already described.
    pub fn insert(&mut self, descriptor: MenuDescriptor) -> bool {
        let Some(segments) = split_path(&descriptor.path) else {
            warn!(path = %descriptor.path, "skipping menu descriptor with malformed path");
            return false;
        };

        let Some((key, parents)) = segments.split_last() else {
            return false;
        };
        let key = (*key).to_string();

        let mut map = &mut self.roots;
        for segment in parents {
            map = &mut map.entry((*segment).to_string()).or_default().children;
        }

        place(map, key, descriptor)
    }

    /// Check whether a path is described in the tree.
    pub fn contains(&self, path: &str) -> bool {
        let Some(segments) = split_path(path) else {
            return false;
        };

        let mut map = &self.roots;
        let mut node = None;
        for segment in segments {
            let Some(next) = map.get(segment) else {
                return false;
            };
            map = &next.children;
            node = Some(next);
        }

        node.is_some_and(|n| n.item.is_some())
    }

    /// Number of described items in the tree.
    pub fn len(&self) -> usize {
        self.roots.values().map(MenuNode::count).sum()
    }

    /// Check if the tree holds no described items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten the roots into items, children nested in first-seen order.
    pub fn into_items(self) -> Vec<MenuItem> {
        self.roots
            .into_iter()
            .map(|(key, node)| into_item(key, node))
            .collect()
    }
}

/// Deepest menu nesting accepted from providers.
pub const MAX_PATH_DEPTH: usize = 16;

/// Split a dotted path into segments, rejecting empty segments and paths
/// nested deeper than [`MAX_PATH_DEPTH`].
fn split_path(path: &str) -> Option<Vec<&str>> {
    let segments: Vec<&str> = path.split('.').take(MAX_PATH_DEPTH + 1).collect();
    if segments.len() > MAX_PATH_DEPTH || segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some(segments)
}

/// Key of a nested descriptor: the single segment following `parent_path`.
fn nested_key<'a>(parent_path: &str, child_path: &'a str) -> Option<&'a str> {
    split_path(child_path)?;
    child_path
        .strip_prefix(parent_path)
        .and_then(|rest| rest.strip_prefix('.'))
        .filter(|key| !key.contains('.'))
}

/// Store a descriptor under `key`, then its nested children beneath it.
fn place(map: &mut IndexMap<String, MenuNode>, key: String, descriptor: MenuDescriptor) -> bool {
    let (item, children) = MenuItem::from_descriptor(descriptor);
    let parent_path = item.path.clone();

    let node = match map.entry(key) {
        Entry::Occupied(entry) => {
            let node = entry.into_mut();
            if node.item.is_some() {
                debug!(path = %item.path, "duplicate menu path, keeping first");
                return false;
            }
            node.item = Some(item);
            node
        }
        Entry::Vacant(entry) => entry.insert(MenuNode::with_item(item)),
    };

    for child in children {
        let Some(child_key) = nested_key(&parent_path, &child.path).map(str::to_string) else {
            warn!(
                parent = %parent_path,
                path = %child.path,
                "skipping nested menu descriptor outside its parent"
            );
            continue;
        };
        place(&mut node.children, child_key, child);
    }

    true
}

fn into_item(path: String, node: MenuNode) -> MenuItem {
    let mut item = match node.item {
        Some(item) => item,
        None => {
            warn!(path = %path, "menu path has children but no descriptor");
            MenuItem::placeholder(path.clone())
        }
    };

    item.children = node
        .children
        .into_iter()
        .map(|(key, child)| into_item(format!("{path}.{key}"), child))
        .collect();

    item
}
