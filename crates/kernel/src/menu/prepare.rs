//! Menu item preparer - active flags and sibling ordering.

use std::fmt;
use std::str::FromStr;

use super::MenuItem;

/// How the active path is discovered during assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivePathScan {
    /// Scan top-level items in tree order; the first exact URL match fixes the
    /// active path. Children of items scanned before the match are prepared
    /// with an empty active path.
    #[default]
    Sequential,
    /// Find the active path over the whole tree first (pre-order, first URL
    /// match), then prepare every level with it.
    TwoPass,
}

impl FromStr for ActivePathScan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "two-pass" | "two_pass" => Ok(Self::TwoPass),
            other => Err(format!(
                "unknown active path scan '{other}', expected 'sequential' or 'two-pass'"
            )),
        }
    }
}

impl fmt::Display for ActivePathScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::TwoPass => f.write_str("two-pass"),
        }
    }
}

/// How an item's path is compared against the active path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrefixMatch {
    /// Plain string prefix: `"users"` matches `"users2"`.
    #[default]
    Raw,
    /// Dot-segment prefix: `"users"` matches `"users.edit"` but not `"users2"`.
    Segments,
}

impl PrefixMatch {
    /// Check whether `item_path` is a prefix of `active_path`.
    ///
    /// An empty item path never matches.
    pub fn matches(self, active_path: &str, item_path: &str) -> bool {
        if item_path.is_empty() {
            return false;
        }

        match self {
            Self::Raw => active_path.starts_with(item_path),
            Self::Segments => {
                let mut active = active_path.split('.');
                item_path.split('.').all(|seg| active.next() == Some(seg))
            }
        }
    }
}

impl FromStr for PrefixMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "segments" => Ok(Self::Segments),
            other => Err(format!(
                "unknown prefix match '{other}', expected 'raw' or 'segments'"
            )),
        }
    }
}

impl fmt::Display for PrefixMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str("raw"),
            Self::Segments => f.write_str("segments"),
        }
    }
}

/// Menu assembly behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuOptions {
    pub active_scan: ActivePathScan,
    pub prefix_match: PrefixMatch,
}

/// Flag and sort one level of items.
///
/// An item is active when its URL equals `current_url` or when its path is a
/// prefix of `active_path`. Items are ordered by weight, then by title
/// (byte-wise). Children are left untouched.
pub fn prepare_items(
    mut items: Vec<MenuItem>,
    active_path: &str,
    current_url: &str,
    prefix: PrefixMatch,
) -> Vec<MenuItem> {
    for item in &mut items {
        item.active = item.matches_url(current_url) || prefix.matches(active_path, &item.path);
    }

    items.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.title.cmp(&b.title)));
    items
}

/// Prepare a level and every level beneath it with the same active path.
pub fn prepare_tree(
    mut items: Vec<MenuItem>,
    active_path: &str,
    current_url: &str,
    prefix: PrefixMatch,
) -> Vec<MenuItem> {
    for item in &mut items {
        let children = std::mem::take(&mut item.children);
        item.children = prepare_tree(children, active_path, current_url, prefix);
    }
    prepare_items(items, active_path, current_url, prefix)
}
