//! Menu assembly - fires the menu event and produces the render-ready tree.

use tracing::debug;

use super::prepare::{ActivePathScan, MenuOptions, prepare_items, prepare_tree};
use super::{MenuItem, MenuTree};
use crate::error::MenuResult;
use crate::tap::{TapDispatcher, UserContext};

/// Composes dispatch, tree building and preparation for one request.
#[derive(Debug, Clone)]
pub struct MenuAssembler {
    dispatcher: TapDispatcher,
    options: MenuOptions,
}

impl MenuAssembler {
    /// Create an assembler over a dispatcher.
    pub fn new(dispatcher: TapDispatcher, options: MenuOptions) -> Self {
        Self {
            dispatcher,
            options,
        }
    }

    /// Build the menu for `event` as seen by `user` on `current_url`.
    ///
    /// A fresh tree is built on every call. Provider failures propagate.
    pub fn get_menu_items(
        &self,
        event: &str,
        user: &UserContext,
        current_url: &str,
    ) -> MenuResult<Vec<MenuItem>> {
        let results = self.dispatcher.dispatch(event, user)?;
        let tree = MenuTree::from_tap_results(results);
        Ok(assemble(tree.into_items(), current_url, self.options))
    }
}

/// Mark active items and sort every level of a built tree.
pub fn assemble(mut items: Vec<MenuItem>, current_url: &str, options: MenuOptions) -> Vec<MenuItem> {
    let prefix = options.prefix_match;

    let mut active_path = match options.active_scan {
        ActivePathScan::TwoPass => MenuItem::find_path_by_url(&items, current_url)
            .unwrap_or_default()
            .to_string(),
        ActivePathScan::Sequential => String::new(),
    };

    for item in &mut items {
        if active_path.is_empty() && item.matches_url(current_url) {
            active_path = item.path.clone();
        }

        let children = std::mem::take(&mut item.children);
        item.children = prepare_tree(children, &active_path, current_url, prefix);
    }

    debug!(
        url = %current_url,
        active_path = %active_path,
        scan = %options.active_scan,
        "menu assembled"
    );

    prepare_items(items, &active_path, current_url, prefix)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::PrefixMatch;
    use nova_sdk::MenuDescriptor;

    fn tree(descriptors: Vec<MenuDescriptor>) -> Vec<MenuItem> {
        let mut tree = MenuTree::new();
        for d in descriptors {
            tree.insert(d);
        }
        tree.into_items()
    }

    /// Top-level "settings" matches the URL but is scanned after "platform".
    fn late_match() -> Vec<MenuItem> {
        tree(vec![
            MenuDescriptor::new("platform", "Platform").url("/admin/platform"),
            MenuDescriptor::new("platform.users", "Users").url("/admin/users"),
            MenuDescriptor::new("settings", "Settings").url("/admin/settings"),
            MenuDescriptor::new("settings.mail", "Mail").url("/admin/settings/mail"),
        ])
    }

    /// "tools" is scanned before the URL match on "settings".
    fn children_before_match() -> Vec<MenuItem> {
        tree(vec![
            MenuDescriptor::new("tools", "Tools")
                .url("/admin/tools")
                .child(MenuDescriptor::new("tools.shortcut", "Shortcut").url("/admin/shortcut")),
            MenuDescriptor::new("settings", "Settings").url("/admin/settings"),
            MenuDescriptor::new("settings.mail", "Mail").url("/admin/settings/mail"),
        ])
    }

    #[test]
    fn sequential_prepares_earlier_children_without_active_path() {
        let out = assemble(children_before_match(), "/admin/settings", MenuOptions::default());
        let tools = out.iter().find(|i| i.path == "tools").unwrap();
        assert!(!tools.active);
        assert!(!tools.children[0].active);
        let settings = out.iter().find(|i| i.path == "settings").unwrap();
        assert!(settings.active);
        assert!(!settings.children[0].active);
    }

    #[test]
    fn top_level_match_flags_agree_across_scans() {
        let options = MenuOptions {
            active_scan: ActivePathScan::TwoPass,
            prefix_match: PrefixMatch::Raw,
        };
        let sequential = assemble(children_before_match(), "/admin/settings", MenuOptions::default());
        let two_pass = assemble(children_before_match(), "/admin/settings", options);
        assert_eq!(sequential, two_pass);
    }

    #[test]
    fn first_top_level_match_wins() {
        let items = tree(vec![
            MenuDescriptor::new("b", "B").url("/admin/dup"),
            MenuDescriptor::new("a", "A").url("/admin/dup"),
            MenuDescriptor::new("a.x", "X").url("/admin/x"),
            MenuDescriptor::new("bee", "Bee").url("/admin/bee"),
        ]);

        let out = assemble(items, "/admin/dup", MenuOptions::default());
        // Active path is "b"; "bee" is not a prefix of it
        let active: Vec<_> = out.iter().filter(|i| i.active).map(|i| i.path.as_str()).collect();
        assert_eq!(active, ["a", "b"]);
        let bee = out.iter().find(|i| i.path == "bee").unwrap();
        assert!(!bee.active);
    }

    #[test]
    fn sequential_ignores_descendant_matches() {
        let out = assemble(late_match(), "/admin/users", MenuOptions::default());
        let platform = out.iter().find(|i| i.path == "platform").unwrap();
        assert!(!platform.active);
        assert!(platform.children[0].active);
    }

    #[test]
    fn two_pass_marks_ancestors_of_descendant_match() {
        let options = MenuOptions {
            active_scan: ActivePathScan::TwoPass,
            prefix_match: PrefixMatch::Segments,
        };
        let out = assemble(late_match(), "/admin/users", options);
        let platform = out.iter().find(|i| i.path == "platform").unwrap();
        assert!(platform.active);
        assert!(platform.children[0].active);
        let settings = out.iter().find(|i| i.path == "settings").unwrap();
        assert!(!settings.active);
    }

    #[test]
    fn segment_prefix_skips_similar_names() {
        let items = tree(vec![
            MenuDescriptor::new("users", "Users").url("/admin/users"),
            MenuDescriptor::new("users.list", "List").url("/admin/users/list"),
            MenuDescriptor::new("usersx", "Other").url("/admin/other"),
        ]);

        let options = MenuOptions {
            active_scan: ActivePathScan::TwoPass,
            prefix_match: PrefixMatch::Segments,
        };
        let out = assemble(items, "/admin/users", options);
        let users = out.iter().find(|i| i.path == "users").unwrap();
        assert!(users.active);
        assert!(!users.children[0].active);
        let other = out.iter().find(|i| i.path == "usersx").unwrap();
        assert!(!other.active);
    }

    #[test]
    fn every_level_is_sorted() {
        let items = tree(vec![
            MenuDescriptor::new("a", "A"),
            MenuDescriptor::new("a.b", "B"),
            MenuDescriptor::new("a.b.z", "Zulu"),
            MenuDescriptor::new("a.b.y", "Yankee"),
        ]);

        let out = assemble(items, "/", MenuOptions::default());
        let grandchildren: Vec<_> = out[0].children[0]
            .children
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(grandchildren, ["Yankee", "Zulu"]);
    }
}
