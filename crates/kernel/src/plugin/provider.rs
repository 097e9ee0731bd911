//! Menu provider backed by a plugin manifest.

use nova_sdk::{MenuDescriptor, to_listener_output};
use serde_json::Value;

use super::PluginInfo;
use crate::tap::{MenuProvider, UserContext};

/// Contributes the entries of one `.menu.toml` manifest.
///
/// Entries carrying a `permission` the user lacks are left out together with
/// their nested children.
#[derive(Debug, Clone)]
pub struct ManifestProvider {
    info: PluginInfo,
}

impl ManifestProvider {
    pub fn new(info: PluginInfo) -> Self {
        Self { info }
    }

    /// Entries visible to `user`.
    pub fn visible_items(&self, user: &UserContext) -> Vec<MenuDescriptor> {
        filter_visible(&self.info.items, user)
    }
}

fn filter_visible(items: &[MenuDescriptor], user: &UserContext) -> Vec<MenuDescriptor> {
    items
        .iter()
        .filter(|item| {
            item.permission
                .as_deref()
                .is_none_or(|p| user.has_permission(p))
        })
        .map(|item| {
            let mut item = item.clone();
            item.children = filter_visible(&item.children, user);
            item
        })
        .collect()
}

impl MenuProvider for ManifestProvider {
    fn name(&self) -> &str {
        &self.info.name
    }

    fn provide(&self, event: &str, user: &UserContext) -> anyhow::Result<Value> {
        if !self.info.events.iter().any(|e| e == event) {
            return Ok(Value::Null);
        }
        Ok(to_listener_output(&self.visible_items(user))?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::Path;
    use uuid::Uuid;

    fn provider() -> ManifestProvider {
        let toml = r#"
name = "users"

[[items]]
path = "platform"
title = "Platform"

[[items.children]]
path = "platform.roles"
title = "Roles"
permission = "administer roles"

[[items]]
path = "platform.users"
title = "Users"
permission = "administer users"
"#;
        ManifestProvider::new(PluginInfo::parse_str(toml, Path::new("users.menu.toml")).unwrap())
    }

    fn user(permissions: &[&str]) -> UserContext {
        UserContext::new(
            Uuid::nil(),
            "tester",
            permissions.iter().map(|p| p.to_string()).collect(),
        )
    }

    #[test]
    fn hides_entries_without_permission() {
        let items = provider().visible_items(&user(&["administer users"]));
        assert_eq!(items.len(), 2);
        assert!(items[0].children.is_empty());
        assert_eq!(items[1].path, "platform.users");
    }

    #[test]
    fn admin_sees_everything() {
        let items = provider().visible_items(&user(&["administer site"]));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].children.len(), 1);
    }

    #[test]
    fn unknown_event_yields_nothing() {
        let output = provider()
            .provide("frontend.menu", &user(&["administer site"]))
            .unwrap();
        assert!(output.is_null());
    }

    #[test]
    fn provide_returns_json_array() {
        let output = provider().provide("backend.menu", &user(&[])).unwrap();
        let items = output.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["path"], "platform");
    }
}
