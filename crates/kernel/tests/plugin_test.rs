#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for plugin menu manifests.
//!
//! Loads the demo plugins under `plugins/` and runs the backend controller
//! against them.
//!
//! ```bash
//! cargo test --test plugin_test
//! ```

mod common;

use std::sync::Arc;

use serde_json::json;

use nova_kernel::menu::{MenuAssembler, MenuOptions};
use nova_kernel::plugin::PluginRuntime;
use nova_kernel::tap::{RequestContext, TapDispatcher, TapRegistry, UserContext};
use nova_kernel::{BackendController, Config, MENU_ITEMS};

fn controller() -> BackendController {
    let runtime = PluginRuntime::discover(&common::plugins_dir()).unwrap();
    let mut registry = TapRegistry::new();
    runtime.register_all(&mut registry);

    let assembler = MenuAssembler::new(
        TapDispatcher::new(Arc::new(registry)),
        MenuOptions::default(),
    );
    BackendController::from_config(assembler, &Config::default())
}

fn menu_for(user: Option<UserContext>, url: &str) -> serde_json::Value {
    let mut view = tera::Context::new();
    controller()
        .initialize(&RequestContext::new(url, user), &mut view)
        .unwrap();
    view.get(MENU_ITEMS).cloned().unwrap()
}

#[test]
fn demo_plugins_are_discovered() {
    let runtime = PluginRuntime::discover(&common::plugins_dir()).unwrap();
    for name in ["demos", "system", "users", "web_chat"] {
        assert!(runtime.get(name).is_some(), "plugin {name} not discovered");
    }
}

#[test]
fn admin_sees_full_menu() {
    let menu = menu_for(Some(common::admin()), "/admin/users?sort=name");
    let paths: Vec<_> = menu
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, ["dashboard", "platform", "chat", "demos"]);

    // System registers first (lowest weight), so its dashboard wins
    assert_eq!(menu[0]["title"], "Dashboard");

    let platform = &menu[1];
    let children: Vec<_> = platform["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(children, ["Settings", "Roles", "Users"]);
    assert_eq!(platform["children"][2]["active"], json!(true));
    assert_eq!(platform["active"], json!(false));
}

#[test]
fn permissions_filter_manifest_entries() {
    let menu = menu_for(Some(common::user_with(&["administer users"])), "/admin");
    let platform = &menu[1];
    let children: Vec<_> = platform["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["path"].as_str().unwrap())
        .collect();
    assert_eq!(children, ["platform.roles", "platform.users"]);

    let chat = &menu[2];
    assert_eq!(chat["children"], json!([]));
    assert_eq!(chat["label"], "beta");
}

#[test]
fn anonymous_request_gets_empty_menu() {
    assert_eq!(menu_for(None, "/admin"), json!([]));
}
