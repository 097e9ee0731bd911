#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Builds the real registry, dispatcher and assembler around fixed listener
//! payloads so tests exercise the same pipeline a request does.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use nova_kernel::menu::{MenuAssembler, MenuOptions};
use nova_kernel::tap::{FnProvider, TapDispatcher, TapRegistry, UserContext};

pub const EVENT: &str = "backend.menu";

/// Assembler whose providers return the given payloads, in order.
pub fn assembler(payloads: Vec<Value>, options: MenuOptions) -> MenuAssembler {
    let mut registry = TapRegistry::new();
    for (index, payload) in payloads.into_iter().enumerate() {
        let provider = FnProvider::new(format!("listener_{index}"), move |_u: &UserContext| {
            Ok(payload.clone())
        });
        registry.register(EVENT, Arc::new(provider), 0);
    }
    MenuAssembler::new(TapDispatcher::new(Arc::new(registry)), options)
}

/// An authenticated administrator.
pub fn admin() -> UserContext {
    UserContext::new(Uuid::nil(), "admin", vec!["administer site".to_string()])
}

/// An authenticated user with specific permissions.
pub fn user_with(permissions: &[&str]) -> UserContext {
    UserContext::new(
        Uuid::now_v7(),
        "editor",
        permissions.iter().map(|p| p.to_string()).collect(),
    )
}

/// The demo plugins shipped with the workspace.
pub fn plugins_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("plugins")
}
