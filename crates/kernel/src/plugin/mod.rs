//! Plugin menu manifests.
//!
//! Modules that ship no Rust code describe their backend menu entries in a
//! `{name}.menu.toml` file inside their plugin directory. Each manifest
//! becomes a [`ManifestProvider`] registered for the events it lists.

mod error;
mod info_parser;
mod provider;
mod runtime;

pub use error::PluginError;
pub use info_parser::PluginInfo;
pub use provider::ManifestProvider;
pub use runtime::PluginRuntime;
