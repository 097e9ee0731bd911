//! Parser for plugin `.menu.toml` manifest files.
//!
//! Each plugin directory has a `{name}.menu.toml` file that declares:
//! - name and description
//! - weight (provider call order, lower first)
//! - the menu events it answers
//! - the menu entries it contributes

use std::path::Path;

use nova_sdk::{MenuDescriptor, events};
use serde::Deserialize;

use super::PluginError;

/// Plugin metadata and menu entries parsed from `.menu.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginInfo {
    /// Plugin machine name (must match the manifest file name).
    pub name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Weight for provider ordering (lower = called first, default 0).
    #[serde(default)]
    pub weight: i32,

    /// Menu events this plugin answers.
    #[serde(default = "default_events")]
    pub events: Vec<String>,

    /// Menu entries contributed for every event.
    #[serde(default)]
    pub items: Vec<MenuDescriptor>,
}

fn default_events() -> Vec<String> {
    vec![events::BACKEND_MENU.to_string()]
}

impl PluginInfo {
    /// Parse plugin info from a `.menu.toml` file.
    pub fn parse(path: &Path) -> Result<Self, PluginError> {
        let content = std::fs::read_to_string(path).map_err(|e| PluginError::Unreadable {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

        Self::parse_str(&content, path)
    }

    /// Parse plugin info from a TOML string.
    pub fn parse_str(content: &str, path: &Path) -> Result<Self, PluginError> {
        let expected = manifest_stem(path).unwrap_or("unknown");

        let info: PluginInfo = toml::from_str(content)
            .map_err(|e| PluginError::invalid_manifest(expected, e.to_string()))?;

        info.validate(path)?;
        Ok(info)
    }

    /// Validate the parsed plugin info.
    fn validate(&self, path: &Path) -> Result<(), PluginError> {
        if self.name.is_empty() {
            return Err(PluginError::invalid_manifest(
                "unknown",
                format!("manifest at {} has empty 'name' field", path.display()),
            ));
        }

        if let Some(stem) = manifest_stem(path)
            && stem != self.name
        {
            return Err(PluginError::invalid_manifest(
                &self.name,
                format!("name does not match manifest file '{stem}.menu.toml'"),
            ));
        }

        if self.events.iter().any(|e| e.is_empty()) {
            return Err(PluginError::invalid_manifest(
                &self.name,
                "event names must not be empty",
            ));
        }

        Ok(())
    }
}

/// Plugin name implied by a `{name}.menu.toml` file name.
pub(crate) fn manifest_stem(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(".menu.toml"))
}
