//! Plugin manifest error types with clear, actionable messages.
//!
//! All errors include the plugin name or directory to help module authors
//! find the offending manifest quickly.

use thiserror::Error;

/// Errors that can occur while discovering and parsing menu manifests.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin directory is missing the .menu.toml manifest file.
    #[error("plugin '{plugin}': no .menu.toml manifest found in {path}")]
    MissingManifest { plugin: String, path: String },

    /// Multiple .menu.toml files found in plugin directory.
    #[error("plugin directory '{path}': multiple .menu.toml files found, expected exactly one")]
    MultipleManifests { path: String },

    /// The manifest file could not be read.
    #[error("plugin manifest '{path}': failed to read: {details}")]
    Unreadable { path: String, details: String },

    /// The .menu.toml file could not be parsed.
    #[error("plugin '{plugin}': failed to parse manifest: {details}")]
    InvalidManifest { plugin: String, details: String },

    /// The plugins directory could not be listed.
    #[error("plugins directory '{path}': {details}")]
    UnreadableDirectory { path: String, details: String },
}

impl PluginError {
    /// Create a missing manifest error.
    pub fn missing_manifest(path: impl Into<String>) -> Self {
        let path = path.into();
        let plugin = std::path::Path::new(&path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        Self::MissingManifest { plugin, path }
    }

    /// Create an invalid manifest error.
    pub fn invalid_manifest(plugin: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidManifest {
            plugin: plugin.into(),
            details: details.into(),
        }
    }
}
