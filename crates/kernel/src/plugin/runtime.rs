//! Plugin discovery - loads menu manifests from the plugins directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{ManifestProvider, PluginError, PluginInfo};
use crate::tap::TapRegistry;

/// Manifests discovered in a plugins directory, keyed by plugin name.
#[derive(Debug, Default)]
pub struct PluginRuntime {
    plugins: BTreeMap<String, (PluginInfo, PathBuf)>,
}

impl PluginRuntime {
    /// Discover every plugin under `plugins_dir`.
    ///
    /// Subdirectories are visited in name order. A directory without a
    /// manifest is skipped; more than one manifest, an unreadable manifest or
    /// an invalid one is an error.
    pub fn discover(plugins_dir: &Path) -> Result<Self, PluginError> {
        let mut runtime = Self::default();

        if !plugins_dir.exists() {
            info!(
                ?plugins_dir,
                "plugins directory does not exist, nothing to discover"
            );
            return Ok(runtime);
        }

        let entries =
            std::fs::read_dir(plugins_dir).map_err(|e| PluginError::UnreadableDirectory {
                path: plugins_dir.display().to_string(),
                details: e.to_string(),
            })?;

        let mut dirs: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .collect();

        dirs.sort_by_key(|e| e.file_name());

        for entry in dirs {
            let plugin_dir = entry.path();
            match Self::find_manifest(&plugin_dir) {
                Ok(manifest) => {
                    let info = PluginInfo::parse(&manifest)?;
                    debug!(plugin = %info.name, items = info.items.len(), "loaded menu manifest");
                    runtime.plugins.insert(info.name.clone(), (info, plugin_dir));
                }
                Err(PluginError::MissingManifest { .. }) => {
                    warn!(dir = %plugin_dir.display(), "no .menu.toml file found, skipping");
                }
                Err(e) => return Err(e),
            }
        }

        info!(count = runtime.plugins.len(), "plugins discovered");
        Ok(runtime)
    }

    /// Locate the single `.menu.toml` file of a plugin directory.
    fn find_manifest(plugin_dir: &Path) -> Result<PathBuf, PluginError> {
        let entries = std::fs::read_dir(plugin_dir).map_err(|e| {
            PluginError::UnreadableDirectory {
                path: plugin_dir.display().to_string(),
                details: e.to_string(),
            }
        })?;

        let mut manifests: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && super::info_parser::manifest_stem(p).is_some())
            .collect();

        match manifests.len() {
            0 => Err(PluginError::missing_manifest(
                plugin_dir.display().to_string(),
            )),
            1 => Ok(manifests.remove(0)),
            _ => Err(PluginError::MultipleManifests {
                path: plugin_dir.display().to_string(),
            }),
        }
    }

    /// Get a plugin by name.
    pub fn get(&self, name: &str) -> Option<&PluginInfo> {
        self.plugins.get(name).map(|(info, _)| info)
    }

    /// Directory a plugin was loaded from.
    pub fn plugin_dir(&self, name: &str) -> Option<&Path> {
        self.plugins.get(name).map(|(_, dir)| dir.as_path())
    }

    /// All plugins in name order.
    pub fn plugins(&self) -> impl Iterator<Item = &PluginInfo> {
        self.plugins.values().map(|(info, _)| info)
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Register a provider for every event each plugin answers.
    ///
    /// Plugins are registered in name order; the registry orders them by
    /// weight, keeping name order for equal weights.
    pub fn register_all(&self, registry: &mut TapRegistry) {
        for info in self.plugins() {
            let provider = Arc::new(ManifestProvider::new(info.clone()));
            for event in &info.events {
                registry.register(event, provider.clone(), info.weight);
            }
        }
    }
}
