//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use nova_sdk::events;

use crate::menu::{ActivePathScan, MenuOptions, PrefixMatch};

/// Kernel configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to plugins directory (default: ./plugins).
    pub plugins_dir: PathBuf,

    /// Event fired to collect the backend menu (default: backend.menu).
    pub menu_event: String,

    /// Backend theme name (default: AdminLite).
    pub theme: String,

    /// Backend layout name (default: Backend).
    pub layout: String,

    /// Active path discovery: "sequential" or "two-pass" (default: sequential).
    pub active_scan: ActivePathScan,

    /// Active path comparison: "raw" or "segments" (default: raw).
    pub prefix_match: PrefixMatch,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plugins_dir: PathBuf::from("./plugins"),
            menu_event: events::BACKEND_MENU.to_string(),
            theme: "AdminLite".to_string(),
            layout: "Backend".to_string(),
            active_scan: ActivePathScan::default(),
            prefix_match: PrefixMatch::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let plugins_dir = lookup("PLUGINS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.plugins_dir);

        let menu_event = lookup("MENU_EVENT").unwrap_or(defaults.menu_event);
        if menu_event.is_empty() {
            anyhow::bail!("MENU_EVENT must not be empty");
        }

        let theme = lookup("BACKEND_THEME").unwrap_or(defaults.theme);
        let layout = lookup("BACKEND_LAYOUT").unwrap_or(defaults.layout);

        let active_scan = lookup("MENU_ACTIVE_SCAN")
            .map(|v| v.parse::<ActivePathScan>().map_err(|e| anyhow!(e)))
            .transpose()
            .context("MENU_ACTIVE_SCAN must be 'sequential' or 'two-pass'")?
            .unwrap_or(defaults.active_scan);

        let prefix_match = lookup("MENU_PREFIX_MATCH")
            .map(|v| v.parse::<PrefixMatch>().map_err(|e| anyhow!(e)))
            .transpose()
            .context("MENU_PREFIX_MATCH must be 'raw' or 'segments'")?
            .unwrap_or(defaults.prefix_match);

        Ok(Self {
            plugins_dir,
            menu_event,
            theme,
            layout,
            active_scan,
            prefix_match,
        })
    }

    /// Menu assembly options derived from this configuration.
    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            active_scan: self.active_scan,
            prefix_match: self.prefix_match,
        }
    }
}
