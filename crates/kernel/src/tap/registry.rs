//! Tap registry - indexes which providers answer which menu events.
//!
//! The registry maps event names to an ordered list of providers. Providers are
//! sorted by weight (lower = higher priority, called first); providers with the
//! same weight are called in registration order.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::UserContext;

/// An independent contributor of menu descriptors.
///
/// Output is a JSON array of descriptor objects. Anything else is ignored by
/// the menu builder, so providers never need to validate their own output.
pub trait MenuProvider: Send + Sync {
    /// Provider machine name, used in logs and errors.
    fn name(&self) -> &str;

    /// Contribute descriptors for `event` on behalf of `user`.
    fn provide(&self, event: &str, user: &UserContext) -> anyhow::Result<Value>;
}

/// A provider backed by a closure.
pub struct FnProvider<F> {
    name: String,
    func: F,
}

impl<F> FnProvider<F>
where
    F: Fn(&UserContext) -> anyhow::Result<Value> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> MenuProvider for FnProvider<F>
where
    F: Fn(&UserContext) -> anyhow::Result<Value> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn provide(&self, _event: &str, user: &UserContext) -> anyhow::Result<Value> {
        (self.func)(user)
    }
}

/// A registered provider with priority.
#[derive(Clone)]
pub struct TapHandler {
    /// The provider answering the event.
    pub provider: Arc<dyn MenuProvider>,
    /// Weight for ordering (lower = higher priority).
    pub weight: i32,
}

impl fmt::Debug for TapHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapHandler")
            .field("provider", &self.provider.name())
            .field("weight", &self.weight)
            .finish()
    }
}

/// Registry mapping event names to ordered handlers.
#[derive(Debug, Default)]
pub struct TapRegistry {
    /// Map from event name to ordered list of handlers.
    handlers: HashMap<String, Vec<TapHandler>>,
}

impl TapRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider for an event.
    ///
    /// The handler list stays sorted by weight. The sort is stable, so equal
    /// weights keep registration order.
    pub fn register(&mut self, event: &str, provider: Arc<dyn MenuProvider>, weight: i32) {
        let list = self.handlers.entry(event.to_string()).or_default();
        list.push(TapHandler { provider, weight });
        list.sort_by_key(|h| h.weight);
    }

    /// Get handlers for an event, in call order.
    ///
    /// Returns an empty slice if no provider answers the event.
    pub fn get_handlers(&self, event: &str) -> &[TapHandler] {
        self.handlers
            .get(event)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Check if any provider answers an event.
    pub fn has_tap(&self, event: &str) -> bool {
        self.handlers
            .get(event)
            .is_some_and(|handlers| !handlers.is_empty())
    }

    /// Get all registered event names.
    pub fn tap_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(|s| s.as_str())
    }

    /// Get the count of handlers for an event.
    pub fn handler_count(&self, event: &str) -> usize {
        self.handlers.get(event).map(|v| v.len()).unwrap_or(0)
    }

    /// Get total number of registered events.
    pub fn tap_count(&self) -> usize {
        self.handlers.len()
    }
}
