//! Tap dispatcher - invokes menu providers in registry order.
//!
//! The dispatcher calls every provider registered for an event, collecting
//! their outputs. A failing provider aborts the dispatch.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use super::{TapRegistry, UserContext};
use crate::error::{MenuError, MenuResult};

/// Output of a single provider.
#[derive(Debug, Clone)]
pub struct TapResult {
    /// Provider that produced this result.
    pub provider_name: String,
    /// JSON output from the provider.
    pub output: Value,
}

/// Dispatcher for invoking providers of an event.
#[derive(Debug, Clone)]
pub struct TapDispatcher {
    registry: Arc<TapRegistry>,
}

impl TapDispatcher {
    /// Create a new dispatcher.
    pub fn new(registry: Arc<TapRegistry>) -> Self {
        Self { registry }
    }

    /// Dispatch an event to every registered provider.
    ///
    /// Providers run synchronously in weight order. The first provider error
    /// is returned and the remaining providers are not called.
    pub fn dispatch(&self, event: &str, user: &UserContext) -> MenuResult<Vec<TapResult>> {
        let handlers = self.registry.get_handlers(event);
        if handlers.is_empty() {
            debug!(event = %event, "no providers registered for event");
            return Ok(Vec::new());
        }

        let mut results = Vec::with_capacity(handlers.len());

        for handler in handlers {
            let name = handler.provider.name();
            match handler.provider.provide(event, user) {
                Ok(output) => results.push(TapResult {
                    provider_name: name.to_string(),
                    output,
                }),
                Err(e) => {
                    error!(provider = %name, event = %event, error = %e, "provider failed");
                    return Err(MenuError::provider(name, event, e));
                }
            }
        }

        debug!(
            event = %event,
            handlers = handlers.len(),
            results = results.len(),
            "dispatch complete"
        );

        Ok(results)
    }
}
