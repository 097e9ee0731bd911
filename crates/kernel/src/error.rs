//! Kernel error types.

use thiserror::Error;

/// Errors raised while assembling a menu.
///
/// Malformed provider output is never an error: it is skipped and logged.
/// Only a provider that fails outright aborts the assembly.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("provider '{provider}' failed while handling '{event}': {source}")]
    Provider {
        provider: String,
        event: String,
        #[source]
        source: anyhow::Error,
    },
}

impl MenuError {
    /// Create a provider failure error.
    pub fn provider(
        provider: impl Into<String>,
        event: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        Self::Provider {
            provider: provider.into(),
            event: event.into(),
            source,
        }
    }
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_names_provider_and_event() {
        let err = MenuError::provider("web_chat", "backend.menu", anyhow::anyhow!("boom"));
        let msg = err.to_string();
        assert!(msg.contains("web_chat"));
        assert!(msg.contains("backend.menu"));
        assert!(msg.contains("boom"));
    }
}
