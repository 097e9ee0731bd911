//! Nova Module SDK
//!
//! Types shared between the kernel and the modules that contribute to it.
//! Modules describe their backend menu entries with [`MenuDescriptor`] and
//! hand them to the kernel as JSON.

pub mod types;

pub use types::{MenuDescriptor, events, to_listener_output};

// Re-export serde_json so providers can build payloads without a direct dependency
#[doc(hidden)]
pub use serde_json;
