//! Nova Kernel Library
//!
//! Backend menu aggregation for Nova modules. Independent modules contribute
//! menu descriptors for a menu event; the kernel merges them into one tree,
//! marks the entries matching the current request and orders every level.
//! The `nova-menu` binary runs the same pipeline from the command line.

pub mod config;
pub mod controller;
pub mod error;
pub mod menu;
pub mod plugin;
pub mod tap;

pub use config::Config;
pub use controller::{BackendController, MENU_ITEMS};
pub use error::{MenuError, MenuResult};
