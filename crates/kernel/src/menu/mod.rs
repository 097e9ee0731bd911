//! Backend menu system.
//!
//! Menus are collected from providers via a menu event and go through three
//! steps:
//! - the tree builder folds provider outputs into a tree keyed by dotted paths
//! - the preparer flags active items and sorts siblings by weight and title
//! - the assembler drives both for the current request

mod assembler;
mod item;
mod prepare;
mod tree;

pub use assembler::{MenuAssembler, assemble};
pub use item::MenuItem;
pub use prepare::{ActivePathScan, MenuOptions, PrefixMatch, prepare_items, prepare_tree};
pub use tree::{MAX_PATH_DEPTH, MenuTree};
