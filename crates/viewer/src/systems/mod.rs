//! Viewer systems that are not tied to a single plugin

pub mod part_loader;

pub use part_loader::*;
