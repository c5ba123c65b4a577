//! I/O helpers for guide commands.

pub mod catalog_store;
pub mod config;
pub mod init;
pub mod render;
