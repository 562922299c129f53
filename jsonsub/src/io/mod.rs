//! I/O helpers for jsonsub commands.

pub mod config;
pub mod document;
pub mod rules_store;
