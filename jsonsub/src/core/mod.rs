//! Deterministic, pure substitution logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! `serde_json::Value` trees and return new values; inputs are never mutated.

pub mod error;
pub mod rules;
pub mod substitute;
pub mod value;
