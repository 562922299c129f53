//! Whole-value string substitution for JSON documents.
//!
//! Given exact-match rules (`"KEY" -> any JSON value`), jsonsub rebuilds a
//! document tree, replacing every string leaf equal to a rule key with the
//! rule's value. The crate is split the same way as the work it does:
//!
//! - **[`core`]**: Pure, deterministic logic (rule validation, substitution).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, rules files, documents).
//!
//! Orchestration modules ([`apply`], [`check`]) coordinate core logic with I/O
//! to implement CLI commands.
//!
//! ```
//! use jsonsub::core::rules::RuleSet;
//! use jsonsub::core::substitute::apply;
//! use serde_json::json;
//!
//! let rules = RuleSet::from_value(&json!({"FOO": {"bar": "baz"}})).unwrap();
//! let doc = json!({"hello": "FOO", "baz": "do not replace FOO"});
//! assert_eq!(
//!     apply(&rules, &doc),
//!     json!({"hello": {"bar": "baz"}, "baz": "do not replace FOO"})
//! );
//! ```

pub mod apply;
pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::error::SubstitutionError;
pub use crate::core::rules::RuleSet;
pub use crate::core::substitute::{Substituted, Substitutor};
