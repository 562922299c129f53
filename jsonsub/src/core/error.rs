//! Errors raised by the substitution core.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error(
        "JSON substitution key found named `{key}`, but each key must match the following regular expression: {pattern}"
    )]
    InvalidKey { key: String, pattern: &'static str },

    #[error("substitution rules must be a JSON object, found {found}")]
    RulesNotObject { found: &'static str },

    #[error("expected substituted document to be an object, found {found}")]
    ExpectedObject { found: &'static str },
}
