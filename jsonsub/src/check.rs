//! `jsonsub check`: validate the configured substitution rules.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::apply::config_dir;
use crate::io::config::load_config;

/// Summary of a successful rules check.
///
/// The CLI prints the number of keys; the keys themselves are kept for
/// library callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Rule keys in definition order.
    pub keys: Vec<String>,
}

/// Load config and rules, validating every key.
pub fn check_rules(config_path: &Path, rules_path: Option<&Path>) -> Result<CheckOutcome> {
    let cfg = load_config(config_path)?;
    let rules = cfg.rule_set(config_dir(config_path), rules_path)?;
    info!(rules = rules.len(), "substitution rules are valid");
    Ok(CheckOutcome {
        keys: rules.keys().map(str::to_string).collect(),
    })
}
