//! Loading substitution rules from a JSON rules file.
//!
//! A rules file is a single JSON object; each member is one rule. Entries are
//! returned unvalidated so callers can merge other sources before building a
//! [`RuleSet`](crate::core::rules::RuleSet).

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::core::rules::rules_map;
use crate::io::document::read_document;

/// Read the raw (unvalidated) rule entries from `path`.
pub fn read_rules_map(path: &Path) -> Result<Map<String, Value>> {
    let document = read_document(path)?;
    rules_map(document).with_context(|| format!("load rules {}", path.display()))
}
