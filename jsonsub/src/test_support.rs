//! Test-only helpers for building rule sets and fixture files.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::core::rules::RuleSet;

/// Build a rule set from a JSON object literal, panicking on invalid rules.
pub fn rule_set(rules: Value) -> RuleSet {
    RuleSet::from_value(&rules).expect("valid rules")
}

/// Write `value` as JSON to `dir/name` and return the path.
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    let payload = serde_json::to_string_pretty(value).expect("serialize fixture");
    fs::write(&path, payload).expect("write fixture");
    path
}

/// Temporary directory holding a `jsonsub.toml` with the given contents.
pub struct TestWorkspace {
    dir: tempfile::TempDir,
}

impl TestWorkspace {
    pub fn new(config: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("jsonsub.toml"), config).expect("write config");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        write_json(self.root(), name, value)
    }
}
