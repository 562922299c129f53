//! Substitution configuration stored in `jsonsub.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::rules::RuleSet;
use crate::io::rules_store::read_rules_map;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "jsonsub.toml";

/// Substitution configuration (TOML).
///
/// Every field is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SubstConfig {
    /// Fail unless the substituted document is a JSON object.
    pub require_object: bool,

    /// Pretty-print output documents.
    pub pretty: bool,

    /// JSON object of rules, resolved relative to the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_file: Option<PathBuf>,

    /// Inline rules. Entries override `rules_file` entries with the same key.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub substitutions: Map<String, Value>,
}

impl Default for SubstConfig {
    fn default() -> Self {
        Self {
            require_object: true,
            pretty: true,
            rules_file: None,
            substitutions: Map::new(),
        }
    }
}

impl SubstConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.rules_file {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("rules_file must not be empty"));
            }
        }
        Ok(())
    }

    /// Assemble the rule set: `rules_file` (or `rules_override`) first, then
    /// inline `substitutions` on top.
    ///
    /// A relative `rules_file` is resolved against `base_dir`; the override is
    /// used as given.
    pub fn rule_set(&self, base_dir: &Path, rules_override: Option<&Path>) -> Result<RuleSet> {
        let rules_path = match rules_override {
            Some(path) => Some(path.to_path_buf()),
            None => self.rules_file.as_ref().map(|path| base_dir.join(path)),
        };

        let mut merged = match &rules_path {
            Some(path) => read_rules_map(path)?,
            None => Map::new(),
        };
        for (key, value) in &self.substitutions {
            merged.insert(key.clone(), value.clone());
        }
        debug!(
            rules_file = ?rules_path,
            inline = self.substitutions.len(),
            total = merged.len(),
            "assembled substitution rules"
        );

        let rules = RuleSet::new(merged)?;
        Ok(rules)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SubstConfig::default()`.
pub fn load_config(path: &Path) -> Result<SubstConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = SubstConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SubstConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SubstConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write a default config to `path` unless one exists (or `force` is set).
///
/// Returns `true` if the file was written.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        debug!(path = %path.display(), "config exists, leaving it in place");
        return Ok(false);
    }
    write_config(path, &SubstConfig::default())?;
    Ok(true)
}

/// Write `contents` next to `path` and rename it into place.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut tmp_name = path
        .file_name()
        .with_context(|| format!("path has no file name {}", path.display()))?
        .to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}
