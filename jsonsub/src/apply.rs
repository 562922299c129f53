//! `jsonsub apply`: substitute one document using the configured rules.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::core::substitute::Substitutor;
use crate::io::config::load_config;
use crate::io::document::{read_document, render_document, write_document};

/// Inputs for a single `apply` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOptions {
    pub config_path: PathBuf,
    /// Rules file overriding the config's `rules_file`.
    pub rules_path: Option<PathBuf>,
    pub input: PathBuf,
    /// Destination file; `None` means the caller prints `rendered`.
    pub output: Option<PathBuf>,
    /// Skip the config's `require_object` check.
    pub allow_non_object: bool,
    /// Force compact output regardless of the config's `pretty`.
    pub compact: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyOutcome {
    pub value: Value,
    pub replacements: usize,
    /// Rendered document, only set when no output file was requested.
    pub rendered: Option<String>,
}

/// Load config and rules, substitute `opts.input`, and write or render the
/// result.
pub fn apply_document(opts: &ApplyOptions) -> Result<ApplyOutcome> {
    let cfg = load_config(&opts.config_path)?;
    let rules = cfg.rule_set(config_dir(&opts.config_path), opts.rules_path.as_deref())?;
    let document = read_document(&opts.input)?;

    let substituted = Substitutor::new(&rules).run(&document);
    let replacements = substituted.replacements;
    let value = if cfg.require_object && !opts.allow_non_object {
        let members = substituted
            .into_object()
            .with_context(|| format!("substitute {}", opts.input.display()))?;
        Value::Object(members)
    } else {
        substituted.value
    };

    let pretty = cfg.pretty && !opts.compact;
    let rendered = match &opts.output {
        Some(output) => {
            write_document(output, &value, pretty)?;
            info!(
                input = %opts.input.display(),
                output = %output.display(),
                replacements,
                "wrote substituted document"
            );
            None
        }
        None => Some(render_document(&value, pretty)?),
    };

    Ok(ApplyOutcome {
        value,
        replacements,
        rendered,
    })
}

/// Directory a config's relative paths resolve against.
pub(crate) fn config_dir(config_path: &Path) -> &Path {
    config_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}
