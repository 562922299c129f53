//! Exact-match JSON substitution CLI.
//!
//! Reads substitution rules from `jsonsub.toml` (inline `[substitutions]`
//! and/or a `rules_file`) and applies them to JSON documents.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jsonsub::apply::{ApplyOptions, apply_document};
use jsonsub::check::check_rules;
use jsonsub::exit_codes;
use jsonsub::io::config::{CONFIG_FILE_NAME, init_config};
use jsonsub::logging;

#[derive(Parser)]
#[command(
    name = "jsonsub",
    version,
    about = "Replace exact-match JSON string values with configured values"
)]
struct Cli {
    /// Path to the config file.
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate substitution rules and print how many there are.
    Check {
        /// Rules file to use instead of the config's `rules_file`.
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Substitute a JSON document and print or write the result.
    Apply {
        /// JSON document to substitute.
        input: PathBuf,
        /// Rules file to use instead of the config's `rules_file`.
        #[arg(long)]
        rules: Option<PathBuf>,
        /// Write the result here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Accept results that are not JSON objects.
        #[arg(long)]
        allow_non_object: bool,
        /// Emit compact JSON.
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version` print to stdout and exit successfully.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit_codes::INVALID);
        }
    };
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init { force } => {
            if init_config(&cli.config, force)? {
                println!("wrote {}", cli.config.display());
            } else {
                println!("{} already exists", cli.config.display());
            }
        }
        Command::Check { rules } => {
            let outcome = check_rules(&cli.config, rules.as_deref())?;
            println!("{}", outcome.keys.len());
        }
        Command::Apply {
            input,
            rules,
            output,
            allow_non_object,
            compact,
        } => {
            let outcome = apply_document(&ApplyOptions {
                config_path: cli.config,
                rules_path: rules,
                input,
                output,
                allow_non_object,
                compact,
            })?;
            if let Some(rendered) = outcome.rendered {
                print!("{}", rendered);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["jsonsub", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE_NAME));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let err = Cli::try_parse_from(["jsonsub", "apply", "doc.json", "--bogus"])
            .err()
            .expect("usage error");
        assert!(err.use_stderr());

        let help = Cli::try_parse_from(["jsonsub", "--help"])
            .err()
            .expect("help exits early");
        assert!(!help.use_stderr());
    }

    #[test]
    fn parse_apply_with_overrides() {
        let cli = Cli::parse_from([
            "jsonsub",
            "apply",
            "doc.json",
            "--rules",
            "rules.json",
            "-o",
            "out.json",
            "--compact",
            "--config",
            "cfg/jsonsub.toml",
        ]);
        assert_eq!(cli.config, PathBuf::from("cfg/jsonsub.toml"));
        match cli.command {
            Command::Apply {
                input,
                rules,
                output,
                allow_non_object,
                compact,
            } => {
                assert_eq!(input, PathBuf::from("doc.json"));
                assert_eq!(rules, Some(PathBuf::from("rules.json")));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(!allow_non_object);
                assert!(compact);
            }
            _ => panic!("expected apply"),
        }
    }
}
