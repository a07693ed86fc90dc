//! Command-line interface
//!
//! ```bash
//! keypad-calculator                      # interactive keypad
//! keypad-calculator eval 2 + 3 × 4 =     # prints 20
//! keypad-calculator eval --json 9 ÷      # prints the state snapshot
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::config::{AppConfig, Verbosity};
use crate::core::{CalcResult, CalcState};
use crate::keypad::parse_key_sequence;

/// Keypad calculator
#[derive(Parser, Debug)]
#[command(name = "keypad-calculator", version, about)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Append logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Folds the global flags into a configuration
    #[must_use]
    pub fn config(&self) -> AppConfig {
        let config =
            AppConfig::new().with_verbosity(Verbosity::from_flags(self.quiet, self.verbose));
        match &self.log_file {
            Some(path) => config.with_log_file(path.clone()),
            None => config,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive keypad
    Tui,

    /// Press keys from the initial state and print the display
    Eval(EvalArgs),
}

/// Arguments for `eval`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EvalArgs {
    /// Button labels, e.g. `1 2 + 3 =` (`*`, `/`, `C`, `del`, `+/-` also accepted)
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Print the full state snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the preview row above the display
    #[arg(long, conflicts_with = "json")]
    pub preview: bool,
}

/// Runs `eval`: returns the text to print
pub fn run_eval(args: &EvalArgs) -> CalcResult<String> {
    let events = parse_key_sequence(args.keys.iter().map(String::as_str))?;
    info!(keys = events.len(), "replaying key sequence");
    let state = CalcState::new().apply_all(events);

    if args.json {
        return Ok(serde_json::to_string_pretty(&state)?);
    }
    if args.preview {
        return Ok(format!("{}\n{}", state.preview(), state.display()));
    }
    Ok(state.display().to_string())
}
