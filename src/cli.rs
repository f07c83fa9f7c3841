//! CLI command implementations for mbdecomp.

pub(crate) mod decompile;
pub(crate) mod modes;

mod output;

use clap::ValueEnum;
use mbdecomp::{DecompileError, Mode};
use std::error::Error;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Engine mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    /// Mount&Blade 1.010/1.011.
    Vanilla,
    /// Mount&Blade: Warband.
    Warband,
    /// Warband + script enhancer 3.2.
    #[value(name = "wse-320")]
    Wse320,
    /// Warband + script enhancer 4.5.
    #[value(name = "wse-450")]
    Wse450,
    /// Caribbean!
    Caribbean,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Vanilla => Mode::Vanilla,
            ModeArg::Warband => Mode::Warband,
            ModeArg::Wse320 => Mode::WarbandScriptEnhancer320,
            ModeArg::Wse450 => Mode::WarbandScriptEnhancer450,
            ModeArg::Caribbean => Mode::Caribbean,
        }
    }
}

/// Output format for the run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<DecompileError> for CliError {
    fn from(e: DecompileError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over the verbosity flag when set.
pub(crate) fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mbdecomp={level}")));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
