//! Mbdecomp CLI - decompile Mount&Blade module data files into module source.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Mbdecomp - turn compiled module `.txt` files back into module source
#[derive(Parser, Debug)]
#[command(name = "mbdecomp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decompile a module directory or a single data file
    Decompile {
        /// Module directory or single `.txt` data file
        input: PathBuf,

        /// Directory receiving the generated `module_*.py` files
        output: PathBuf,

        /// Engine build the files were compiled for
        #[arg(short, long, default_value = "wse-450")]
        mode: cli::ModeArg,

        /// Stop at the first file that fails to decompile
        #[arg(long)]
        fail_fast: bool,

        /// Report format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::ReportFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,

        /// Cancel the run after this many seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// List supported engine modes
    Modes,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let result = match args.command {
        Commands::Decompile {
            input,
            output,
            mode,
            fail_fast,
            format,
            progress,
            timeout,
        } => cli::decompile::execute(input, output, mode, fail_fast, format, progress, timeout),

        Commands::Modes => cli::modes::execute(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
