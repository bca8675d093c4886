//! CLI argument definitions for the classification code checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "foodex-check",
    version,
    about = "Check classification codes against forbidden process rules",
    long_about = "Check food classification codes (base term plus facets) against a catalogue\n\
                  snapshot and the forbidden process rule tables.\n\n\
                  Prints one row of warnings per code and exits with status 1 when any\n\
                  code reaches HIGH or ERROR severity or cannot be parsed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a list of classification codes.
    Check(CheckArgs),

    /// List warning events with their ids and severities.
    Events(EventsArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// File with one code per line (reads stdin when omitted or `-`).
    #[arg(value_name = "CODES")]
    pub codes: Option<PathBuf>,

    /// Catalogue snapshot (JSON).
    #[arg(long = "catalogue", value_name = "PATH")]
    pub catalogue: PathBuf,

    /// Standard forbidden process table.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: PathBuf,

    /// Exception forbidden process table (no exception terms when absent).
    #[arg(long = "exceptions", value_name = "PATH")]
    pub exceptions: Option<PathBuf>,

    /// Warning message table (built-in messages when absent).
    #[arg(long = "messages", value_name = "PATH")]
    pub messages: Option<PathBuf>,

    /// Engine configuration (TOML).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Append the evaluation time to each message.
    #[arg(long = "timestamp")]
    pub timestamp: bool,
}

#[derive(Parser)]
pub struct EventsArgs {
    /// Warning message table to list instead of the built-in one.
    #[arg(long = "messages", value_name = "PATH")]
    pub messages: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    /// One JSON object per code.
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
