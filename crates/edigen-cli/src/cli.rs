//! CLI argument definitions for the test-artifact generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "edigen",
    version,
    about = "EDI test-artifact generator",
    long_about = "Generate EDI partner test artifacts from a design sheet.\n\n\
                  Reads the exported design sheet, scenario list and design-file\n\
                  archive, resolves every mapped field against the mapping catalog\n\
                  and writes outbound XML documents, filled test files and code\n\
                  snippets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Run a full generation pass over an input folder.
    Generate(GenerateArgs),

    /// List the supported EDI document kinds.
    Kinds,

    /// Parse a sheet EDI-info text and print the location it denotes.
    Locate(LocateArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Folder holding the design sheet CSV, scenario JSON and design
    /// archive ZIP (one of each).
    #[arg(value_name = "INPUT_FOLDER")]
    pub input_dir: PathBuf,

    /// Path to the mapping-catalog JSON export.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: PathBuf,

    /// Output directory for generated files (default: <INPUT_FOLDER>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory of per-kind XML template overrides.
    #[arg(long = "templates-dir", value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Skip line sequence numbering in generated documents.
    #[arg(long = "no-line-sequence")]
    pub no_line_sequence: bool,

    /// Skip the draft acknowledgement type in 855 documents.
    #[arg(long = "no-ack-type")]
    pub no_ack_type: bool,

    /// Skip the draft per-line item status in 855 documents.
    #[arg(long = "no-item-status")]
    pub no_item_status: bool,

    /// Skip the draft transaction-set purpose code in 856 documents.
    #[arg(long = "no-tset-purpose")]
    pub no_tset_purpose: bool,

    /// Skip the draft tax block in 810 documents.
    #[arg(long = "no-taxes")]
    pub no_taxes: bool,

    /// Skip the draft charges/allowances block in 810 documents.
    #[arg(long = "no-charges")]
    pub no_charges: bool,

    /// Skip the computed invoice total in 810 documents.
    #[arg(long = "no-total-amount")]
    pub no_total_amount: bool,
}

#[derive(Parser)]
pub struct LocateArgs {
    /// EDI-info text as it appears in a sheet cell.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Resolve the parsed location against this catalog as well.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
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

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
