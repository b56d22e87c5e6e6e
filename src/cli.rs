use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "langfile")]
#[command(author, version, about = "Detect the language, size and line counts of source files")]
#[command(long_about = "Inspect each given file and report its language (by extension), \
    byte size and line counts.\n\n\
    Exit codes:\n  \
    0 - All files inspected\n  \
    1 - At least one file could not be inspected\n  \
    2 - Usage or output error\n\n\
    Set LANGFILE_LOG (e.g. LANGFILE_LOG=debug) to override the log filter.")]
pub struct Cli {
    /// Files to inspect
    #[arg(required_unless_present = "list_languages")]
    pub paths: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the report on stdout and non-error logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Abort without a report as soon as any file cannot be inspected
    #[arg(long)]
    pub fail_fast: bool,

    /// Print the extension-to-language table and exit
    #[arg(long)]
    pub list_languages: bool,
}

impl Cli {
    /// Default log filter derived from `--quiet` and `-v`.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
