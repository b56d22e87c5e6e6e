use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use langfile::cli::Cli;
use langfile::inspector::FileInspector;
use langfile::language::ExtensionRegistry;
use langfile::output::{InspectionFailure, InspectionReport};
use langfile::{EXIT_INSPECTION_FAILED, EXIT_SUCCESS, EXIT_USAGE_ERROR};

const LOG_ENV: &str = "LANGFILE_LOG";

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_USAGE_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> langfile::Result<i32> {
    if cli.list_languages {
        let listing = format_language_table(ExtensionRegistry::global());
        write_output(cli.output.as_deref(), &listing, cli.quiet)?;
        return Ok(EXIT_SUCCESS);
    }

    let report = if cli.fail_fast {
        match inspect_until_failure(&cli.paths) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(EXIT_INSPECTION_FAILED);
            }
        }
    } else {
        inspect_all(&cli.paths)
    };

    let output = cli.format.formatter().format(&report)?;
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    if report.has_failures() {
        Ok(EXIT_INSPECTION_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Inspect every path, skipping (and recording) the ones that fail.
fn inspect_all(paths: &[String]) -> InspectionReport {
    let outcomes: Vec<_> = paths
        .par_iter()
        .map(|path| (path, FileInspector::new(path.as_str())))
        .collect();

    let mut report = InspectionReport::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(inspector) => report.records.push(inspector.into_info()),
            Err(e) => {
                tracing::warn!(error_type = e.error_type(), "skipping {path}: {e}");
                report.failures.push(InspectionFailure::new(path, &e));
            }
        }
    }
    report
}

fn inspect_until_failure(paths: &[String]) -> langfile::Result<InspectionReport> {
    let records = paths
        .par_iter()
        .map(|path| FileInspector::new(path.as_str()).map(FileInspector::into_info))
        .collect::<langfile::Result<Vec<_>>>()?;

    Ok(InspectionReport::new(records, Vec::new()))
}

fn format_language_table(registry: &ExtensionRegistry) -> String {
    let mut output = String::new();
    for (extension, language) in registry.entries() {
        let _ = writeln!(output, "{extension:<12} {language}");
    }
    output
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> langfile::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "report written");
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
