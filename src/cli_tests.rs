use std::path::PathBuf;

use super::*;

#[test]
fn cli_with_paths() {
    let cli = Cli::parse_from(["langfile", "src/main.ts", "README.md"]);
    assert_eq!(cli.paths, vec!["src/main.ts", "README.md"]);
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(cli.output.is_none());
    assert!(!cli.fail_fast);
}

#[test]
fn cli_requires_a_path() {
    assert!(Cli::try_parse_from(["langfile"]).is_err());
}

#[test]
fn cli_list_languages_needs_no_path() {
    let cli = Cli::parse_from(["langfile", "--list-languages"]);
    assert!(cli.list_languages);
    assert!(cli.paths.is_empty());
}

#[test]
fn cli_json_format() {
    let cli = Cli::parse_from(["langfile", "--format", "json", "a.rs"]);
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["langfile", "--format", "sarif", "a.rs"]).is_err());
}

#[test]
fn cli_output_file() {
    let cli = Cli::parse_from(["langfile", "-o", "report.json", "a.rs"]);
    assert_eq!(cli.output, Some(PathBuf::from("report.json")));
}

#[test]
fn cli_fail_fast() {
    let cli = Cli::parse_from(["langfile", "--fail-fast", "a.rs"]);
    assert!(cli.fail_fast);
}

#[test]
fn log_level_follows_verbosity() {
    assert_eq!(Cli::parse_from(["langfile", "a.rs"]).log_level(), "warn");
    assert_eq!(Cli::parse_from(["langfile", "-v", "a.rs"]).log_level(), "info");
    assert_eq!(Cli::parse_from(["langfile", "-vv", "a.rs"]).log_level(), "debug");
    assert_eq!(Cli::parse_from(["langfile", "-vvvv", "a.rs"]).log_level(), "trace");
}

#[test]
fn quiet_overrides_verbosity() {
    let cli = Cli::parse_from(["langfile", "-q", "-vv", "a.rs"]);
    assert_eq!(cli.log_level(), "error");
}
