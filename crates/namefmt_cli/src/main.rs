//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `namefmt_core` linkage without the Flutter runtime.
//! - `namefmt_cli format` normalizes stdin to stdout.

use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::process::ExitCode;

/// Name formatter command-line tool.
#[derive(Parser, Debug)]
#[command(name = "namefmt_cli", version, about, long_about = None)]
struct Cli {
    /// Subcommand (if not provided, prints core linkage info)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Normalize names read from stdin and print the canonical list
    Format,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        None => {
            println!("namefmt_core ping={}", namefmt_core::ping());
            println!("namefmt_core version={}", namefmt_core::core_version());
            ExitCode::SUCCESS
        }
        Some(Command::Format) => match format_stdin() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("namefmt_cli: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn format_stdin() -> io::Result<()> {
    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", namefmt_core::normalize(&raw))
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_prints_linkage_info() {
        let cli = Cli::try_parse_from(["namefmt_cli"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn format_subcommand_is_parsed() {
        let cli = Cli::try_parse_from(["namefmt_cli", "format"]).unwrap();
        assert_eq!(cli.command, Some(Command::Format));
    }

    #[test]
    fn help_flag_displays_help() {
        let err = Cli::try_parse_from(["namefmt_cli", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let err = Cli::try_parse_from(["namefmt_cli", "sort"]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument
        ));
    }
}
