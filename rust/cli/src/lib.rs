//! # Tablestakes CLI Library
//!
//! Command-line driver for the tablestakes Hold'em rules engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching
//! subcommand; [`run_with_input`] does the same with an explicit input stream
//! for the interactive `round` command.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["tablestakes", "eval", "Ah", "Kh", "Qh", "Jh", "Th"];
//! let mut out = Vec::new();
//! let code = tablestakes_cli::run(args, &mut out, &mut io::stderr());
//! assert_eq!(code, 0);
//! assert_eq!(String::from_utf8(out).unwrap(), "royal flush: Ah Kh Qh Jh Th\n");
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Classify a hand, optionally against a second one
//! - `deal`: Deal a seeded hand and resolve the showdown
//! - `round`: Drive one betting round from stdin
//! - `cfg`: Display the resolved table configuration

use clap::Parser;
use std::io::{BufRead, Write};
use tracing::debug;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, TablestakesCli};
use commands::{
    RoundArgs, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_round_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "deal", "round", "cfg"];

/// Runs the CLI with the process's stdin as interactive input.
///
/// Returns the exit code: `0` for success, `2` for errors, `130` when the
/// user quits a round.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], reading interactive input from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TablestakesCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };
    debug!(command = cli.cmd.name(), "dispatch");

    let result = match cli.cmd {
        Commands::Eval { cards, against } => handle_eval_command(&cards, against.as_deref(), out),
        Commands::Deal { players, seed } => handle_deal_command(&players, seed, out),
        Commands::Round {
            players,
            first,
            seed,
            json,
        } => match config::load() {
            Ok(config) => {
                let args = RoundArgs {
                    players,
                    first,
                    seed,
                    json,
                };
                handle_round_command(&args, config, out, err, input)
            }
            Err(e) => Err(e.into()),
        },
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Tablestakes Hold'em CLI").is_err()
                || writeln!(err, "Usage: tablestakes <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: tablestakes --help");
            exit_code::ERROR
        }
    }
}
