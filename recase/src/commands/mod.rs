mod check;
mod completions;
mod convert;
mod ident;
mod keys;
mod tokens;

use std::{io, path::PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::{Context, Result};
use ident::IdentCommand;
use keys::KeysCommand;
use recase_config::RecaseToml;
use tokens::TokensCommand;

use crate::logger;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for recase_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for recase_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "recase")]
#[command(version)]
#[command(about = "Convert identifiers between naming conventions")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Path to recase.toml (defaults to ./recase.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logger::init(self.verbose);

        if let Commands::Completions(cmd) = &self.command {
            return cmd.run();
        }

        let config = RecaseToml::discover(self.config.as_deref(), ".").unwrap_or_exit();
        match &self.command {
            Commands::Convert(cmd) => cmd.run(&config),
            Commands::Keys(cmd) => cmd.run(&config),
            Commands::Tokens(cmd) => cmd.run(),
            Commands::Ident(cmd) => cmd.run(&config),
            Commands::Check(cmd) => cmd.run(&config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert strings to a naming convention
    Convert(ConvertCommand),

    /// Rename the keys of a JSON document
    Keys(KeysCommand),

    /// Show how strings split into words
    Tokens(TokensCommand),

    /// Produce language-safe identifiers
    Ident(IdentCommand),

    /// Validate recase.toml and show the effective settings
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Use `args` when given, otherwise read one input per line from stdin.
pub(crate) fn inputs_or_stdin(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    io::stdin()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .wrap_err("failed to read stdin")
}
