//! Strip Printer CLI - Command-line interface
//!
//! This binary drives the Strip Printer library from a flight plan feed and
//! manages its configuration.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use stripprinter::feed::FeedSource;

use commands::config::ConfigCommands;
use commands::print::PrintArgs;
use commands::run::RunArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "stripprinter")]
#[command(version = stripprinter::VERSION)]
#[command(about = "Print flight strips and amendments for a control zone", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify flight plan updates and print strips
    Run {
        /// JSON Lines feed of flight plan updates ('-' for stdin)
        #[arg(long, default_value = "-")]
        feed: FeedSource,

        /// Write strips to stdout instead of launching the printing tool
        #[arg(long)]
        dry_run: bool,

        /// Enable debug-level logging
        #[arg(long)]
        debug: bool,
    },

    /// Resolve a strip payload and write it to stdout
    Print {
        /// Read the payload from a UTF-8 file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Use the given text as the payload
        #[arg(long)]
        text: Option<String>,

        /// Use the built-in test strip
        #[arg(long)]
        test: bool,
    },

    /// Manage configuration settings
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Create the default configuration file
    Init,

    /// Show plugin information
    Info,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if let Err(e) = execute(cli, &matches) {
        e.exit();
    }
}

fn execute(cli: Cli, matches: &ArgMatches) -> Result<(), CliError> {
    match cli.command {
        Commands::Run {
            feed,
            dry_run,
            debug,
        } => commands::run::run(RunArgs {
            feed,
            dry_run,
            debug,
        }),
        Commands::Print { file, text, test } => commands::print::run(print_args(
            matches, file, text, test,
        )),
        Commands::Config(command) => commands::config::run(command),
        Commands::Init => commands::init::run(),
        Commands::Info => commands::info::run(),
    }
}

/// Payload flags of the print subcommand, in command-line order.
fn print_args(
    matches: &ArgMatches,
    file: Option<PathBuf>,
    text: Option<String>,
    test: bool,
) -> PrintArgs {
    PrintArgs::from_flags(matches.subcommand_matches("print"), file, text, test)
}
