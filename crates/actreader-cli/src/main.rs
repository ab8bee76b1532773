//! ActReader CLI
//!
//! Command-line interface for comparing and listing activity catalogues

use actreader_core::logging_facility::{init, Profile};
use actreader_store::settings::{default_settings_path, load_or_create_settings};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "actreader")]
#[command(about = "ActReader - compare activity class catalogues", long_about = None)]
struct Cli {
    /// Settings file (default: <local data dir>/UiPathTeam/ActivityReader/configuration.yml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Human-readable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two snapshot files, or two directories of them
    Diff(commands::diff::DiffArgs),
    /// List the activity classes of snapshot files
    Print(commands::print::PrintArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.debug {
        Profile::Development
    } else {
        Profile::Production
    });

    let settings_path = cli.config.unwrap_or_else(default_settings_path);
    let mut session = commands::Session::new(load_or_create_settings(&settings_path));

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, &mut session),
        Commands::Print(args) => commands::print::execute(args, &mut session),
    };

    match result {
        Ok(differences) if differences == 0 && session.errors() == 0 => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            session.report_error(&e);
            std::process::exit(1);
        }
    }
}
