//! listrecon CLI
//!
//! Replays generations stored as JSON through the reconciliation engine

use clap::{Parser, Subcommand};
use listrecon_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "listrecon")]
#[command(about = "listrecon - Reconcile successive generations of sectioned lists", long_about = None)]
struct Cli {
    /// Logging profile: development, production or test
    #[arg(long, global = true, default_value = "production")]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reconcile two generations and print the edit-set
    Diff(commands::diff::DiffArgs),
    /// Feed a sequence of generations through one engine
    Replay(commands::replay::ReplayArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Replay(args) => commands::replay::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
