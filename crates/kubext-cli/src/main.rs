//! kubext CLI
//!
//! Inspect how the Kubernetes build extension resolves its settings.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Kubernetes build configuration", "kubext".green().bold());
            println!();
            println!("Run {} for available commands.", "kubext --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { source, format } => commands::run_resolve(&source, format),
        Commands::Keys { json } => commands::run_keys(json),
        Commands::Manifest { source, openshift } => commands::run_manifest(&source, openshift),
    }
}
