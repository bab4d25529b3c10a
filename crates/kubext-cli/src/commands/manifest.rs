//! The manifest command

use colored::Colorize;
use kubext_core::{KitLogger, StaticProbe};

use crate::cli::SourceArgs;
use crate::context::load_extension;
use crate::error::Result;

/// Prints advisories to stderr.
struct ConsoleLogger;

impl KitLogger for ConsoleLogger {
    fn warn(&self, message: &str) {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }
}

/// Run the manifest command
pub fn run_manifest(source: &SourceArgs, openshift: bool) -> Result<()> {
    let extension = load_extension(source)?;
    let probe = if openshift {
        StaticProbe::openshift()
    } else {
        StaticProbe::kubernetes()
    };
    let manifest = extension.manifest(&ConsoleLogger, &probe);
    println!("{}", manifest.display());
    Ok(())
}
