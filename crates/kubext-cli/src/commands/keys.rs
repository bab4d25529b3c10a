//! The keys command: the settings catalog

use colored::Colorize;
use kubext_core::CATALOG;
use serde::Serialize;

use crate::error::Result;

#[derive(Serialize)]
struct KeyRow {
    name: &'static str,
    key: &'static str,
    kind: String,
    default: Option<&'static str>,
}

/// Run the keys command
pub fn run_keys(json: bool) -> Result<()> {
    if json {
        let rows: Vec<KeyRow> = CATALOG
            .iter()
            .map(|spec| KeyRow {
                name: spec.name,
                key: spec.key,
                kind: spec.kind.to_string(),
                default: (spec.default != "-").then_some(spec.default),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "Settings".bold());
    println!();
    for spec in CATALOG {
        println!(
            "  {:<42} {:<8} {}",
            spec.key.green(),
            spec.kind.to_string().cyan(),
            spec.default.dimmed()
        );
    }
    println!();
    println!("{} {} settings.", "Total:".dimmed(), CATALOG.len());
    Ok(())
}
