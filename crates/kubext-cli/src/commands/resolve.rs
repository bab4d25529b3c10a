//! The resolve command

use kubext_core::EffectiveSettings;

use crate::cli::{OutputFormat, SourceArgs};
use crate::context::load_extension;
use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(source: &SourceArgs, format: OutputFormat) -> Result<()> {
    let extension = load_extension(source)?;
    let settings = extension.resolve_all()?;
    print!("{}", render(&settings, format)?);
    Ok(())
}

/// Serialize resolved settings, always ending with a newline.
pub fn render(settings: &EffectiveSettings, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(settings)?,
        OutputFormat::Yaml => serde_yaml::to_string(settings)?,
        OutputFormat::Toml => toml::to_string_pretty(settings)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
