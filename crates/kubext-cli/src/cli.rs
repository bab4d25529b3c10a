//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// kubext - Inspect the Kubernetes build extension configuration
#[derive(Parser, Debug)]
#[command(name = "kubext")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print every setting after property, declared and default resolution
    ///
    /// Examples:
    ///   kubext resolve                              # kubext.toml in current dir
    ///   kubext resolve -D jkube.namespace=staging   # with a property override
    ///   kubext resolve --config build.yml --format yaml
    Resolve {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// List every setting with its property key, kind and default
    Keys {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the manifest the apply step would use
    Manifest {
        #[command(flatten)]
        source: SourceArgs,

        /// Behave as if connected to an OpenShift cluster
        #[arg(long)]
        openshift: bool,
    },
}

/// Where configuration and property overrides come from.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Project base directory
    #[arg(short, long, env = "KUBEXT_BASE_DIR")]
    pub base: Option<PathBuf>,

    /// Configuration document (TOML or YAML) holding a `kubernetes` block
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Property override as key=value (repeatable)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = parse_define)]
    pub defines: Vec<(String, String)>,

    /// Java-style .properties file (repeatable, later files win)
    #[arg(short, long = "properties", value_name = "FILE")]
    pub properties_files: Vec<PathBuf>,

    /// Read settings from JKUBE_* environment variables
    #[arg(long)]
    pub env: bool,
}

/// Serialization format for resolved settings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

fn parse_define(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resolve_with_defines() {
        let cli = Cli::parse_from([
            "kubext",
            "resolve",
            "-D",
            "jkube.namespace=dev",
            "--define",
            "jkube.offline=true",
            "--format",
            "yaml",
        ]);
        match cli.command {
            Some(Commands::Resolve { source, format }) => {
                assert_eq!(
                    source.defines,
                    vec![
                        ("jkube.namespace".to_string(), "dev".to_string()),
                        ("jkube.offline".to_string(), "true".to_string()),
                    ]
                );
                assert_eq!(format, OutputFormat::Yaml);
            }
            other => panic!("Expected Resolve command, got {other:?}"),
        }
    }

    #[test]
    fn define_keeps_equals_in_value() {
        assert_eq!(
            parse_define("jkube.docker.host=tcp://h:2375?a=b").unwrap(),
            ("jkube.docker.host".to_string(), "tcp://h:2375?a=b".to_string())
        );
    }

    #[test]
    fn define_without_key_is_rejected() {
        assert!(parse_define("=value").is_err());
        assert!(parse_define("novalue").is_err());
    }

    #[test]
    fn parse_manifest_openshift() {
        let cli = Cli::parse_from(["kubext", "manifest", "--openshift"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Manifest { openshift: true, .. })
        ));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
