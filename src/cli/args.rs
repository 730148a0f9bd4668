//! CLI argument definitions using clap

use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Parser, Subcommand};

use crate::domain::ParameterType;

/// Get, search, or create AWS SSM parameters
#[derive(Parser, Debug)]
#[command(name = "ssmgr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// AWS region (overrides config and profile)
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get SSM parameter
    Get {
        /// AWS profile to use
        #[arg(short, long)]
        profile: String,
        /// Parameter name
        name: String,
    },

    /// Search SSM parameters by name and print their values
    Search {
        /// AWS profile to use
        #[arg(short, long)]
        profile: String,
        /// Substring to match against parameter names
        query: String,
    },

    /// Create a new SSM parameter
    Create {
        /// AWS profile to use
        #[arg(short, long)]
        profile: String,
        /// Parameter name
        #[arg(short, long)]
        name: String,
        /// Parameter value
        #[arg(short, long)]
        value: String,
        /// Parameter type
        #[arg(short = 't', long = "type", value_parser = parameter_type_parser())]
        kind: ParameterType,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,
}

/// `Plain` / `Encrypted`, with the store's own names accepted as hidden aliases.
fn parameter_type_parser() -> impl TypedValueParser<Value = ParameterType> {
    PossibleValuesParser::new([
        PossibleValue::new("Plain").help("Plain text (String)"),
        PossibleValue::new("Encrypted").help("Encrypted with KMS (SecureString)"),
        PossibleValue::new("String").hide(true),
        PossibleValue::new("SecureString").hide(true),
    ])
    .try_map(|s| s.parse::<ParameterType>())
}
