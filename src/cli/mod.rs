use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod formatters;

#[derive(Parser)]
#[command(name = "cukai")]
#[command(
    version,
    about = "Malaysian company tax calculator (Sdn Bhd, Enterprise, Berhad)"
)]
#[command(
    long_about = "Calculate statutory income tax on net profit for Malaysian business entities: the two-tier Sdn Bhd rate, personal progressive rates for enterprises, and the flat Berhad rate."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Path to a config.toml (defaults to $CUKAI_CONFIG, then the user config dir)
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Calculate tax payable on a net profit
    Calculate {
        /// Net profit in RM (e.g. 500000, "RM 1,200.50", -3000 for a loss)
        #[arg(allow_negative_numbers = true)]
        profit: String,

        /// Entity type: sdn_bhd, enterprise or berhad
        #[arg(short, long)]
        entity: Option<String>,

        /// Show how much each band contributed
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Compare tax payable across all entity types for one profit
    Compare {
        /// Net profit in RM
        #[arg(allow_negative_numbers = true)]
        profit: String,
    },

    /// List entity types with their accounting standards
    Entities,

    /// Show the rate schedule of an entity type
    Brackets {
        /// Entity type: sdn_bhd, enterprise or berhad
        entity: String,
    },
}
