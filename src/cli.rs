use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "wearmap")]
#[command(about = "Wardrobe usage and outfit analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a wardrobe export: statistics and advisories
    Analyze {
        /// Path to the wardrobe export (JSON)
        export: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Truncate ranking lists to the top N entries
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Reference date (YYYY-MM-DD) for idle/season/trend calculations;
        /// defaults to today
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,

        /// Configuration file (defaults to .wearmap.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show per-item outfit co-occurrence relations
    Relations {
        /// Path to the wardrobe export (JSON)
        export: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the N most frequently worn items
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,
    },

    /// Initialize a .wearmap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
