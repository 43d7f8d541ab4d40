use anyhow::Result;
use clap::Parser;
use wearmap::cli::{Cli, Commands};
use wearmap::commands::{self, AnalyzeOptions, RelationsOptions};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            export,
            format,
            output,
            top,
            as_of,
            config,
        } => commands::handle_analyze(AnalyzeOptions {
            export,
            format,
            output,
            top,
            as_of,
            config,
        }),
        Commands::Relations {
            export,
            format,
            output,
            top,
        } => commands::handle_relations(RelationsOptions {
            export,
            format,
            output,
            top,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
