use anyhow::Result;
use clap::Parser;

use accessmap::cli::{Cli, Commands};
use accessmap::commands::{handle_analyze, AnalyzeConfig};
use accessmap::filters::FacetFilter;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            roster,
            access,
            format,
            output,
            cluster,
            spg,
            bu,
            view,
        } => handle_analyze(AnalyzeConfig {
            roster_path: roster,
            access_path: access,
            filter: FacetFilter {
                clusters: cluster,
                spgs: spg,
                bus: bu,
            },
            view,
            format: format.into(),
            output,
        }),
    }
}
