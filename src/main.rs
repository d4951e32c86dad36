use anyhow::Result;
use clap::Parser;
use roicanvas::cli::{Cli, Commands};
use roicanvas::commands::run::RunConfig;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            format,
            output,
            min_initiatives,
            as_of,
        } => roicanvas::commands::run::run_portfolio(RunConfig {
            input,
            format,
            output,
            min_initiatives,
            as_of,
        }),
        Commands::Init { force } => roicanvas::commands::init::init_template(force),
    }
}
