pub mod types;
pub mod logging;

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use crate::builder;
use crate::config::{self, ConfigOverrides};
use crate::utils::error::BoxResult;

/// Run the command-line interface and return the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    logging::init_logging(logging::level_for(cli.debug, cli.quiet));

    match build(&cli) {
        Ok(()) => 0,
        Err(e) => {
            error!("Build failed: {}", e);
            1
        }
    }
}

fn build(cli: &types::Cli) -> BoxResult<()> {
    let site_root = cli.site_root.clone().unwrap_or_else(|| PathBuf::from("."));

    let mut config = config::load_config(&site_root, cli.config.clone())?;
    config.apply_overrides(&ConfigOverrides {
        destination: cli.output.clone(),
        template: cli.template.clone(),
    });

    info!("Building site...");
    builder::build_site(&config)?;
    info!("Build complete. Output in {}", config.destination.display());
    Ok(())
}
