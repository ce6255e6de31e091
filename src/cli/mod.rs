pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::{debug, info};

use crate::config;
use crate::utils::error::BoxResult;
use types::{Cli, Mode};

/// Run the command-line interface
pub fn run() -> BoxResult<()> {
    let cli = Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    let config = config::load_config()?;
    debug!("Configuration loaded: {:?}", config);

    match cli.mode() {
        Mode::List => commands::handle_list_command(&config),
        Mode::Build => {
            commands::handle_build_command(&config, cli.target())?;
        }
        Mode::Save => commands::handle_save_command(&config, cli.target(), &cli.words)?,
        Mode::NewPage => commands::handle_new_command(&config, cli.target(), &cli.words)?,
    }

    info!("✓ done");
    Ok(())
}
