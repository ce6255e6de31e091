// Module declarations
mod builder;
mod config;
mod directory;
mod front_matter;
mod cli;
mod utils;

fn main() {
    // Run the CLI; any error is fatal and reported on a single line
    if let Err(e) = cli::run() {
        log::error!("✘ {}", e);
        std::process::exit(1);
    }
}
