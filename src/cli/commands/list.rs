use log::debug;

use crate::config::Config;

/// Print the configured target directories to stdout, also under `--quiet`
pub fn handle_list_command(config: &Config) {
    let lines = target_directory_lines(config);
    debug!("listing {} target directories", lines.len());

    for line in lines {
        println!("{}", line);
    }
}

fn target_directory_lines(config: &Config) -> Vec<String> {
    config
        .target_directories
        .iter()
        .map(|(key, dir)| format!("{:>6}\t{}", key, dir))
        .collect()
}
