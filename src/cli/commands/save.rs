use log::info;

use crate::cli::commands::build::handle_build_command;
use crate::config::Config;
use crate::directory;
use crate::utils::error::BoxResult;
use crate::utils::git;

/// Handle the save command: build, commit the target directory, push it
pub fn handle_save_command(config: &Config, target: Option<&str>, words: &[String]) -> BoxResult<()> {
    let message = determine_commit_message(config, words);
    let (name, email) = config.committer()?;

    handle_build_command(config, target)?;

    // The repository is the target directory itself, not its pages folder
    let repo_root = directory::resolve_target_dir(&config.target_directories, target, false)?;

    info!("saving uncommitted files");
    let hash = git::save(&repo_root, &message, name, email)?;
    info!("committed with '{}' ({:.7})", message, hash);

    info!("pushing to remote");
    git::push(&repo_root)?;

    Ok(())
}

/// Pick the commit message.
///
/// Words given on the command line win, then `commitMessage` from the
/// config, then the built-in default.
pub fn determine_commit_message(config: &Config, words: &[String]) -> String {
    let message = words.join(" ");
    if message.trim().is_empty() {
        return config.commit_message().to_string();
    }
    message
}
