use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::info;

use crate::utils::error::TilError;
use crate::utils::fs;

/// The current user's home directory
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Expand a leading `~` against `home`; any other path is returned as given
pub fn expand_home(path: &str, home: Option<&Path>) -> Result<PathBuf, TilError> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };

    let home = home.ok_or(TilError::HomeDir)?;
    Ok(home.join(rest.trim_start_matches(['/', '\\'])))
}

/// Create `dir` if it does not exist yet
pub fn ensure_directory(dir: &Path) -> Result<(), TilError> {
    if !dir.is_dir() {
        fs::create_directory(dir)?;
        info!("\t-> created {}", dir.display());
    }
    Ok(())
}
