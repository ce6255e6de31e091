use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::defaults::DEFAULT_CONFIG;
use crate::config::types::Config;
use crate::directory::utils::home_dir;
use crate::utils::error::TilError;

const CONFIG_DIR_NAME: &str = "til";
const CONFIG_FILE_NAME: &str = "config.yml";

/// Load the user configuration, creating a default one on first run
pub fn load_config() -> Result<Config, TilError> {
    let path = config_file_path()?;

    ensure_config_file(&path)?;

    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(&path).map_err(|e| {
        TilError::Config(format!("Failed to read configuration file {}: {}", path.display(), e))
    })?;

    parse_config(&content)
}

/// Parse YAML configuration text
pub fn parse_config(content: &str) -> Result<Config, TilError> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| TilError::Config(format!("Failed to parse YAML configuration: {}", e)))
}

/// Path of `config.yml`, honouring `XDG_CONFIG_HOME`
pub fn config_file_path() -> Result<PathBuf, TilError> {
    let dir = config_dir(env::var_os("XDG_CONFIG_HOME"), home_dir())?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

fn config_dir(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf, TilError> {
    match xdg_config_home.filter(|dir| !dir.is_empty()) {
        Some(dir) => Ok(PathBuf::from(dir).join(CONFIG_DIR_NAME)),
        None => home
            .map(|home| home.join(".config").join(CONFIG_DIR_NAME))
            .ok_or(TilError::HomeDir),
    }
}

/// Make sure the config file exists; an empty file gets the defaults.
///
/// A file with any content is never overwritten.
fn ensure_config_file(path: &Path) -> Result<(), TilError> {
    if let Some(dir) = path.parent() {
        if !dir.is_dir() {
            fs::create_dir_all(dir).map_err(|e| {
                TilError::Config(format!("could not create the configuration directory {}: {}", dir.display(), e))
            })?;
            info!("\t-> created {}", dir.display());
        }
    }

    let is_empty = match fs::metadata(path) {
        Ok(metadata) => metadata.len() == 0,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
        Err(e) => {
            return Err(TilError::Config(format!(
                "could not assert the configuration file {} exists: {}",
                path.display(),
                e
            )))
        }
    };

    if is_empty {
        fs::write(path, DEFAULT_CONFIG).map_err(|e| {
            TilError::Config(format!("could not write the configuration file {}: {}", path.display(), e))
        })?;
        info!("\t-> created {}", path.display());
    }

    Ok(())
}
