use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::defaults::{DEFAULT_COMMIT_MESSAGE, DEFAULT_EDITOR};
use crate::utils::error::TilError;

/// User configuration, read from `config.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Alias to directory; values may start with `~`
    #[serde(default)]
    pub target_directories: BTreeMap<String, String>,

    /// Command used to open new pages
    #[serde(default)]
    pub editor: Option<String>,

    /// Commit message for `--save` when none is given on the command line
    #[serde(default)]
    pub commit_message: Option<String>,

    #[serde(default)]
    pub committer_name: Option<String>,

    #[serde(default)]
    pub committer_email: Option<String>,
}

impl Config {
    /// The configured editor, or the platform opener when blank
    pub fn editor(&self) -> &str {
        non_blank(self.editor.as_deref()).unwrap_or(DEFAULT_EDITOR)
    }

    /// The configured commit message, or the built-in default
    pub fn commit_message(&self) -> &str {
        non_blank(self.commit_message.as_deref()).unwrap_or(DEFAULT_COMMIT_MESSAGE)
    }

    /// Author name and email for commits; both are required
    pub fn committer(&self) -> Result<(&str, &str), TilError> {
        match (
            non_blank(self.committer_name.as_deref()),
            non_blank(self.committer_email.as_deref()),
        ) {
            (Some(name), Some(email)) => Ok((name, email)),
            _ => Err(TilError::Config(
                "could not read a required configuration value (committerName, committerEmail)".to_string(),
            )),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
