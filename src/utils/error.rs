use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for command-level operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for til operations
#[derive(Debug)]
pub enum TilError {
    /// Configuration error
    Config(String),
    /// A page file could not be read
    Read { path: PathBuf, source: io::Error },
    /// A page file has a malformed front matter header
    Decode { path: PathBuf, reason: String },
    /// Several target directories are configured and none was selected
    AmbiguousTarget,
    /// The selected target directory is missing or empty in the config
    UndefinedTarget { selector: String },
    /// The user's home directory could not be determined
    HomeDir,
    /// A generated or authored file could not be written
    Write { path: PathBuf, source: io::Error },
    /// Version control error
    Git(String),
    /// Editor launch error
    Editor(String),
    /// A new page was requested without a title
    NoTitle,
}

impl fmt::Display for TilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TilError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TilError::Read { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            TilError::Decode { path, reason } => {
                write!(f, "malformed front matter in {}: {}", path.display(), reason)
            }
            TilError::AmbiguousTarget => {
                write!(f, "multiple target directories defined, no -t value provided")
            }
            TilError::UndefinedTarget { selector } => write!(
                f,
                "target directory '{}' is undefined or misconfigured in config",
                selector
            ),
            TilError::HomeDir => write!(f, "could not determine the home directory"),
            TilError::Write { path, source } => {
                write!(f, "could not write {}: {}", path.display(), source)
            }
            TilError::Git(msg) => write!(f, "Git error: {}", msg),
            TilError::Editor(msg) => write!(f, "Editor error: {}", msg),
            TilError::NoTitle => write!(f, "title must not be blank"),
        }
    }
}

impl Error for TilError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TilError::Read { source, .. } | TilError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}
