use std::path::PathBuf;

use chrono::{DateTime, Local};

/// Everything a build run needs to know, fixed for the whole run
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Directory holding the page files; generated files land here too
    pub content_dir: PathBuf,

    /// Timestamp stamped into every generated footer
    pub generated_at: DateTime<Local>,
}

impl BuildContext {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            generated_at: Local::now(),
        }
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

/// What a build run produced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of content pages listed in the index
    pub pages_count: usize,
    /// Number of tag pages written
    pub tags_count: usize,
    /// Path of the generated index page
    pub index_path: PathBuf,
}
