use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat};

use crate::builder::page::utils::slugify;
use crate::builder::tags::Tag;
use crate::front_matter::{self, DecodeFailure, FrontMatter};
use crate::utils::error::TilError;
use crate::utils::fs;

/// Extension of every page file the pipeline reads and writes
pub const FILE_EXTENSION: &str = "md";

/// Filename timestamp layout; no colons so the names survive GitHub Pages
const FILENAME_DATE_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

const PRETTY_DATE_FORMAT: &str = "%b %d, %Y";

/// What an unparsable date prints as
const ZERO_PRETTY_DATE: &str = "Jan 01, 0001";

/// One dated entry persisted as a Markdown file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub date: String,
    pub tags: String,
    pub file_path: PathBuf,
    pub body: String,
}

impl Page {
    /// Create a fresh page dated `now`, filed under `content_dir`
    pub fn new(title: &str, content_dir: &Path, now: DateTime<FixedOffset>) -> Self {
        let file_name = format!(
            "{}-{}.{}",
            now.format(FILENAME_DATE_FORMAT),
            slugify(title),
            FILE_EXTENSION
        );

        Self {
            title: title.to_string(),
            date: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            tags: String::new(),
            file_path: content_dir.join(file_name),
            body: String::new(),
        }
    }

    /// Decode page text. The file path is left empty for the caller to stamp.
    pub fn from_source(source: &str) -> Result<Self, DecodeFailure> {
        let (front_matter, body) = front_matter::parse(source)?;

        Ok(Self {
            title: front_matter.title,
            date: front_matter.date,
            tags: front_matter.tags,
            file_path: PathBuf::new(),
            body: body.to_string(),
        })
    }

    /// Read and decode a page file
    pub fn from_file(path: &Path) -> Result<Self, TilError> {
        let bytes = fs::read_file(path)?;

        let source = String::from_utf8(bytes).map_err(|e| TilError::Decode {
            path: path.to_path_buf(),
            reason: format!("invalid UTF-8: {}", e),
        })?;

        let mut page = Self::from_source(&source).map_err(|e| TilError::Decode {
            path: path.to_path_buf(),
            reason: e.reason,
        })?;
        page.file_path = path.to_path_buf();

        Ok(page)
    }

    pub fn front_matter(&self) -> FrontMatter {
        FrontMatter::new(self.date.as_str(), self.title.as_str(), self.tags.as_str())
    }

    /// Render the seed text of a page: header plus an H1 title
    pub fn serialize(&self) -> String {
        format!("{}# {}\n\n", self.front_matter().render(), self.title)
    }

    /// Write the seed text to `file_path`
    pub fn save(&self) -> Result<(), TilError> {
        fs::write_file(&self.file_path, &self.serialize())
    }

    /// When the page was created, or `None` if the date does not parse
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.date.trim()).ok()
    }

    /// Calendar month (1-12) of creation, or `None` for an unparsable date
    pub fn created_month(&self) -> Option<u32> {
        self.created_at().map(|date| date.month())
    }

    pub fn is_content_page(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn pretty_date(&self) -> String {
        match self.created_at() {
            Some(date) => date.format(PRETTY_DATE_FORMAT).to_string(),
            None => ZERO_PRETTY_DATE.to_string(),
        }
    }

    /// Link suitable for embedding in a Markdown list
    pub fn link(&self) -> String {
        let file_name = self
            .file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        format!("<code>{}</code> [{}]({})", self.pretty_date(), self.title, file_name)
    }

    /// One tag per comma-separated name, empty names included
    pub fn tags(&self) -> Vec<Tag<'_>> {
        self.tags.split(',').map(|name| Tag::new(name, self)).collect()
    }
}
