use std::fmt;

/// The fixed-key header block at the top of a page file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    /// Creation timestamp, RFC 3339
    pub date: String,

    /// Page title; empty for pages that are not entries
    pub title: String,

    /// Comma-separated tag names
    pub tags: String,
}

impl FrontMatter {
    pub fn new(date: impl Into<String>, title: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            tags: tags.into(),
        }
    }

    /// Render the header block, delimiters and trailing blank line included.
    ///
    /// Key order is fixed so re-rendering an unchanged header is byte-stable.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FrontMatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "---\ndate: {}\ntitle: {}\ntags: {}\n---\n\n",
            self.date, self.title, self.tags
        )
    }
}
