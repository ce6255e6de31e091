use std::error::Error;
use std::fmt;

use crate::front_matter::types::FrontMatter;
use crate::front_matter::utils::split_front_matter;

/// Why a front matter block could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub reason: String,
}

impl DecodeFailure {
    fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl Error for DecodeFailure {}

/// Parse front matter and body out of page text.
///
/// Text without a leading delimiter decodes to an empty header with the
/// whole text as body. Header lines are `key: value`; blank lines and
/// `#` comments are skipped and unknown keys are ignored.
pub fn parse(content: &str) -> Result<(FrontMatter, &str), DecodeFailure> {
    let (header, body) = match split_front_matter(content).map_err(DecodeFailure::new)? {
        Some(parts) => parts,
        None => return Ok((FrontMatter::default(), content)),
    };

    let mut front_matter = FrontMatter::default();

    for (index, line) in header.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Header lines start on the second line of the file
        let (key, value) = line.split_once(':').ok_or_else(|| {
            DecodeFailure::new(format!("line {}: expected `key: value`, found `{}`", index + 2, trimmed))
        })?;
        let value = unquote(value.trim()).to_string();

        match key.trim() {
            "date" => front_matter.date = value,
            "title" => front_matter.title = value,
            "tags" => front_matter.tags = value,
            _ => {}
        }
    }

    Ok((front_matter, body))
}

/// Strip one pair of matching surrounding quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
