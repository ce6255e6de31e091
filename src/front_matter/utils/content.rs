/// The line that opens and closes a front matter block
pub const DELIMITER: &str = "---";

/// Check if content opens with a front matter delimiter line
pub fn has_front_matter(content: &str) -> bool {
    content
        .lines()
        .next()
        .map_or(false, |line| line.trim_end_matches('\r') == DELIMITER)
}

/// Split content into its raw header and body.
///
/// Returns `Ok(None)` when the content carries no front matter at all, and
/// an error reason when the opening delimiter is never closed. The single
/// blank line that conventionally follows the closing delimiter is not part
/// of the body.
pub fn split_front_matter(content: &str) -> Result<Option<(&str, &str)>, String> {
    if !has_front_matter(content) {
        return Ok(None);
    }

    let header_start = match content.find('\n') {
        Some(pos) => pos + 1,
        None => return Err("missing closing delimiter".to_string()),
    };

    let mut offset = header_start;
    for line in content[header_start..].split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            let header = &content[header_start..offset];
            let rest = &content[offset + line.len()..];
            let body = rest
                .strip_prefix("\r\n")
                .or_else(|| rest.strip_prefix('\n'))
                .unwrap_or(rest);
            return Ok(Some((header, body)));
        }
        offset += line.len();
    }

    Err("missing closing delimiter".to_string())
}
