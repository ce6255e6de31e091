use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::directory::utils::{expand_home, home_dir};
use crate::utils::error::TilError;

/// Subdirectory of a target directory that holds the pages.
///
/// The target directory itself is the repository that gets committed and
/// pushed; generated Markdown stays inside this folder.
pub const PAGES_SUBDIR: &str = "docs";

/// Pick the target directory to work in.
///
/// A single configured directory is always used, whatever the selector.
/// With several, the selector must name one of them.
pub fn resolve_target_dir(
    target_dirs: &BTreeMap<String, String>,
    selector: Option<&str>,
    with_pages_subdir: bool,
) -> Result<PathBuf, TilError> {
    resolve_with_home(target_dirs, selector, with_pages_subdir, home_dir().as_deref())
}

fn resolve_with_home(
    target_dirs: &BTreeMap<String, String>,
    selector: Option<&str>,
    with_pages_subdir: bool,
    home: Option<&Path>,
) -> Result<PathBuf, TilError> {
    let selector = selector.map(str::trim).unwrap_or_default();

    let (key, dir) = if let (1, Some((key, dir))) = (target_dirs.len(), target_dirs.iter().next()) {
        (key.as_str(), dir.as_str())
    } else if selector.is_empty() {
        return Err(TilError::AmbiguousTarget);
    } else {
        let dir = target_dirs.get(selector).map(String::as_str).unwrap_or_default();
        (selector, dir)
    };

    if dir.trim().is_empty() {
        return Err(TilError::UndefinedTarget { selector: key.to_string() });
    }

    let target = expand_home(dir.trim(), home)?;

    if with_pages_subdir {
        Ok(target.join(PAGES_SUBDIR))
    } else {
        Ok(target)
    }
}
