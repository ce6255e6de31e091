use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use log::debug;

use crate::builder::page::model::{Page, FILE_EXTENSION};
use crate::utils::error::TilError;

/// Load every page file directly under `content_dir`.
///
/// Pages come back in reverse filename order. Filenames start with their
/// creation timestamp, so this is newest first without parsing any dates.
/// A page that cannot be read or decoded fails the whole load.
pub fn collect_pages(content_dir: &Path) -> Result<Vec<Page>, TilError> {
    debug!("Collecting pages from {}", content_dir.display());

    let mut paths = page_paths(content_dir)?;
    paths.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

    let mut pages = Vec::with_capacity(paths.len());
    for path in &paths {
        let page = Page::from_file(path)?;
        debug!("Loaded {} ({} bytes of content)", path.display(), page.body.len());
        pages.push(page);
    }

    debug!("Collected {} pages", pages.len());

    Ok(pages)
}

fn page_paths(content_dir: &Path) -> Result<Vec<PathBuf>, TilError> {
    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&content_dir.to_string_lossy()),
        FILE_EXTENSION
    );

    let entries = glob(&pattern)
        .map_err(|e| TilError::Config(format!("invalid content directory {}: {}", content_dir.display(), e)))?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => {
                return Err(TilError::Read {
                    path: e.path().to_path_buf(),
                    source: e.into(),
                })
            }
        }
    }

    Ok(paths)
}
