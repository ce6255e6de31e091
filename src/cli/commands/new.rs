use chrono::{DateTime, FixedOffset, Local};
use log::info;

use crate::builder::page::{title_case, Page};
use crate::config::Config;
use crate::directory;
use crate::utils::editor::open_in_editor;
use crate::utils::error::{BoxResult, TilError};

/// Handle the default command: create a page and open it in the editor
pub fn handle_new_command(config: &Config, target: Option<&str>, words: &[String]) -> BoxResult<()> {
    let page = create_new_page(config, target, words, Local::now().into())?;

    open_in_editor(config.editor(), &page.file_path)?;

    // Makes it easy to find the file that was just created
    info!("{}", page.file_path.display());

    Ok(())
}

/// Write the seed file for a new page into the target's pages folder
fn create_new_page(
    config: &Config,
    target: Option<&str>,
    words: &[String],
    now: DateTime<FixedOffset>,
) -> BoxResult<Page> {
    let title = title_case(words);
    if title.is_empty() {
        return Err(TilError::NoTitle.into());
    }

    let content_dir = directory::resolve_target_dir(&config.target_directories, target, true)?;
    directory::ensure_directory(&content_dir)?;

    let page = Page::new(&title, &content_dir, now);
    page.save()?;

    Ok(page)
}
