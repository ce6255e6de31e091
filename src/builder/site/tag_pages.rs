use std::path::PathBuf;

use log::{debug, info};
use rayon::prelude::*;

use crate::builder::page::{Page, FILE_EXTENSION};
use crate::builder::site::render::{footer, pages_to_list};
use crate::builder::tags::TagMap;
use crate::builder::types::BuildContext;
use crate::utils::error::TilError;
use crate::utils::fs;

/// Build the tag index and write one page per tag name.
///
/// Tag pages are rendered and written in parallel; this returns only once
/// every write has finished, so the index can safely link to all of them.
pub fn build_tag_pages<'a>(ctx: &BuildContext, pages: &'a [Page]) -> Result<TagMap<'a>, TilError> {
    info!("building tag pages");

    let tag_map = TagMap::new(pages);
    if tag_map.is_empty() {
        debug!("No tagged pages found");
    }

    tag_map
        .sorted_tag_names()
        .par_iter()
        .try_for_each(|name| write_tag_page(ctx, &tag_map, name))?;

    Ok(tag_map)
}

fn write_tag_page(ctx: &BuildContext, tag_map: &TagMap<'_>, name: &str) -> Result<(), TilError> {
    let content = render_tag_page(ctx, tag_map, name);
    let path = tag_page_path(ctx, name);

    fs::write_file(&path, &content)?;
    info!("\t-> {}", path.display());

    Ok(())
}

/// Heading, reverse-chronological page list, footer
pub fn render_tag_page(ctx: &BuildContext, tag_map: &TagMap<'_>, name: &str) -> String {
    let mut content = format!("## {}\n\n", name);

    content.push_str(&pages_to_list(tag_map.pages_for(name)));

    content.push('\n');
    content.push_str(&footer(&ctx.generated_at));

    content
}

pub fn tag_page_path(ctx: &BuildContext, name: &str) -> PathBuf {
    ctx.content_dir.join(format!("{}.{}", name, FILE_EXTENSION))
}
