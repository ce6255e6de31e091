use std::path::PathBuf;

use log::info;

use crate::builder::page::{Page, FILE_EXTENSION};
use crate::builder::site::render::{footer, pages_to_list};
use crate::builder::tags::TagMap;
use crate::builder::types::BuildContext;
use crate::utils::error::TilError;
use crate::utils::fs;

/// Render and write the root index page, returning its path
pub fn build_index_page(ctx: &BuildContext, pages: &[Page], tag_map: &TagMap<'_>) -> Result<PathBuf, TilError> {
    info!("building index page");

    let content = render_index_page(ctx, pages, tag_map);
    let path = index_page_path(ctx);

    fs::write_file(&path, &content)?;
    info!("\t-> {}", path.display());

    Ok(path)
}

/// Tag links, then every content page grouped by month, then the footer
pub fn render_index_page(ctx: &BuildContext, pages: &[Page], tag_map: &TagMap<'_>) -> String {
    let tag_links: Vec<String> = tag_map
        .sorted_tag_names()
        .into_iter()
        .filter_map(|name| tag_map.get(name).first().map(|tag| tag.link()))
        .collect();

    let mut content = tag_links.join(", ");
    content.push('\n');

    content.push_str(&pages_to_list(pages));
    content.push('\n');

    content.push('\n');
    content.push_str(&footer(&ctx.generated_at));

    content
}

pub fn index_page_path(ctx: &BuildContext) -> PathBuf {
    ctx.content_dir.join(format!("index.{}", FILE_EXTENSION))
}
