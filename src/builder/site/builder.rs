use log::{debug, info};

use crate::builder::page::collect_pages;
use crate::builder::site::index_page::build_index_page;
use crate::builder::site::tag_pages::build_tag_pages;
use crate::builder::types::{BuildContext, BuildSummary};
use crate::utils::error::TilError;

/// Regenerate every tag page and then the index page from the page files.
///
/// Output is a full re-derivation from the pages on disk; nothing is diffed
/// and nothing is cleaned up if a write fails part way.
pub fn build_content(ctx: &BuildContext) -> Result<BuildSummary, TilError> {
    let start_time = std::time::Instant::now();
    info!("Using content directory: {}", ctx.content_dir.display());

    let pages = collect_pages(&ctx.content_dir)?;
    let tag_map = build_tag_pages(ctx, &pages)?;
    let index_path = build_index_page(ctx, &pages, &tag_map)?;

    let summary = BuildSummary {
        pages_count: pages.iter().filter(|page| page.is_content_page()).count(),
        tags_count: tag_map.len(),
        index_path,
    };

    debug!(
        "Built {} pages and {} tags in {:?}",
        summary.pages_count,
        summary.tags_count,
        start_time.elapsed()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    use crate::builder::site::render::footer;

    fn seed(dir: &Path) {
        fs::write(
            dir.join("2020-05-07T13-13-08-zombies.md"),
            "---\ndate: 2020-05-07T13:13:08-07:00\ntitle: Zombies\ntags: go, ada\n---\n\n# Zombies\n\n",
        )
        .unwrap();
        fs::write(
            dir.join("2020-06-01T10-00-00-vampires.md"),
            "---\ndate: 2020-06-01T10:00:00Z\ntitle: Vampires\ntags: go\n---\n\n# Vampires\n\nBody text.\n",
        )
        .unwrap();
    }

    fn read(dir: &Path, name: &str) -> String {
        fs::read_to_string(dir.join(name)).unwrap()
    }

    fn without_footer(content: &str) -> &str {
        let cut = content.rfind("<sup><sub>generated").unwrap();
        &content[..cut]
    }

    #[test]
    fn test_build_content() {
        let dir = TempDir::new().unwrap();
        seed(dir.path());
        let ctx = BuildContext::new(dir.path());

        let summary = build_content(&ctx).unwrap();

        assert_eq!(summary.pages_count, 2);
        assert_eq!(summary.tags_count, 2);
        assert_eq!(summary.index_path, dir.path().join("index.md"));

        let index = read(dir.path(), "index.md");
        assert!(index.starts_with(
            "[ada](./ada), [go](./go)\n\
             \n* <code>Jun 01, 2020</code> [Vampires](2020-06-01T10-00-00-vampires.md)\n\
             \n* <code>May 07, 2020</code> [Zombies](2020-05-07T13-13-08-zombies.md)\n\n\n"
        ));
        assert!(index.ends_with(&footer(&ctx.generated_at)));
        assert!(read(dir.path(), "ada.md").contains("[Zombies]"));
        assert!(!read(dir.path(), "ada.md").contains("[Vampires]"));
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        seed(dir.path());
        let ctx = BuildContext::new(dir.path());

        build_content(&ctx).unwrap();
        let first = (read(dir.path(), "index.md"), read(dir.path(), "go.md"), read(dir.path(), "ada.md"));

        // The generated index and tag pages are loaded on the second pass too
        build_content(&ctx).unwrap();
        let second = (read(dir.path(), "index.md"), read(dir.path(), "go.md"), read(dir.path(), "ada.md"));

        assert_eq!(first, second);
    }

    #[test]
    fn test_rebuild_later_differs_only_in_footer() {
        let dir = TempDir::new().unwrap();
        seed(dir.path());
        let ctx = BuildContext::new(dir.path());
        let later = ctx.clone().with_generated_at(ctx.generated_at + Duration::hours(1));

        build_content(&ctx).unwrap();
        let first = read(dir.path(), "index.md");
        build_content(&later).unwrap();
        let second = read(dir.path(), "index.md");

        assert_ne!(first, second);
        assert_eq!(without_footer(&first), without_footer(&second));
        assert!(second.ends_with(&footer(&later.generated_at)));
    }

    #[test]
    fn test_build_content_fails_on_corrupt_page() {
        let dir = TempDir::new().unwrap();
        seed(dir.path());
        fs::write(dir.path().join("2021-01-01T00-00-00-broken.md"), "---\ntitle: Broken\n").unwrap();

        let result = build_content(&BuildContext::new(dir.path()));

        assert!(matches!(result, Err(TilError::Decode { .. })));
        assert!(!dir.path().join("index.md").exists());
    }

    #[test]
    fn test_build_content_empty_directory() {
        let dir = TempDir::new().unwrap();
        let ctx = BuildContext::new(dir.path()).with_generated_at(Local::now());

        let summary = build_content(&ctx).unwrap();

        assert_eq!(summary.pages_count, 0);
        assert_eq!(summary.tags_count, 0);
        assert!(dir.path().join("index.md").is_file());
    }
}
