use log::info;

use crate::builder::{self, BuildContext, BuildSummary};
use crate::config::Config;
use crate::directory;
use crate::utils::error::BoxResult;

/// Handle the build command: regenerate the tag pages and the index
pub fn handle_build_command(config: &Config, target: Option<&str>) -> BoxResult<BuildSummary> {
    let content_dir = directory::resolve_target_dir(&config.target_directories, target, true)?;

    let ctx = BuildContext::new(content_dir);
    let summary = builder::build_content(&ctx)?;

    info!(
        "Built {} pages and {} tag pages, index at {}",
        summary.pages_count,
        summary.tags_count,
        summary.index_path.display()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_into_selected_target() {
        let root = TempDir::new().unwrap();
        let blog = root.path().join("blog");
        fs::create_dir_all(blog.join("docs")).unwrap();
        fs::write(
            blog.join("docs").join("2020-05-07T13-13-08-zombies.md"),
            "---\ndate: 2020-05-07T13:13:08-07:00\ntitle: Zombies\ntags: go\n---\n\n# Zombies\n\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.target_directories.insert("a".to_string(), blog.to_string_lossy().into_owned());
        config.target_directories.insert("b".to_string(), root.path().join("other").to_string_lossy().into_owned());

        let summary = handle_build_command(&config, Some("a")).unwrap();

        assert_eq!(summary.pages_count, 1);
        assert!(blog.join("docs").join("index.md").is_file());
        assert!(blog.join("docs").join("go.md").is_file());
    }

    #[test]
    fn test_build_without_selector_is_ambiguous() {
        let mut config = Config::default();
        config.target_directories.insert("a".to_string(), "/srv/a".to_string());
        config.target_directories.insert("b".to_string(), "/srv/b".to_string());

        let err = handle_build_command(&config, None).unwrap_err();

        assert!(err.to_string().contains("multiple target directories"));
    }
}
