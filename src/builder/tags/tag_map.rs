use std::collections::HashMap;

use crate::builder::page::Page;
use crate::builder::tags::Tag;

/// Index from tag name to every `Tag` carrying that name.
///
/// Built once per run from the loaded pages and read-only afterwards.
#[derive(Debug, Default)]
pub struct TagMap<'a> {
    tags: HashMap<String, Vec<Tag<'a>>>,
}

impl<'a> TagMap<'a> {
    /// Build the map from pages in the order given
    pub fn new(pages: &'a [Page]) -> Self {
        let mut tag_map = Self::default();

        for page in pages {
            for tag in page.tags() {
                tag_map.add(tag);
            }
        }

        tag_map
    }

    /// Add a tag, skipping it when its name is empty
    pub fn add(&mut self, tag: Tag<'a>) {
        if !tag.is_valid() {
            return;
        }

        self.tags.entry(tag.name.clone()).or_default().push(tag);
    }

    pub fn get(&self, name: &str) -> &[Tag<'a>] {
        self.tags.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag names in ascending lexicographic order
    pub fn sorted_tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every page tagged `name`, most recent first
    pub fn pages_for(&self, name: &str) -> Vec<&'a Page> {
        let mut pages: Vec<&'a Page> = self
            .get(name)
            .iter()
            .flat_map(|tag| tag.pages.iter().copied())
            .collect();

        pages.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, date: &str, tags: &str) -> Page {
        Page {
            title: title.to_string(),
            date: date.to_string(),
            tags: tags.to_string(),
            ..Page::default()
        }
    }

    #[test]
    fn test_keys_are_distinct_trimmed_names() {
        let pages = vec![
            page("a", "", "go, ada"),
            page("b", "", " ada ,rust,, "),
            page("c", "", ""),
        ];

        let tag_map = TagMap::new(&pages);

        assert_eq!(tag_map.sorted_tag_names(), vec!["ada", "go", "rust"]);
        assert_eq!(tag_map.len(), 3);
        assert_eq!(tag_map.get("ada").len(), 2);
    }

    #[test]
    fn test_sorted_tag_names_no_duplicates() {
        let pages = vec![
            page("a", "", "zeta, alpha, mu"),
            page("b", "", "mu, alpha"),
            page("c", "", "Beta, alpha"),
        ];

        let tag_map = TagMap::new(&pages);
        let names = tag_map.sorted_tag_names();

        assert_eq!(names, vec!["Beta", "alpha", "mu", "zeta"]);
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_empty_map() {
        let pages = vec![page("a", "", "")];
        let tag_map = TagMap::new(&pages);

        assert!(tag_map.is_empty());
        assert!(tag_map.sorted_tag_names().is_empty());
    }

    #[test]
    fn test_add_skips_invalid() {
        let untagged = page("a", "", "");
        let mut tag_map = TagMap::default();

        tag_map.add(Tag::new(" ", &untagged));

        assert!(tag_map.is_empty());
    }

    #[test]
    fn test_pages_for_most_recent_first() {
        let pages = vec![
            page("old", "2019-01-01T00:00:00Z", "go"),
            page("undated", "garbage", "go"),
            page("new", "2021-06-01T00:00:00Z", "go"),
            page("mid", "2020-05-07T13:13:08-07:00", "go, ada"),
        ];

        let tag_map = TagMap::new(&pages);
        let titles: Vec<_> = tag_map.pages_for("go").iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["new", "mid", "old", "undated"]);
    }

    #[test]
    fn test_pages_for_identical_timestamps() {
        let pages = vec![
            page("a", "2020-05-07T13:13:08Z", "go"),
            page("b", "2020-05-07T13:13:08Z", "go"),
            page("c", "2020-05-07T06:13:08-07:00", "go"),
        ];

        let tag_map = TagMap::new(&pages);
        let found = tag_map.pages_for("go");

        assert_eq!(found.len(), 3);
        assert!(found
            .windows(2)
            .all(|pair| pair[0].created_at() >= pair[1].created_at()));
    }

    #[test]
    fn test_pages_for_absent_name() {
        let pages = vec![page("a", "", "go")];

        assert!(TagMap::new(&pages).pages_for("ada").is_empty());
    }
}
