use crate::builder::page::Page;

/// A tag name together with pages carrying it
#[derive(Debug, Clone)]
pub struct Tag<'a> {
    pub name: String,
    pub pages: Vec<&'a Page>,
}

impl<'a> Tag<'a> {
    pub fn new(name: &str, page: &'a Page) -> Self {
        Self {
            name: name.trim().to_string(),
            pages: vec![page],
        }
    }

    /// Tags with an empty name never make it into a `TagMap`
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    /// Link to the tag's own page, relative to the index
    pub fn link(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }

        format!("[{}](./{})", self.name, self.name)
    }
}
