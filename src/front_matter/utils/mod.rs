mod content;

pub use content::split_front_matter;
