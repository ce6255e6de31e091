mod tag;
mod tag_map;

pub use tag::Tag;
pub use tag_map::TagMap;
