mod builder;
mod render;
mod tag_pages;
mod index_page;

pub use builder::build_content;
