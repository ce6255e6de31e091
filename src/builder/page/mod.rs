mod model;
mod collector;
mod utils;

pub use model::{Page, FILE_EXTENSION};
pub use collector::collect_pages;
pub use utils::title_case;
