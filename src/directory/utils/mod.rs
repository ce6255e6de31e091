mod path_helpers;

pub use path_helpers::{ensure_directory, expand_home, home_dir};
