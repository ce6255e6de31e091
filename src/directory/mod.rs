pub mod resolver;
pub mod utils;

// Re-export common types and functions
pub use resolver::resolve_target_dir;
pub use utils::ensure_directory;
