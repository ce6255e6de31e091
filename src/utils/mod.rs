pub mod editor;
pub mod error;
pub mod fs;
pub mod git;
