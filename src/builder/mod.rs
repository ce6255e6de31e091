pub mod site;
pub mod page;
pub mod tags;
pub mod types;

pub use site::build_content;
pub use types::{BuildContext, BuildSummary};
