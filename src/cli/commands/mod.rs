mod build;
mod list;
mod new;
mod save;

pub use build::handle_build_command;
pub use list::handle_list_command;
pub use new::handle_new_command;
pub use save::handle_save_command;
