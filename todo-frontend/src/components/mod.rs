mod footer;
mod header;
mod input;
mod tabs;
mod task_row;

pub use footer::footer;
pub use header::header;
pub use input::task_input;
pub use tabs::filter_tabs;
pub use task_row::{task_list, task_row};
