//! View-models for the todo list.
//!
//! This crate has no GUI dependency. It compiles for both the server and the
//! WASM/desktop frontend:
//! - [`TodoApp`] owns the task list, the active [`Filter`] and derived state
//! - [`Task`] holds one entry's text, completion flag and display/edit mode
//! - [`PageConfig`] is serialized by the server and read back by the frontend

pub mod app;
pub mod error;
pub mod filter;
pub mod page;
pub mod repaint;
pub mod task;

pub use app::TodoApp;
pub use error::TodoError;
pub use filter::Filter;
pub use page::PageConfig;
pub use repaint::Repaint;
pub use task::{Task, TaskEvent, TaskId, ViewMode};
