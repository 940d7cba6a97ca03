//! egui frontend for the todo list.
//!
//! Compiles to WASM for the browser (`hydrate`) or links into the
//! `todo-desktop` binary (`native`). Without either feature only the widgets
//! are built, which keeps `cargo test` free of a windowing backend.

pub mod components;
mod gui;

pub use gui::TodoGui;

#[cfg(all(target_arch = "wasm32", feature = "hydrate"))]
mod web;
