//! A single to-do entry.

use std::fmt;
use std::rc::Rc;
use std::sync::mpsc::Sender;

use crate::filter::Filter;
use crate::repaint::Repaint;

/// Identity of a task within its [`TodoApp`](crate::TodoApp).
///
/// Ids are never reused, so two tasks with the same label stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which sub-view of a task row is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Display,
    Editing,
}

/// Message from a task to the app that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    StatusChanged(TaskId),
    DeleteRequested(TaskId),
}

/// View-model for one task row.
pub struct Task {
    id: TaskId,
    label: String,
    completed: bool,
    mode: ViewMode,
    edit_buffer: String,
    visible: bool,
    events: Sender<TaskEvent>,
    repaint: Rc<dyn Repaint>,
}

impl Task {
    pub(crate) fn new(
        id: TaskId,
        label: String,
        events: Sender<TaskEvent>,
        repaint: Rc<dyn Repaint>,
    ) -> Self {
        Self {
            id,
            label,
            completed: false,
            mode: ViewMode::Display,
            edit_buffer: String::new(),
            visible: true,
            events,
            repaint,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == ViewMode::Editing
    }

    /// Visibility as of the owner's last recompute.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    /// The edit field's text, for binding to a text input.
    pub fn edit_buffer_mut(&mut self) -> &mut String {
        &mut self.edit_buffer
    }

    /// Switch to the edit sub-view with the field pre-filled from the label.
    pub fn on_edit(&mut self) {
        if self.mode == ViewMode::Editing {
            return;
        }
        self.edit_buffer.clone_from(&self.label);
        self.mode = ViewMode::Editing;
        self.repaint.request_repaint();
    }

    /// Store `new_text` as the label and switch back to the display sub-view.
    ///
    /// The text is stored as given. An empty string is accepted and leaves
    /// the task with an empty label.
    pub fn on_save(&mut self, new_text: impl Into<String>) {
        if self.mode != ViewMode::Editing {
            log::warn!("task {} saved while not editing; ignored", self.id);
            return;
        }
        self.label = new_text.into();
        self.edit_buffer.clear();
        self.mode = ViewMode::Display;
        log::debug!("task {} relabelled to {:?}", self.id, self.label);
        self.repaint.request_repaint();
    }

    /// Save whatever is in the edit field.
    pub fn commit_edit(&mut self) {
        let text = std::mem::take(&mut self.edit_buffer);
        self.on_save(text);
    }

    pub fn on_toggle_complete(&mut self, value: bool) {
        self.completed = value;
        let _ = self.events.send(TaskEvent::StatusChanged(self.id));
        self.repaint.request_repaint();
    }

    /// Ask the owner to remove this task. The task does not remove itself.
    pub fn on_delete(&self) {
        let _ = self.events.send(TaskEvent::DeleteRequested(self.id));
    }

    /// Whether this task is shown under `filter`.
    pub fn compute_visibility(&self, filter: Filter) -> bool {
        filter.admits(self.completed)
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("completed", &self.completed)
            .field("mode", &self.mode)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
