//! The task list view-model.

use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::error::TodoError;
use crate::filter::Filter;
use crate::repaint::Repaint;
use crate::task::{Task, TaskEvent, TaskId};

/// Owns the tasks, the active filter and the derived summary state.
///
/// Tasks report checkbox and delete clicks over a channel created here.
/// Those messages are applied by [`process_events`](Self::process_events),
/// which the UI runs through [`before_render`](Self::before_render) and
/// again after each frame's widgets have fired.
pub struct TodoApp {
    tasks: Vec<Task>,
    filter: Filter,
    input: String,
    remaining_label: String,
    next_id: u64,
    events_tx: Sender<TaskEvent>,
    events_rx: Receiver<TaskEvent>,
    repaint: Rc<dyn Repaint>,
}

impl Default for TodoApp {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl TodoApp {
    pub fn new(repaint: impl Repaint + 'static) -> Self {
        let (events_tx, events_rx) = channel();
        Self {
            tasks: Vec::new(),
            filter: Filter::default(),
            input: String::new(),
            remaining_label: remaining_text(0),
            next_id: 0,
            events_tx,
            events_rx,
            repaint: Rc::new(repaint),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// All tasks in insertion order, visible or not.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Mutable access for widgets. A slice cannot add or remove tasks.
    pub fn tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Tasks passing the filter as of the last recompute.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_visible())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Text in the new-task field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Number of tasks not yet completed, counted from the live list.
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_completed()).count()
    }

    /// Footer text as of the last recompute.
    pub fn remaining_label(&self) -> &str {
        &self.remaining_label
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Append a task labelled with the trimmed `text`.
    ///
    /// Blank text is ignored and returns `None`; the input field is only
    /// cleared when a task is added.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let label = text.trim();
        if label.is_empty() {
            return None;
        }

        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(
            id,
            label.to_owned(),
            self.events_tx.clone(),
            self.repaint.clone(),
        ));
        self.input.clear();
        log::debug!("added task {id}: {label:?}");

        self.recompute();
        self.repaint.request_repaint();
        Some(id)
    }

    /// Add the contents of the input field.
    pub fn submit_input(&mut self) -> Option<TaskId> {
        let text = self.input.clone();
        self.add_task(&text)
    }

    /// Remove the task with `id`. Returns `false` if no such task exists.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id() == id) else {
            log::warn!("delete of unknown task {id} ignored");
            return false;
        };
        let task = self.tasks.remove(index);
        log::debug!("deleted task {id}: {:?}", task.label());

        self.recompute();
        self.repaint.request_repaint();
        true
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        log::debug!("filter set to {filter}");
        self.recompute();
        self.repaint.request_repaint();
    }

    /// Select the filter shown on tab `index`.
    pub fn select_tab(&mut self, index: usize) -> Result<(), TodoError> {
        let filter = Filter::from_tab_index(index)?;
        self.set_filter(filter);
        Ok(())
    }

    /// Delete every completed task, keeping the order of the rest.
    ///
    /// Ids are collected first and deleted one by one, so the list is never
    /// mutated while it is being walked.
    pub fn clear_completed(&mut self) -> usize {
        let completed: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|task| task.is_completed())
            .map(Task::id)
            .collect();

        completed
            .into_iter()
            .filter(|&id| self.delete_task(id))
            .count()
    }

    /// Refresh every task's visibility and the remaining-count label.
    pub fn recompute(&mut self) {
        let filter = self.filter;
        for task in &mut self.tasks {
            let visible = task.compute_visibility(filter);
            task.set_visible(visible);
        }
        self.remaining_label = remaining_text(self.remaining_count());
    }

    /// Apply pending task messages. Returns how many were handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            handled += 1;
            match event {
                TaskEvent::StatusChanged(id) => {
                    log::debug!("task {id} status changed");
                    self.recompute();
                }
                TaskEvent::DeleteRequested(id) => {
                    self.delete_task(id);
                }
            }
        }
        handled
    }

    /// Run right before a frame is painted.
    pub fn before_render(&mut self) {
        self.process_events();
        self.recompute();
    }
}

fn remaining_text(count: usize) -> String {
    format!("{count} active task(s) remaining.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::ViewMode;
    use std::cell::Cell;

    fn labels(app: &TodoApp) -> Vec<&str> {
        app.tasks().iter().map(Task::label).collect()
    }

    fn visible_labels(app: &TodoApp) -> Vec<&str> {
        app.visible_tasks().map(Task::label).collect()
    }

    #[test]
    fn starts_empty() {
        let app = TodoApp::default();
        assert!(app.is_empty());
        assert_eq!(app.filter(), Filter::All);
        assert_eq!(app.remaining_count(), 0);
        assert_eq!(app.remaining_label(), "0 active task(s) remaining.");
    }

    #[test]
    fn add_trims_and_appends_in_order() {
        let mut app = TodoApp::default();
        app.add_task("  first ");
        app.add_task("second");

        assert_eq!(labels(&app), ["first", "second"]);
        assert!(app.tasks().iter().all(|task| !task.is_completed()));
        assert_eq!(app.remaining_label(), "2 active task(s) remaining.");
    }

    #[test]
    fn whitespace_input_is_ignored() {
        let mut app = TodoApp::default();
        assert_eq!(app.add_task("  "), None);
        assert_eq!(app.add_task(""), None);
        assert_eq!(app.len(), 0);
    }

    #[test]
    fn submit_clears_input_only_on_success() {
        let mut app = TodoApp::default();
        app.input_mut().push_str("   ");
        assert_eq!(app.submit_input(), None);
        assert_eq!(app.input(), "   ");

        app.input_mut().clear();
        app.input_mut().push_str("Buy milk");
        assert!(app.submit_input().is_some());
        assert_eq!(app.input(), "");
        assert_eq!(labels(&app), ["Buy milk"]);
    }

    #[test]
    fn clear_completed_keeps_active_task() {
        let mut app = TodoApp::default();
        app.add_task("Buy milk");
        assert_eq!(app.clear_completed(), 0);
        assert_eq!(labels(&app), ["Buy milk"]);
    }

    #[test]
    fn clear_completed_removes_toggled_tasks() {
        let mut app = TodoApp::default();
        let a = app.add_task("A").unwrap();
        app.add_task("B");

        app.task_mut(a).unwrap().on_toggle_complete(true);
        app.process_events();
        assert_eq!(app.clear_completed(), 1);

        assert_eq!(labels(&app), ["B"]);
        assert_eq!(app.remaining_count(), 1);
        assert_eq!(app.remaining_label(), "1 active task(s) remaining.");
    }

    #[test]
    fn clear_completed_preserves_survivor_order() {
        let mut app = TodoApp::default();
        let ids: Vec<TaskId> = ["a", "b", "c", "d", "e"]
            .into_iter()
            .filter_map(|label| app.add_task(label))
            .collect();
        for &id in &[ids[0], ids[2], ids[3]] {
            app.task_mut(id).unwrap().on_toggle_complete(true);
        }

        assert_eq!(app.clear_completed(), 3);
        assert_eq!(labels(&app), ["b", "e"]);
    }

    #[test]
    fn edit_then_save_relabels() {
        let mut app = TodoApp::default();
        let id = app.add_task("X").unwrap();
        let task = app.task_mut(id).unwrap();
        task.on_edit();
        task.on_save("Y");

        let task = app.task(id).unwrap();
        assert_eq!(task.label(), "Y");
        assert_eq!(task.mode(), ViewMode::Display);
    }

    #[test]
    fn delete_uses_identity_not_label() {
        let mut app = TodoApp::default();
        let first = app.add_task("Same").unwrap();
        let second = app.add_task("Same").unwrap();
        app.task_mut(second).unwrap().on_toggle_complete(true);

        assert!(app.delete_task(first));
        assert_eq!(app.len(), 1);
        assert_eq!(app.tasks()[0].id(), second);
        assert!(app.tasks()[0].is_completed());
    }

    #[test]
    fn delete_unknown_id_is_ignored() {
        let mut app = TodoApp::default();
        let id = app.add_task("once").unwrap();
        assert!(app.delete_task(id));
        assert!(!app.delete_task(id));
        assert!(app.is_empty());
    }

    #[test]
    fn delete_request_applied_by_before_render() {
        let mut app = TodoApp::default();
        app.add_task("keep");
        let doomed = app.add_task("drop").unwrap();

        app.task(doomed).unwrap().on_delete();
        assert_eq!(app.len(), 2);

        app.before_render();
        assert_eq!(labels(&app), ["keep"]);
    }

    #[test]
    fn deleting_while_editing_is_allowed() {
        let mut app = TodoApp::default();
        let id = app.add_task("draft").unwrap();
        app.task_mut(id).unwrap().on_edit();
        assert!(app.delete_task(id));
        assert!(app.is_empty());
    }

    #[test]
    fn filter_sets_visibility() {
        let mut app = TodoApp::default();
        let done = app.add_task("done").unwrap();
        app.add_task("todo");
        app.task_mut(done).unwrap().on_toggle_complete(true);
        app.before_render();

        assert_eq!(visible_labels(&app), ["done", "todo"]);

        app.set_filter(Filter::Active);
        assert_eq!(visible_labels(&app), ["todo"]);

        app.set_filter(Filter::Completed);
        assert_eq!(visible_labels(&app), ["done"]);
    }

    #[test]
    fn toggled_task_leaves_active_view_after_processing() {
        let mut app = TodoApp::default();
        app.set_filter(Filter::Active);
        let id = app.add_task("task").unwrap();
        assert_eq!(visible_labels(&app), ["task"]);

        app.task_mut(id).unwrap().on_toggle_complete(true);
        assert_eq!(app.process_events(), 1);
        assert!(visible_labels(&app).is_empty());
    }

    #[test]
    fn select_tab_rejects_unknown_index() {
        let mut app = TodoApp::default();
        app.select_tab(2).unwrap();
        assert_eq!(app.filter(), Filter::Completed);

        assert!(matches!(app.select_tab(7), Err(TodoError::InvalidFilter(_))));
        assert_eq!(app.filter(), Filter::Completed);
    }

    #[test]
    fn remaining_count_tracks_every_mutation() {
        let mut app = TodoApp::default();
        let expected = |app: &TodoApp| app.tasks().iter().filter(|t| !t.is_completed()).count();

        let a = app.add_task("a").unwrap();
        let b = app.add_task("b").unwrap();
        let c = app.add_task("c").unwrap();
        assert_eq!(app.remaining_count(), expected(&app));

        app.task_mut(a).unwrap().on_toggle_complete(true);
        assert_eq!(app.remaining_count(), 2);
        app.task_mut(b).unwrap().on_toggle_complete(true);
        app.task_mut(a).unwrap().on_toggle_complete(false);
        assert_eq!(app.remaining_count(), expected(&app));

        app.delete_task(c);
        assert_eq!(app.remaining_count(), 1);
        app.before_render();
        assert_eq!(app.remaining_label(), "1 active task(s) remaining.");
    }

    #[test]
    fn mutations_request_repaint() {
        let repaints = Rc::new(Cell::new(0));
        let counter = repaints.clone();
        let mut app = TodoApp::new(move || counter.set(counter.get() + 1));

        let id = app.add_task("a").unwrap();
        assert_eq!(repaints.get(), 1);

        app.task_mut(id).unwrap().on_edit();
        assert_eq!(repaints.get(), 2);

        app.set_filter(Filter::Active);
        app.delete_task(id);
        assert_eq!(repaints.get(), 4);

        app.add_task("   ");
        assert_eq!(repaints.get(), 4);
    }
}
