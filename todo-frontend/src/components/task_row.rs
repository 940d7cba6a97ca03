use todo_core::{Task, TaskId, TodoApp, ViewMode};

/// Temp-data key marking a row whose edit field should take focus.
fn focus_id(id: TaskId) -> egui::Id {
    egui::Id::new(("todo-edit-focus", id))
}

/// Scrollable list of the tasks passing the current filter.
///
/// Checkbox and delete clicks are queued by the tasks and applied once the
/// list has been drawn.
pub fn task_list(ui: &mut egui::Ui, app: &mut TodoApp) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for task in app.tasks_mut().iter_mut().filter(|task| task.is_visible()) {
                ui.push_id(task.id(), |ui| task_row(ui, task));
            }
        });

    app.process_events();
}

pub fn task_row(ui: &mut egui::Ui, task: &mut Task) {
    ui.horizontal(|ui| match task.mode() {
        ViewMode::Display => display_view(ui, task),
        ViewMode::Editing => edit_view(ui, task),
    });
}

fn display_view(ui: &mut egui::Ui, task: &mut Task) {
    let mut completed = task.is_completed();
    let text = if completed {
        egui::RichText::new(task.label()).strikethrough()
    } else {
        egui::RichText::new(task.label())
    };
    if ui.checkbox(&mut completed, text).changed() {
        task.on_toggle_complete(completed);
    }

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.small_button("🗑").on_hover_text("Delete To-Do").clicked() {
            task.on_delete();
        }
        if ui.small_button("✏").on_hover_text("Edit To-Do").clicked() {
            task.on_edit();
            ui.data_mut(|d| d.insert_temp(focus_id(task.id()), true));
        }
    });
}

fn edit_view(ui: &mut egui::Ui, task: &mut Task) {
    let mut save = false;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        save |= ui.small_button("💾").on_hover_text("Update To-Do").clicked();
        let response = ui.add(
            egui::TextEdit::singleline(task.edit_buffer_mut()).desired_width(f32::INFINITY),
        );
        if ui.data_mut(|d| d.remove_temp::<bool>(focus_id(task.id()))).is_some() {
            response.request_focus();
        }
        save |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    });

    if save {
        task.commit_edit();
    }
}
