use todo_core::TodoApp;

/// Remaining-count label and the "Clear Completed" button.
pub fn footer(ui: &mut egui::Ui, app: &mut TodoApp) {
    ui.horizontal(|ui| {
        ui.label(app.remaining_label());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear Completed").clicked() {
                let removed = app.clear_completed();
                log::debug!("cleared {removed} completed task(s)");
            }
        });
    });
}
