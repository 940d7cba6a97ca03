use todo_core::TodoApp;

/// New-task field plus add button. Enter in the field also adds.
pub fn task_input(ui: &mut egui::Ui, app: &mut TodoApp, hint: &str) {
    ui.horizontal(|ui| {
        let width = (ui.available_width() - 40.0).max(0.0);
        let text_edit = ui.add(
            egui::TextEdit::singleline(app.input_mut())
                .hint_text(hint)
                .desired_width(width),
        );
        if ui.button("+").on_hover_text("Add To-Do").clicked()
            || text_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
        {
            app.submit_input();
            text_edit.request_focus();
        }
    });
}
