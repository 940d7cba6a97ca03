pub fn header(ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.heading(title);
    });
}
