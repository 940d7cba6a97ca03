use todo_core::{Filter, TodoApp};

/// Tab row selecting the status filter.
pub fn filter_tabs(ui: &mut egui::Ui, app: &mut TodoApp) {
    let current = app.filter().tab_index();
    let mut selected = current;
    ui.horizontal(|ui| {
        for filter in Filter::TABS {
            ui.selectable_value(&mut selected, filter.tab_index(), filter.label());
        }
    });

    if selected != current {
        if let Err(err) = app.select_tab(selected) {
            log::error!("{err}");
        }
    }
}
