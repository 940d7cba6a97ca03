use todo_core::{PageConfig, TodoApp};

use crate::components::{filter_tabs, footer, header, task_input, task_list};

/// The todo window: a [`TodoApp`] view-model drawn with egui.
pub struct TodoGui {
    app: TodoApp,
    config: PageConfig,
}

impl TodoGui {
    pub fn new(ctx: &egui::Context, config: PageConfig) -> Self {
        ctx.set_theme(egui::Theme::Light);
        let repaint_ctx = ctx.clone();
        Self {
            app: TodoApp::new(move || repaint_ctx.request_repaint()),
            config,
        }
    }

    pub fn app(&self) -> &TodoApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut TodoApp {
        &mut self.app
    }

    /// Draw one frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.app.before_render();

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            footer(ui, &mut self.app);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_max_width(self.config.width);

            header(ui, &self.config.title);
            ui.add_space(8.0);

            task_input(ui, &mut self.app, &self.config.input_hint);
            ui.add_space(16.0);

            filter_tabs(ui, &mut self.app);
            ui.separator();

            task_list(ui, &mut self.app);
        });
    }
}

#[cfg(any(feature = "hydrate", feature = "native"))]
impl eframe::App for TodoGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
