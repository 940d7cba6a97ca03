/// Asks the GUI to draw another frame.
///
/// Requests are idempotent: asking twice before the next frame draws once.
/// Any `Fn()` closure is a `Repaint`, so an egui shell can pass
/// `move || ctx.request_repaint()`.
pub trait Repaint {
    fn request_repaint(&self);
}

impl<F: Fn()> Repaint for F {
    fn request_repaint(&self) {
        self()
    }
}
