use crate::input::{InputController, PointerTracker};
use crate::panels;

/// The eframe shell around the drawing core.
///
/// All drawing semantics live in the [`InputController`]; this type only
/// wires egui widgets to the controller's operations and redraws when the
/// controller says something changed.
pub struct SketchpadApp {
    pub(crate) controller: InputController,
    pub(crate) tracker: PointerTracker,
    pub(crate) sticker_input: String,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self {
            controller: InputController::new(),
            tracker: PointerTracker::new(),
            sticker_input: String::new(),
        }
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Modal window standing in for the original's blocking prompt: the
    /// controller stays in its awaiting state until OK or Cancel resolves it.
    fn sticker_prompt(&mut self, ctx: &egui::Context) {
        egui::Window::new("Custom Sticker")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Enter an emoji or a decimal code point:");
                ui.text_edit_singleline(&mut self.sticker_input);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        let input = std::mem::take(&mut self.sticker_input);
                        self.controller.resolve_custom_sticker(Some(&input));
                    }
                    if ui.button("Cancel").clicked() {
                        self.sticker_input.clear();
                        self.controller.resolve_custom_sticker(None);
                    }
                });
            });
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::controls_panel(self, ctx);
        panels::canvas_panel(self, ctx);

        if self.controller.awaiting_custom_sticker() {
            self.sticker_prompt(ctx);
        }

        // Notifications are delivered synchronously within the frame that
        // caused them; a repaint makes the redraw visible immediately.
        if !self.controller.take_notifications().is_empty() {
            ctx.request_repaint();
        }
    }
}
