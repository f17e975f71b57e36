use egui::PointerButton;

use crate::app::SketchpadApp;
use crate::renderer;
use crate::surface::{CANVAS_SIZE, PainterSurface};

pub fn canvas_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sticker Sketchpad");

        let side = CANVAS_SIZE as f32;
        let (response, painter) =
            ui.allocate_painter(egui::Vec2::splat(side), egui::Sense::click_and_drag());
        let rect = response.rect;

        // Canvas-relative pointer position, present only while hovering.
        let hover = response.hover_pos().map(|pos| (pos - rect.min).to_pos2());
        let (pressed, held, released) = ctx.input(|input| {
            (
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_down(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });

        let events = app.tracker.update(hover, pressed, held, released);
        for event in events {
            app.controller.handle_event(event);
        }

        let painter = painter.with_clip_rect(rect);
        let mut surface = PainterSurface::new(&painter, rect);
        renderer::redraw(
            &mut surface,
            app.controller.log(),
            app.controller.tools(),
            app.controller.cursor(),
        );
    });
}
