use std::path::Path;

use crate::app::SketchpadApp;
use crate::export;
use crate::state::{THICK_MARKER_SIZE, THIN_MARKER_SIZE, ToolMode};

/// The emoji offered as one-click sticker presets.
const STICKER_PRESETS: [char; 3] = ['😋', '✌', '👍'];

pub fn controls_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("controls_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Commands");
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.controller.clear();
                }
                let can_undo = app.controller.log().can_undo();
                let can_redo = app.controller.log().can_redo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.controller.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.controller.redo();
                }
            });
            ui.separator();

            ui.heading("Tools");
            let mode = app.controller.tools().mode();
            let marker_size = app.controller.tools().marker_size();
            let thin_selected = mode == ToolMode::Marker && marker_size == THIN_MARKER_SIZE;
            let thick_selected = mode == ToolMode::Marker && marker_size == THICK_MARKER_SIZE;
            if ui.selectable_label(thin_selected, "Thin Marker").clicked() {
                app.controller.select_thin_marker();
            }
            if ui.selectable_label(thick_selected, "Thick Marker").clicked() {
                app.controller.select_thick_marker();
            }
            ui.separator();

            ui.heading("Stickers");
            let selected_sticker = app.controller.tools().sticker();
            ui.horizontal(|ui| {
                for glyph in STICKER_PRESETS {
                    let selected = mode == ToolMode::Sticker && selected_sticker == Some(glyph);
                    if ui.selectable_label(selected, glyph.to_string()).clicked() {
                        app.controller.select_sticker(glyph);
                    }
                }
            });
            if ui.button("Custom").clicked() {
                app.controller.request_custom_sticker();
            }
            ui.separator();

            let mut hue = app.controller.tools().hue().unwrap_or(0);
            if ui
                .add(egui::Slider::new(&mut hue, 0..=360).text("Hue"))
                .changed()
            {
                app.controller.set_hue(hue);
            }
            ui.separator();

            if ui.button("Export").clicked() {
                let result = export::save_png(
                    app.controller.log(),
                    app.controller.tools(),
                    Path::new(export::EXPORT_FILENAME),
                );
                if let Err(err) = result {
                    log::error!("export failed: {err}");
                }
            }
        });
}
