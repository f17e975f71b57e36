use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::state::ToolState;
use crate::surface::Surface;

pub mod common;

mod sticker;
mod stroke;

pub use sticker::Sticker;
pub use stroke::Stroke;

/// A committed drawing operation, replayed in log order on every redraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    pub fn render(&self, surface: &mut dyn Surface, tools: &ToolState) {
        match self {
            Drawable::Stroke(stroke) => stroke.render(surface, tools),
            Drawable::Sticker(sticker) => sticker.render(surface),
        }
    }
}

/// The tool indicator drawn at the current pointer position.
///
/// Never committed to the log; the render engine draws it after every
/// committed drawable so it stays on top, and it is dropped entirely when the
/// pointer leaves the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPreview {
    pub pos: Pos2,
    /// `Some` previews the selected sticker glyph, `None` the marker tip.
    pub glyph: Option<char>,
}

impl CursorPreview {
    pub fn render(&self, surface: &mut dyn Surface, tools: &ToolState) {
        match self.glyph {
            Some(glyph) => surface.draw_glyph(glyph, self.pos, common::STICKER_FONT_SIZE),
            None => {
                let color = common::hue_color(tools.hue());
                let radius = tools.marker_size() / 2.0;
                surface.fill_circle(self.pos, radius, color);
                surface.outline_circle(self.pos, radius, common::PREVIEW_OUTLINE_WIDTH, color);
            }
        }
    }
}
