use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::element::common;
use crate::surface::Surface;

/// An emoji sticker stamped onto the canvas.
///
/// The glyph is fixed at creation; the anchor follows the pointer until the
/// button is released.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    anchor: Pos2,
    glyph: char,
}

impl Sticker {
    pub fn new(anchor: Pos2, glyph: char) -> Self {
        Self { anchor, glyph }
    }

    /// Reposition the sticker while its placement drag is still active. The
    /// anchor is overwritten, not accumulated.
    pub fn move_to(&mut self, anchor: Pos2) {
        self.anchor = anchor;
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_glyph(self.glyph, self.anchor, common::STICKER_FONT_SIZE);
    }
}
