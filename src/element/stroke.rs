use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::element::common;
use crate::state::ToolState;
use crate::surface::Surface;

/// A freehand marker stroke: the points laid down while the pointer was held,
/// plus the marker size captured when the stroke began.
///
/// Note that the stroke stores no color. Strokes read the session hue at
/// render time, so moving the hue slider recolors the whole drawing at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
}

impl Stroke {
    /// Create a one-point stroke at the pointer-down position.
    pub fn new(start: Pos2, thickness: f32) -> Self {
        Self {
            points: vec![start],
            thickness,
        }
    }

    /// Extend the stroke while the pointer is dragged.
    pub fn push_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn render(&self, surface: &mut dyn Surface, tools: &ToolState) {
        surface.stroke_polyline(&self.points, self.thickness, common::hue_color(tools.hue()));
    }
}
