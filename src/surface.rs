use egui::{Align2, Color32, FontId, Pos2, Rect};

/// Side length of the live drawing surface, in logical units.
pub const CANVAS_SIZE: u32 = 256;

/// The 2D raster context the render engine draws against.
///
/// Implementations decide what a logical unit is: the live view maps it to
/// egui points, the export path maps it to a scaled pixel grid. All
/// positions are in logical canvas coordinates with the origin at the
/// top-left.
pub trait Surface {
    /// Logical width of the drawing area.
    fn width(&self) -> f32;

    /// Logical height of the drawing area.
    fn height(&self) -> f32;

    /// Reset the whole surface to its background.
    fn clear(&mut self);

    /// Stroke a polyline with round caps. A single-point polyline must still
    /// leave a visible dot, so that a click without a drag produces a mark.
    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    /// Fill a circle, used for the marker tip indicator.
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Outline a circle, used for the marker tip indicator.
    fn outline_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);

    /// Draw a glyph centered on the anchor. `size` is the nominal glyph size
    /// in logical units.
    fn draw_glyph(&mut self, glyph: char, anchor: Pos2, size: f32);
}

/// Adapts an [`egui::Painter`] to the [`Surface`] boundary for the live view.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    /// `rect` is the screen-space area the canvas occupies; logical canvas
    /// coordinates are offset by its origin.
    pub fn new(painter: &'a egui::Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn width(&self) -> f32 {
        self.rect.width()
    }

    fn height(&self) -> f32 {
        self.rect.height()
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, Color32::WHITE);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        match points {
            [] => {}
            // Zero-length lines are invisible; a lone point becomes a dot.
            [point] => {
                self.painter
                    .circle_filled(self.to_screen(*point), thickness / 2.0, color);
            }
            _ => {
                let screen_points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
                self.painter.add(egui::Shape::line(
                    screen_points,
                    egui::Stroke::new(thickness, color),
                ));
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn outline_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius,
            egui::Stroke::new(width, color),
        );
    }

    fn draw_glyph(&mut self, glyph: char, anchor: Pos2, size: f32) {
        self.painter.text(
            self.to_screen(anchor),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(size),
            Color32::BLACK,
        );
    }
}
