use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use egui::{Color32, Pos2};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::surface::Surface;

/// Distance between disc stamps along a stroked segment, in pixels.
const STAMP_SPACING: f32 = 0.5;

/// Floor on the stamp radius so hairline strokes still hit pixel centers.
const MIN_STAMP_RADIUS: f32 = 0.75;

/// A CPU-side [`Surface`]: an RGBA pixel buffer with an optional uniform
/// scale transform, used by the export pipeline and by pixel-level tests.
///
/// Strokes are rasterized by stamping filled discs along each segment, which
/// gives round caps and joins and makes one-point strokes visible. No
/// anti-aliasing is applied.
pub struct RasterSurface {
    pixels: RgbaImage,
    background: Rgba<u8>,
    scale: f32,
    font: Option<FontArc>,
}

impl RasterSurface {
    /// An unscaled surface of `width` x `height` pixels on a white
    /// background.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_scale(width, height, 1.0)
    }

    /// A surface whose logical coordinates are multiplied by `scale` before
    /// they land on the pixel grid. Stroke thickness and glyph sizes scale
    /// with it.
    pub fn with_scale(width: u32, height: u32, scale: f32) -> Self {
        let background = Rgba([255, 255, 255, 255]);
        Self {
            pixels: RgbaImage::from_pixel(width, height, background),
            background,
            scale,
            font: None,
        }
    }

    /// Provide the font used to rasterize sticker glyphs. Without one,
    /// glyphs are skipped.
    pub fn set_font(&mut self, font: FontArc) {
        self.font = Some(font);
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Encode the current pixel content as a PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn put(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.pixels.width() && (y as u32) < self.pixels.height()
        {
            self.pixels.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Fill every pixel whose center lies within `radius` of `(cx, cy)`.
    /// Coordinates are already in pixel space.
    fn stamp_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
        let r = radius.max(MIN_STAMP_RADIUS);
        let min_x = (cx - r).floor() as i64;
        let max_x = (cx + r).ceil() as i64;
        let min_y = (cy - r).floor() as i64;
        let max_y = (cy + r).ceil() as i64;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = (x as f32 + 0.5) - cx;
                let dy = (y as f32 + 0.5) - cy;
                if dx * dx + dy * dy <= r * r {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn stamp_ring(&mut self, cx: f32, cy: f32, radius: f32, half_width: f32, color: Rgba<u8>) {
        let outer = radius + half_width;
        let min_x = (cx - outer).floor() as i64;
        let max_x = (cx + outer).ceil() as i64;
        let min_y = (cy - outer).floor() as i64;
        let max_y = (cy + outer).ceil() as i64;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = (x as f32 + 0.5) - cx;
                let dy = (y as f32 + 0.5) - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if (dist - radius).abs() <= half_width {
                    self.put(x, y, color);
                }
            }
        }
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), color.a()])
}

impl Surface for RasterSurface {
    fn width(&self) -> f32 {
        self.pixels.width() as f32 / self.scale
    }

    fn height(&self) -> f32 {
        self.pixels.height() as f32 / self.scale
    }

    fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = self.background;
        }
    }

    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        if points.is_empty() {
            return;
        }
        let color = to_rgba(color);
        let radius = (thickness * self.scale) / 2.0;
        let scaled: Vec<(f32, f32)> = points
            .iter()
            .map(|p| (p.x * self.scale, p.y * self.scale))
            .collect();

        if let [(x, y)] = scaled[..] {
            self.stamp_disc(x, y, radius, color);
            return;
        }
        for pair in scaled.windows(2) {
            let (ax, ay) = pair[0];
            let (bx, by) = pair[1];
            let length = (bx - ax).hypot(by - ay);
            let steps = (length / STAMP_SPACING).ceil().max(1.0) as u32;
            for i in 0..=steps {
                let t = i as f32 / steps as f32;
                self.stamp_disc(ax + (bx - ax) * t, ay + (by - ay) * t, radius, color);
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.stamp_disc(
            center.x * self.scale,
            center.y * self.scale,
            radius * self.scale,
            to_rgba(color),
        );
    }

    fn outline_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.stamp_ring(
            center.x * self.scale,
            center.y * self.scale,
            radius * self.scale,
            (width * self.scale) / 2.0,
            to_rgba(color),
        );
    }

    fn draw_glyph(&mut self, glyph: char, anchor: Pos2, size: f32) {
        let Some(font) = self.font.clone() else {
            log::debug!("no raster font loaded; skipping glyph {glyph:?}");
            return;
        };

        let glyph_id = font.glyph_id(glyph);
        if glyph_id.0 == 0 {
            log::debug!("font has no glyph for {glyph:?}; skipping");
            return;
        }

        let scale = PxScale::from(size * self.scale);
        let scaled_font = font.as_scaled(scale);
        let advance = scaled_font.h_advance(glyph_id);
        // Center horizontally on the anchor; put the vertical midpoint of the
        // em box (between ascent and descent) on the anchor as well.
        let left = anchor.x * self.scale - advance / 2.0;
        let baseline =
            anchor.y * self.scale + (scaled_font.ascent() + scaled_font.descent()) / 2.0;

        let positioned = glyph_id.with_scale_and_position(scale, ab_glyph::point(left, baseline));
        let Some(outlined) = font.outline_glyph(positioned) else {
            log::debug!("glyph {glyph:?} has no outline; skipping");
            return;
        };

        let bounds = outlined.px_bounds();
        let ink = Rgba([0, 0, 0, 255]);
        let mut stamped = Vec::new();
        outlined.draw(|gx, gy, coverage| {
            if coverage > 0.5 {
                stamped.push((bounds.min.x as i64 + gx as i64, bounds.min.y as i64 + gy as i64));
            }
        });
        for (x, y) in stamped {
            self.put(x, y, ink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn clear_resets_to_background() {
        let mut surface = RasterSurface::new(8, 8);
        surface.stroke_polyline(&[pos2(4.0, 4.0)], 4.0, Color32::RED);
        assert_ne!(surface.pixel(4, 4), Rgba([255, 255, 255, 255]));
        surface.clear();
        assert_eq!(surface.pixel(4, 4), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn single_point_stroke_is_visible() {
        let mut surface = RasterSurface::new(16, 16);
        surface.stroke_polyline(&[pos2(8.0, 8.0)], 1.0, Color32::BLACK);
        assert_eq!(surface.pixel(8, 8), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn disc_stays_within_radius() {
        let mut surface = RasterSurface::new(32, 32);
        surface.fill_circle(pos2(16.0, 16.0), 4.0, Color32::BLACK);
        assert_eq!(surface.pixel(16, 16), Rgba([0, 0, 0, 255]));
        // Well outside the disc.
        assert_eq!(surface.pixel(16, 24), Rgba([255, 255, 255, 255]));
        assert_eq!(surface.pixel(26, 16), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn scale_multiplies_coordinates() {
        let mut surface = RasterSurface::with_scale(64, 64, 4.0);
        surface.stroke_polyline(&[pos2(8.0, 8.0)], 2.0, Color32::BLACK);
        // Logical (8, 8) lands at pixel (32, 32).
        assert_eq!(surface.pixel(32, 32), Rgba([0, 0, 0, 255]));
        assert_eq!(surface.pixel(8, 8), Rgba([255, 255, 255, 255]));
    }
}
