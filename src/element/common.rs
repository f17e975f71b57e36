use egui::Color32;

/// Nominal glyph size for stickers, in logical canvas units.
pub const STICKER_FONT_SIZE: f32 = 25.0;

/// Outline width of the marker tip indicator.
pub const PREVIEW_OUTLINE_WIDTH: f32 = 1.5;

/// Resolve the session hue to a stroke color.
///
/// `Some(h)` maps to the fully saturated, half-lightness color for that hue
/// (the hsl(h, 100%, 50%) wheel). `None` means the slider has never been
/// touched and strokes take the surface's default ink, black.
pub fn hue_color(hue: Option<u16>) -> Color32 {
    let Some(hue) = hue else {
        return Color32::BLACK;
    };

    let h = f32::from(hue.min(360)) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        // 300..=360, where 360 wraps back around to pure red
        _ => (1.0, 0.0, x),
    };
    Color32::from_rgb(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_hue_is_black() {
        assert_eq!(hue_color(None), Color32::BLACK);
    }

    #[test]
    fn primary_hues() {
        assert_eq!(hue_color(Some(0)), Color32::from_rgb(255, 0, 0));
        assert_eq!(hue_color(Some(120)), Color32::from_rgb(0, 255, 0));
        assert_eq!(hue_color(Some(240)), Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn hue_wraps_at_360() {
        assert_eq!(hue_color(Some(360)), hue_color(Some(0)));
    }
}
