use std::path::Path;

use ab_glyph::FontArc;

use crate::command::CommandLog;
use crate::error::SketchError;
use crate::raster::RasterSurface;
use crate::renderer;
use crate::state::ToolState;
use crate::surface::CANVAS_SIZE;

/// Upscale factor between the live surface and the exported image.
pub const EXPORT_SCALE: f32 = 4.0;

/// Fixed filename the shell writes exports to.
pub const EXPORT_FILENAME: &str = "sketchpad.png";

/// Replay the committed log onto a fresh high-resolution surface.
///
/// The surface is `EXPORT_SCALE` times the live canvas on an opaque white
/// background. The cursor preview is never part of an export, and neither
/// the log nor the live surface is touched.
pub fn render_export(log: &CommandLog, tools: &ToolState) -> RasterSurface {
    let side = (CANVAS_SIZE as f32 * EXPORT_SCALE) as u32;
    let mut surface = RasterSurface::with_scale(side, side, EXPORT_SCALE);
    if let Some(font) = glyph_font() {
        surface.set_font(font);
    }
    renderer::redraw(&mut surface, log, tools, None);
    surface
}

/// Render the drawing at export resolution and encode it as PNG bytes.
pub fn export_png(log: &CommandLog, tools: &ToolState) -> Result<Vec<u8>, SketchError> {
    Ok(render_export(log, tools).encode_png()?)
}

/// Render, encode, and write the drawing to `path`.
pub fn save_png(log: &CommandLog, tools: &ToolState, path: &Path) -> Result<(), SketchError> {
    let bytes = export_png(log, tools)?;
    std::fs::write(path, bytes).map_err(|source| SketchError::Write {
        path: path.to_owned(),
        source,
    })?;
    log::info!("exported drawing to {}", path.display());
    Ok(())
}

/// Pull a glyph-capable font out of egui's bundled font data so exported
/// stickers match what the live view shows. Falls back through the bundle;
/// returns `None` (and exports skip glyphs) if nothing parses.
fn glyph_font() -> Option<FontArc> {
    let definitions = egui::FontDefinitions::default();
    for name in ["NotoEmoji-Regular", "emoji-icon-font", "Ubuntu-Light"] {
        let Some(data) = definitions.font_data.get(name) else {
            continue;
        };
        match FontArc::try_from_vec(data.font.to_vec()) {
            Ok(font) => return Some(font),
            Err(err) => log::warn!("bundled font {name} failed to parse: {err}"),
        }
    }
    log::warn!("no usable glyph font; stickers will be missing from exports");
    None
}
