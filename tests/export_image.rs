use egui::pos2;
use sticker_sketchpad::{CommandLog, Drawable, Stroke, Surface, ToolState, export};

fn diagonal_log() -> CommandLog {
    let mut stroke = Stroke::new(pos2(0.0, 0.0), 1.0);
    stroke.push_point(pos2(64.0, 64.0));
    let mut log = CommandLog::new();
    log.commit(Drawable::Stroke(stroke));
    log
}

#[test]
fn export_is_four_times_the_live_surface() {
    let surface = export::render_export(&CommandLog::new(), &ToolState::new());
    assert_eq!(surface.image().width(), 1024);
    assert_eq!(surface.image().height(), 1024);
    // Logical size is still the live canvas.
    assert!((surface.width() - 256.0).abs() < 0.001);
    assert!((surface.height() - 256.0).abs() < 0.001);
}

#[test]
fn export_background_is_opaque_white() {
    let surface = export::render_export(&CommandLog::new(), &ToolState::new());
    assert_eq!(surface.pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(surface.pixel(512, 512).0, [255, 255, 255, 255]);
    assert_eq!(surface.pixel(1023, 1023).0, [255, 255, 255, 255]);
}

#[test]
fn stroke_geometry_is_scaled_four_times() {
    let mut tools = ToolState::new();
    tools.set_hue(0);
    let surface = export::render_export(&diagonal_log(), &tools);

    // Logical (32, 32) sits on the stroke and lands at pixel (128, 128).
    assert_eq!(surface.pixel(128, 128).0, [255, 0, 0, 255]);
    assert_eq!(surface.pixel(200, 200).0, [255, 0, 0, 255]);
    // Logical (100, 100) is past the stroke's end.
    assert_eq!(surface.pixel(400, 400).0, [255, 255, 255, 255]);
    // Off the diagonal entirely.
    assert_eq!(surface.pixel(800, 100).0, [255, 255, 255, 255]);
}

#[test]
fn export_png_round_trips_through_the_codec() {
    let mut tools = ToolState::new();
    tools.set_hue(240);
    let bytes = export::export_png(&diagonal_log(), &tools).expect("png encoding");

    let decoded = image::load_from_memory(&bytes).expect("png decoding").to_rgba8();
    assert_eq!(decoded.width(), 1024);
    assert_eq!(decoded.height(), 1024);
    assert_eq!(decoded.get_pixel(128, 128).0, [0, 0, 255, 255]);
    assert_eq!(decoded.get_pixel(1000, 20).0, [255, 255, 255, 255]);
}

#[test]
fn export_does_not_mutate_the_log() {
    let log = diagonal_log();
    let before = log.clone();
    let _ = export::render_export(&log, &ToolState::new());
    assert_eq!(log, before);
}
