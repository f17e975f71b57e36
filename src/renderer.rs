use crate::command::CommandLog;
use crate::element::CursorPreview;
use crate::state::ToolState;
use crate::surface::Surface;

/// Redraw the whole surface from scratch.
///
/// Clears the surface, replays every committed drawable oldest-first (so
/// later marks paint over earlier ones), then draws the cursor preview last
/// so it is always on top. There is no incremental patching and no dirty
/// tracking: the surface content is a pure function of the log, the tool
/// state, and the preview, so calling this twice with unchanged inputs
/// produces identical pixels.
pub fn redraw(
    surface: &mut dyn Surface,
    log: &CommandLog,
    tools: &ToolState,
    cursor: Option<&CursorPreview>,
) {
    surface.clear();

    for drawable in log.committed() {
        drawable.render(surface, tools);
    }

    if let Some(cursor) = cursor {
        cursor.render(surface, tools);
    }
}
