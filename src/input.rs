use egui::Pos2;

use crate::command::CommandLog;
use crate::element::{CursorPreview, Drawable, Sticker, Stroke};
use crate::state::{ToolMode, ToolState};

/// Pointer events in canvas-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the canvas.
    PointerDown { pos: Pos2 },
    /// Pointer moved over the canvas, with or without the button held.
    PointerMove { pos: Pos2, primary_held: bool },
    /// Primary button released.
    PointerUp,
    /// Pointer left the canvas bounds.
    PointerLeave,
}

/// Change notifications emitted by the controller, drained by the shell.
///
/// `DrawingChanged` means the command log mutated; `ToolMoved` means the
/// cursor preview or tool state did. Both ask for a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    DrawingChanged,
    ToolMoved,
}

/// Which kind of drawable the current press is extending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveDrawable {
    Stroke,
    Sticker,
}

/// Translates pointer and button input into command-log and tool-state
/// mutations.
///
/// Owns the whole drawing session: the log, the tool state, and the cursor
/// preview. Every mutation pushes a [`Notification`]; the shell drains them
/// with [`take_notifications`](Self::take_notifications) and redraws. No-ops
/// (undo on an empty log, redo with nothing undone) emit nothing.
#[derive(Debug, Default)]
pub struct InputController {
    log: CommandLog,
    tools: ToolState,
    cursor: Option<CursorPreview>,
    active: Option<ActiveDrawable>,
    awaiting_sticker: bool,
    notifications: Vec<Notification>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn cursor(&self) -> Option<&CursorPreview> {
        self.cursor.as_ref()
    }

    /// Drain the notifications accumulated since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        if self.awaiting_sticker {
            log::debug!("custom sticker prompt open; dropping {event:?}");
            return;
        }
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos),
            InputEvent::PointerMove { pos, primary_held } => self.pointer_move(pos, primary_held),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    /// Begin a stroke or sticker placement and commit it right away, so a
    /// click without a drag already leaves a mark. New commits invalidate
    /// the redo stack.
    fn pointer_down(&mut self, pos: Pos2) {
        match self.tools.mode() {
            ToolMode::Marker => {
                self.log
                    .commit(Drawable::Stroke(Stroke::new(pos, self.tools.marker_size())));
                self.active = Some(ActiveDrawable::Stroke);
            }
            ToolMode::Sticker => {
                let Some(glyph) = self.tools.sticker() else {
                    log::debug!("sticker mode without a selected glyph; ignoring press");
                    return;
                };
                self.log.commit(Drawable::Sticker(Sticker::new(pos, glyph)));
                self.active = Some(ActiveDrawable::Sticker);
            }
        }
        self.notify(Notification::DrawingChanged);
    }

    fn pointer_move(&mut self, pos: Pos2, primary_held: bool) {
        let glyph = match self.tools.mode() {
            ToolMode::Sticker => self.tools.sticker(),
            ToolMode::Marker => None,
        };
        self.cursor = Some(CursorPreview { pos, glyph });
        self.notify(Notification::ToolMoved);

        if !primary_held {
            return;
        }
        let Some(kind) = self.active else {
            // Button was pressed outside the canvas; nothing to extend.
            return;
        };
        match (kind, self.log.last_mut()) {
            (ActiveDrawable::Stroke, Some(Drawable::Stroke(stroke))) => {
                stroke.push_point(pos);
                self.notify(Notification::DrawingChanged);
            }
            (ActiveDrawable::Sticker, Some(Drawable::Sticker(sticker))) => {
                sticker.move_to(pos);
                self.notify(Notification::DrawingChanged);
            }
            _ => {
                // The log changed under the press (e.g. a clear); drop the
                // stale handle rather than extend the wrong drawable.
                self.active = None;
            }
        }
    }

    fn pointer_up(&mut self) {
        self.active = None;
        self.notify(Notification::DrawingChanged);
    }

    fn pointer_leave(&mut self) {
        self.cursor = None;
        self.notify(Notification::ToolMoved);
    }

    pub fn clear(&mut self) {
        self.log.clear();
        self.notify(Notification::DrawingChanged);
    }

    pub fn undo(&mut self) {
        if self.log.undo() {
            self.notify(Notification::DrawingChanged);
        }
    }

    pub fn redo(&mut self) {
        if self.log.redo() {
            self.notify(Notification::DrawingChanged);
        }
    }

    pub fn select_thin_marker(&mut self) {
        if self.awaiting_sticker {
            return;
        }
        self.tools.select_thin_marker();
        self.notify(Notification::ToolMoved);
    }

    pub fn select_thick_marker(&mut self) {
        if self.awaiting_sticker {
            return;
        }
        self.tools.select_thick_marker();
        self.notify(Notification::ToolMoved);
    }

    pub fn select_sticker(&mut self, glyph: char) {
        if self.awaiting_sticker {
            return;
        }
        self.tools.select_sticker(glyph);
        self.notify(Notification::ToolMoved);
    }

    pub fn set_hue(&mut self, hue: u16) {
        self.tools.set_hue(hue);
        self.notify(Notification::ToolMoved);
    }

    /// Open the custom sticker request. Pointer events and tool selections
    /// are suspended until [`resolve_custom_sticker`](Self::resolve_custom_sticker)
    /// is called.
    pub fn request_custom_sticker(&mut self) {
        self.awaiting_sticker = true;
    }

    pub fn awaiting_custom_sticker(&self) -> bool {
        self.awaiting_sticker
    }

    /// Close the custom sticker request.
    ///
    /// `None` means the user cancelled. Input may be either a decimal
    /// Unicode scalar value ("128077") or the character itself ("👍").
    /// Anything else is rejected with a diagnostic and the previous tool
    /// selection stays in place.
    pub fn resolve_custom_sticker(&mut self, response: Option<&str>) {
        self.awaiting_sticker = false;
        let Some(input) = response else {
            log::warn!("custom sticker prompt cancelled; keeping previous tool");
            return;
        };
        match parse_sticker(input) {
            Some(glyph) => {
                self.tools.select_sticker(glyph);
                self.notify(Notification::ToolMoved);
            }
            None => {
                log::warn!("invalid custom sticker input {input:?}; keeping previous tool");
            }
        }
    }
}

/// Parse custom sticker input: a lone character, or a decimal code point.
fn parse_sticker(input: &str) -> Option<char> {
    let input = input.trim();
    let mut chars = input.chars();
    if let (Some(glyph), None) = (chars.next(), chars.next()) {
        if !glyph.is_ascii_digit() {
            return Some(glyph);
        }
    }
    input.parse::<u32>().ok().and_then(char::from_u32)
}

/// Folds per-frame pointer state into the discrete event stream the
/// controller consumes, tracking enter/leave against the canvas bounds.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_pos: Option<Pos2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `hover` is the canvas-relative pointer position, or `None` when the
    /// pointer is off the canvas. `pressed`/`held`/`released` describe the
    /// primary button this frame.
    pub fn update(
        &mut self,
        hover: Option<Pos2>,
        pressed: bool,
        held: bool,
        released: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        match hover {
            Some(pos) => {
                if self.last_pos != Some(pos) {
                    events.push(InputEvent::PointerMove {
                        pos,
                        primary_held: held && !pressed,
                    });
                }
                if pressed {
                    events.push(InputEvent::PointerDown { pos });
                }
                if released {
                    events.push(InputEvent::PointerUp);
                }
                self.last_pos = Some(pos);
            }
            None => {
                if self.last_pos.take().is_some() {
                    if released {
                        events.push(InputEvent::PointerUp);
                    }
                    events.push(InputEvent::PointerLeave);
                }
            }
        }
        events
    }
}
