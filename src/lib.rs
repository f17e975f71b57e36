#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod element;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod state;
pub mod surface;

pub use app::SketchpadApp;
pub use command::CommandLog;
pub use element::{CursorPreview, Drawable, Sticker, Stroke};
pub use error::SketchError;
pub use input::{InputController, InputEvent, Notification, PointerTracker};
pub use raster::RasterSurface;
pub use state::{ToolMode, ToolState};
pub use surface::{PainterSurface, Surface};
