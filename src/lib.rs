#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod document;
pub mod error;
pub mod fill;
pub mod history;
pub mod input;
pub mod io;
pub mod panels;
pub mod pen;
pub mod renderer;
pub mod settings;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{Bitmap, PixelCanvas, Point};
pub use document::Document;
pub use error::{CanvasError, CanvasResult};
pub use fill::flood_fill;
pub use history::{HISTORY_CAP, HistoryStack};
pub use input::{InputEvent, InputHandler};
pub use pen::Pen;
pub use renderer::Renderer;
pub use settings::PaintSettings;
pub use state::GestureState;
pub use tools::{ToolController, ToolMode};
