use std::path::PathBuf;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::pen::{DEFAULT_PEN_WIDTH, Pen};
use crate::tools::{ToolController, ToolMode};

/// User configuration persisted between runs through eframe storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintSettings {
    pub tool: ToolMode,
    pub pen_width: u32,
    pub pen_color: [u8; 4],
    /// Canvas size when the monitor size is not known at startup
    pub default_canvas_size: [u32; 2],
    /// Pre-fills the save prompt; the working directory's image.png when unset
    pub last_save_path: Option<PathBuf>,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            tool: ToolMode::Pen,
            pen_width: DEFAULT_PEN_WIDTH,
            pen_color: Color32::BLACK.to_array(),
            default_canvas_size: [1920, 1080],
            last_save_path: None,
        }
    }
}

impl PaintSettings {
    pub fn pen_color(&self) -> Color32 {
        let [r, g, b, a] = self.pen_color;
        Color32::from_rgba_premultiplied(r, g, b, a)
    }

    /// A controller configured from these settings. Stored widths below the
    /// minimum are clamped again here.
    pub fn tool_controller(&self) -> ToolController {
        ToolController::new(self.tool, Pen::new(self.pen_color(), self.pen_width))
    }

    /// Copies the user-facing state back out of a controller
    pub fn capture(&mut self, tools: &ToolController) {
        self.tool = tools.mode();
        self.pen_width = tools.pen().width();
        self.pen_color = tools.pen().color().to_array();
    }
}
