use egui::Color32;

/// Smallest width a user can configure
pub const MIN_PEN_WIDTH: u32 = 2;

/// Largest width a pen accepts; the round footprint is width² pixels
pub const MAX_PEN_WIDTH: u32 = 200;

/// Width used when nothing else was configured
pub const DEFAULT_PEN_WIDTH: u32 = 3;

/// How the ends of a stroke are finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenCap {
    #[default]
    Round,
}

/// The pen every drawing tool paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    color: Color32,
    width: u32,
    cap: PenCap,
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color32::BLACK, DEFAULT_PEN_WIDTH)
    }
}

impl Pen {
    /// Create a pen; the width is clamped to [`MIN_PEN_WIDTH`]..=[`MAX_PEN_WIDTH`]
    pub fn new(color: Color32, width: u32) -> Self {
        Self {
            color,
            width: width.clamp(MIN_PEN_WIDTH, MAX_PEN_WIDTH),
            cap: PenCap::Round,
        }
    }

    /// A one pixel copy of this pen, used by the bucket fill
    pub fn hairline(&self) -> Self {
        Self {
            width: 1,
            ..*self
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the width actually applied after clamping
    pub fn set_width(&mut self, width: u32) -> u32 {
        self.width = width.clamp(MIN_PEN_WIDTH, MAX_PEN_WIDTH);
        self.width
    }

    pub fn cap(&self) -> PenCap {
        self.cap
    }
}
