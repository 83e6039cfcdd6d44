use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::canvas::Point;
use crate::document::Document;
use crate::fill::flood_fill;
use crate::input::InputEvent;
use crate::pen::Pen;
use crate::state::GestureState;

/// The drawing tools; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolMode {
    /// Freehand strokes
    #[default]
    Pen,
    /// Flood fill on click
    Bucket,
    /// Rectangle outline dragged from corner to corner
    Rectangle,
}

impl ToolMode {
    pub const ALL: [ToolMode; 3] = [ToolMode::Pen, ToolMode::Bucket, ToolMode::Rectangle];

    pub fn name(&self) -> &'static str {
        match self {
            ToolMode::Pen => "Pen",
            ToolMode::Bucket => "Bucket",
            ToolMode::Rectangle => "Rectangle",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolMode::Pen => "✏",
            ToolMode::Bucket => "🎨",
            ToolMode::Rectangle => "▭",
        }
    }
}

/// Turns pointer gestures into pixel edits and history commits.
///
/// Owns the pen and the active tool. Every handler runs to completion on the
/// calling thread; the return value says whether the canvas changed.
#[derive(Debug, Clone, Default)]
pub struct ToolController {
    mode: ToolMode,
    pen: Pen,
    state: GestureState,
}

impl ToolController {
    pub fn new(mode: ToolMode, pen: Pen) -> Self {
        Self {
            mode,
            pen,
            state: GestureState::Idle,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Makes `mode` the only active tool. A gesture already in progress
    /// finishes with the tool it started with.
    pub fn select_tool(&mut self, mode: ToolMode) {
        if self.mode != mode {
            log::info!("Tool deselected: {}", self.mode.name());
            self.mode = mode;
            log::info!("Tool selected: {}", mode.name());
        }
    }

    /// Sets the stroke width for later gestures; widths below 2 become 2
    pub fn set_pen_width(&mut self, width: u32) -> u32 {
        let applied = self.pen.set_width(width);
        if applied != width {
            log::debug!("Pen width {} clamped to {}", width, applied);
        }
        applied
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        self.pen.set_color(color);
    }

    /// Dispatches one canvas-local pointer event
    pub fn handle_event(&mut self, event: InputEvent, doc: &mut Document) -> bool {
        match event {
            InputEvent::PointerDown { position } => self.on_press(position, doc),
            InputEvent::PointerMove { position } => self.on_move(position, doc),
            InputEvent::PointerUp { .. } => self.on_release(doc),
        }
    }

    /// Starts a gesture at `p`
    pub fn on_press(&mut self, p: Point, doc: &mut Document) -> bool {
        if self.state.is_dragging() {
            // A lost release; close the old gesture before starting over
            log::warn!("Press while dragging, committing previous gesture");
            self.on_release(doc);
        }

        let mode = self.mode;
        let mut original = None;

        match mode {
            ToolMode::Pen => {
                doc.canvas_mut().draw_point(p, &self.pen);
            }
            ToolMode::Bucket => {
                let target = match doc.canvas().pixel_at(p) {
                    Ok(color) => color,
                    Err(err) => {
                        log::debug!("Bucket press ignored: {}", err);
                        return false;
                    }
                };
                if target == self.pen.color() {
                    log::debug!("Bucket press on pen color, nothing to fill");
                    return false;
                }
                if let Err(err) = flood_fill(doc.canvas_mut(), p, target, &self.pen.hairline()) {
                    log::warn!("Flood fill failed: {}", err);
                    return false;
                }
            }
            ToolMode::Rectangle => {
                original = Some(doc.canvas().snapshot());
                doc.canvas_mut().draw_point(p, &self.pen);
            }
        }

        log::debug!("Gesture started: {} at ({}, {})", mode.name(), p.x, p.y);
        self.state = GestureState::Dragging {
            mode,
            start: p,
            original,
        };
        true
    }

    /// Continues the gesture in progress, if any
    pub fn on_move(&mut self, p: Point, doc: &mut Document) -> bool {
        let GestureState::Dragging {
            mode,
            start,
            original,
        } = &mut self.state
        else {
            return false;
        };

        match mode {
            ToolMode::Bucket => false,
            ToolMode::Pen => {
                doc.canvas_mut().draw_line(*start, p, &self.pen);
                *start = p;
                true
            }
            ToolMode::Rectangle => {
                let Some(original) = original else {
                    return false;
                };
                // Start over from the pre-press bitmap so only the latest
                // outline is visible
                let canvas = doc.canvas_mut();
                if let Err(err) = canvas.replace(original.clone()) {
                    log::error!("Rectangle preview failed: {}", err);
                    return false;
                }
                canvas.draw_rect(*start, p, &self.pen);
                true
            }
        }
    }

    /// Ends the gesture and commits the result to history
    pub fn on_release(&mut self, doc: &mut Document) -> bool {
        match std::mem::take(&mut self.state) {
            GestureState::Idle => false,
            GestureState::Dragging { mode, .. } => {
                doc.commit();
                log::debug!("Gesture finished: {}", mode.name());
                true
            }
        }
    }
}
