use std::path::Path;

use egui::Color32;

use crate::canvas::PixelCanvas;
use crate::error::CanvasResult;
use crate::history::HistoryStack;
use crate::io;

/// The one editable picture: the live canvas plus its undo history
#[derive(Debug, Clone)]
pub struct Document {
    canvas: PixelCanvas,
    history: HistoryStack,
    /// Bumped on every mutable access so viewers know to refresh
    revision: u64,
}

impl Document {
    /// A blank white document; the blank canvas is the history baseline
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        let canvas = PixelCanvas::new(width, height)?;
        let history = HistoryStack::new(canvas.snapshot());
        Ok(Self {
            canvas,
            history,
            revision: 0,
        })
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut PixelCanvas {
        self.revision += 1;
        &mut self.canvas
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records the live bitmap as a new history entry
    pub fn commit(&mut self) {
        self.history.push(self.canvas.snapshot());
        log::debug!("Committed snapshot, history size {}", self.history.len());
    }

    /// Restores the previous snapshot. Returns false when already at the oldest.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            log::debug!("Nothing to undo");
            return false;
        }
        let restored = self.history.undo().clone();
        // Snapshots come from this canvas, so the size always matches
        if let Err(err) = self.canvas_mut().replace(restored) {
            log::error!("Undo failed: {}", err);
            return false;
        }
        log::info!("Undo, history size {}", self.history.len());
        true
    }

    /// Draws an image file over the canvas at the origin without resizing
    /// it, then records the result. On failure nothing changes.
    pub fn open(&mut self, path: &Path) -> CanvasResult<()> {
        let image = io::load(path)?;
        if image.dimensions() != self.canvas.size() {
            log::info!(
                "Loaded image is {}x{}, canvas stays {}x{}",
                image.width(),
                image.height(),
                self.canvas.width(),
                self.canvas.height()
            );
        }
        self.canvas_mut().composite(&image);
        self.commit();
        Ok(())
    }

    /// Wipes the canvas to white and records it, so clearing can be undone
    pub fn clear(&mut self) {
        self.canvas_mut().fill_with(Color32::WHITE);
        self.commit();
        log::info!("Canvas cleared");
    }

    /// Writes the live bitmap to `path` as PNG
    pub fn save(&self, path: &Path) -> CanvasResult<()> {
        io::save(&self.canvas.export(), path)
    }
}
