use std::path::Path;

use crate::document::Document;
use crate::error::CanvasResult;
use crate::input::InputHandler;
use crate::io;
use crate::panels::{self, Dialog};
use crate::renderer::Renderer;
use crate::settings::PaintSettings;
use crate::tools::ToolController;

/// The eframe shell around the document: menus, dialogs and the canvas view.
pub struct PaintApp {
    document: Document,
    tools: ToolController,
    settings: PaintSettings,
    renderer: Renderer,
    input: InputHandler,
    pub(crate) dialog: Option<Dialog>,
    /// Set once the user said yes, so the next close request goes through
    quit_confirmed: bool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> CanvasResult<Self> {
        let settings: PaintSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        // The canvas covers the whole display, like a sheet of paper under the window
        let monitor = cc.egui_ctx.input(|i| i.viewport().monitor_size);
        let (width, height) = match monitor {
            Some(size) if size.x >= 1.0 && size.y >= 1.0 => (size.x as u32, size.y as u32),
            _ => {
                let [w, h] = settings.default_canvas_size;
                (w.max(1), h.max(1))
            }
        };
        log::info!("Creating {}x{} canvas", width, height);

        Ok(Self::with_document(Document::new(width, height)?, settings))
    }

    /// Builds the shell around an existing document
    pub fn with_document(document: Document, settings: PaintSettings) -> Self {
        Self {
            document,
            tools: settings.tool_controller(),
            settings,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            dialog: None,
            quit_confirmed: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolController {
        &mut self.tools
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn undo(&mut self) {
        if self.tools.is_dragging() {
            log::debug!("Undo ignored while a gesture is in progress");
            return;
        }
        self.document.undo();
    }

    /// Starts over on a blank sheet; the old picture stays one undo away
    pub fn new_canvas(&mut self) {
        if self.tools.is_dragging() {
            log::debug!("New canvas ignored while a gesture is in progress");
            return;
        }
        self.document.clear();
    }

    pub fn prompt_open(&mut self) {
        self.dialog = Some(Dialog::OpenFile {
            path: String::new(),
        });
    }

    /// Opens the save prompt, pre-filled with the last path saved to, or
    /// `image.png` in the working directory before the first save
    pub fn prompt_save(&mut self) {
        let path = self
            .settings
            .last_save_path
            .clone()
            .unwrap_or_else(io::default_save_path);
        self.dialog = Some(Dialog::SaveFile {
            path: path.display().to_string(),
        });
    }

    pub fn open_file(&mut self, path: &Path) {
        match self.document.open(path) {
            Ok(()) => log::info!("Opened {}", path.display()),
            Err(err) => {
                log::warn!("{}", err);
                self.dialog = Some(Dialog::Message {
                    text: format!("Failed to load {}.", path.display()),
                });
            }
        }
    }

    pub fn save_file(&mut self, path: &Path) {
        match self.document.save(path) {
            Ok(()) => {
                log::info!("Saved {}", path.display());
                self.settings.last_save_path = Some(path.to_path_buf());
            }
            Err(err) => {
                self.dialog = Some(Dialog::Message {
                    text: err.to_string(),
                });
            }
        }
    }

    /// Asks for confirmation before closing
    pub fn request_quit(&mut self) {
        self.dialog = Some(Dialog::ConfirmQuit);
    }

    pub(crate) fn quit(&mut self, ctx: &egui::Context) {
        log::info!("Quitting");
        self.quit_confirmed = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, canvas_offset: egui::Vec2, press_allowed: bool) {
        let events = self.input.process_input(ctx, canvas_offset, press_allowed);
        let mut changed = false;
        for event in events {
            changed |= self.tools.handle_event(event, &mut self.document);
        }
        if changed {
            ctx.request_repaint();
        }
    }

    pub(crate) fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, origin: egui::Pos2) {
        self.renderer.render(ctx, painter, origin, &self.document);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.has_dialog() {
            return;
        }
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
            self.undo();
        }
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.quit_confirmed {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.request_quit();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.capture(&self.tools);
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_close_request(ctx);
        self.handle_shortcuts(ctx);

        panels::menu_bar(self, ctx);
        panels::central_panel(self, ctx);
        panels::dialogs(self, ctx);
    }
}
