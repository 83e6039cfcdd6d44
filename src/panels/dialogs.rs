use std::path::Path;

use crate::PaintApp;

/// The modal window currently shown over the canvas, if any
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// "Do you really want to quit?"
    ConfirmQuit,
    /// Path prompt for opening an image
    OpenFile { path: String },
    /// Path prompt for saving the canvas
    SaveFile { path: String },
    /// An error or notice the user has to dismiss
    Message { text: String },
}

enum Outcome {
    Pending,
    Confirmed,
    Cancelled,
}

fn modal(ctx: &egui::Context, title: &str) -> egui::Window<'static> {
    egui::Window::new(title.to_owned())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .default_width(ctx.screen_rect().width().min(420.0))
}

fn path_prompt(ctx: &egui::Context, title: &str, action: &str, path: &mut String) -> Outcome {
    let mut outcome = Outcome::Pending;
    modal(ctx, title).show(ctx, |ui| {
        ui.label("File:");
        let edit = ui.add(egui::TextEdit::singleline(path).desired_width(f32::INFINITY));
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.horizontal(|ui| {
            if ui.button(action).clicked() || submitted {
                outcome = Outcome::Confirmed;
            }
            if ui.button("Cancel").clicked() {
                outcome = Outcome::Cancelled;
            }
        });
    });
    outcome
}

/// Shows the active dialog and applies its result
pub fn dialogs(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(mut dialog) = app.dialog.take() else {
        return;
    };

    let keep_open = match &mut dialog {
        Dialog::ConfirmQuit => {
            let mut outcome = Outcome::Pending;
            modal(ctx, "Paint").show(ctx, |ui| {
                ui.label("Do you really want to quit?");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        outcome = Outcome::Confirmed;
                    }
                    // Cancel is the default answer
                    if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                        outcome = Outcome::Cancelled;
                    }
                });
            });
            match outcome {
                Outcome::Confirmed => {
                    app.quit(ctx);
                    false
                }
                Outcome::Cancelled => false,
                Outcome::Pending => true,
            }
        }
        Dialog::OpenFile { path } => match path_prompt(ctx, "Open image file", "Open", path) {
            Outcome::Confirmed => {
                let path = path.trim().to_owned();
                if !path.is_empty() {
                    app.open_file(Path::new(&path));
                }
                false
            }
            Outcome::Cancelled => false,
            Outcome::Pending => true,
        },
        Dialog::SaveFile { path } => match path_prompt(ctx, "Save as", "Save", path) {
            Outcome::Confirmed => {
                let path = path.trim().to_owned();
                if !path.is_empty() {
                    app.save_file(Path::new(&path));
                }
                false
            }
            Outcome::Cancelled => false,
            Outcome::Pending => true,
        },
        Dialog::Message { text } => {
            let mut open = true;
            modal(ctx, "Paint").show(ctx, |ui| {
                ui.label(text.as_str());
                if ui.button("OK").clicked() {
                    open = false;
                }
            });
            open
        }
    };

    // Actions above may have queued a follow-up dialog (e.g. an error)
    if keep_open && app.dialog.is_none() {
        app.dialog = Some(dialog);
    }
}
