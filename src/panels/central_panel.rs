use crate::PaintApp;

/// The canvas itself: draws the bitmap and feeds pointer input to the tools
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::from_gray(60)))
        .show(ctx, |ui| {
            let canvas_rect = ui.max_rect();
            // The chrome above the canvas, handed to the core as an offset
            let canvas_offset = canvas_rect.min.to_vec2();

            let press_allowed = !app.has_dialog() && ui.rect_contains_pointer(canvas_rect);
            app.handle_input(ctx, canvas_offset, press_allowed);

            let painter = ui.painter_at(canvas_rect);
            app.render(ctx, &painter, canvas_rect.min);
        });
}
