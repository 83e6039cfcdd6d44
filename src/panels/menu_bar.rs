use crate::PaintApp;
use crate::components::ToolButton;
use crate::pen::{MAX_PEN_WIDTH, MIN_PEN_WIDTH};
use crate::tools::ToolMode;

/// Menus plus a toolbar row with the tool toggles and pen controls
pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    app.new_canvas();
                    ui.close_menu();
                }
                if ui.button("Open…").clicked() {
                    app.prompt_open();
                    ui.close_menu();
                }
                if ui.button("Save as…").clicked() {
                    app.prompt_save();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    app.request_quit();
                    ui.close_menu();
                }
            });

            ui.menu_button("Edit", |ui| {
                let can_undo = app.document().history().can_undo();
                if ui
                    .add_enabled(can_undo, egui::Button::new("Undo").shortcut_text("Ctrl+Z"))
                    .clicked()
                {
                    app.undo();
                    ui.close_menu();
                }
            });

            ui.menu_button("Tools", |ui| {
                let active = app.tools().mode();
                for tool in ToolMode::ALL {
                    if ui.selectable_label(active == tool, tool.name()).clicked() {
                        log::info!("Tool selected from menu: {}", tool.name());
                        app.tools_mut().select_tool(tool);
                        ui.close_menu();
                    }
                }
            });
        });

        ui.horizontal(|ui| {
            let active = app.tools().mode();
            for tool in ToolMode::ALL {
                if ToolButton::new(tool, active == tool).show(ui).clicked() {
                    app.tools_mut().select_tool(tool);
                }
            }

            ui.separator();

            ui.label("Width:");
            let mut width = app.tools().pen().width();
            if ui
                .add(egui::DragValue::new(&mut width).range(MIN_PEN_WIDTH..=MAX_PEN_WIDTH))
                .changed()
            {
                app.tools_mut().set_pen_width(width);
            }

            ui.label("Colour:");
            let mut color = app.tools().pen().color();
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                app.tools_mut().set_pen_color(color);
            }

            ui.separator();
            let history = app.document().history();
            ui.label(format!("History: {}", history.len()));
        });
    });
}
