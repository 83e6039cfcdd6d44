mod central_panel;
mod dialogs;
mod menu_bar;

pub use central_panel::central_panel;
pub use dialogs::{Dialog, dialogs};
pub use menu_bar::menu_bar;
