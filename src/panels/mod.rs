mod central_panel;
mod inspector_panel;
mod library_panel;

pub use central_panel::central_panel;
pub use inspector_panel::inspector_panel;
pub use library_panel::{library_panel, tab_bar};
