mod tab_button;

pub use tab_button::TabButton;
