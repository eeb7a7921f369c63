use eframe::egui;

use crate::color;
use crate::library::LibraryTab;

/// Square sidebar tab: icon on top, label underneath.
pub struct TabButton {
    pub tab: LibraryTab,
    pub selected: bool,
}

impl TabButton {
    pub fn new(tab: LibraryTab, selected: bool) -> Self {
        Self { tab, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(64.0, 56.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                color::ACCENT.gamma_multiply(0.15)
            } else if response.hovered() {
                egui::Color32::from_gray(235)
            } else {
                egui::Color32::TRANSPARENT
            };
            let text_color = if self.selected {
                color::ACCENT
            } else {
                egui::Color32::from_gray(90)
            };

            ui.painter().rect_filled(rect, 6.0, bg_color);
            ui.painter().text(
                rect.center() - egui::vec2(0.0, 8.0),
                egui::Align2::CENTER_CENTER,
                self.tab.icon(),
                egui::FontId::proportional(20.0),
                text_color,
            );
            ui.painter().text(
                rect.center_bottom() - egui::vec2(0.0, 6.0),
                egui::Align2::CENTER_BOTTOM,
                self.tab.label(),
                egui::FontId::proportional(11.0),
                text_color,
            );
        }

        response.on_hover_text(self.tab.label())
    }
}
