use eframe::egui::{self, RichText, Vec2};

use crate::DesignApp;
use crate::components::TabButton;
use crate::element::FontStyle;
use crate::generation::{GenerationStatus, InputKind, tools};
use crate::library::{ImageVariant, LibraryTab};

const TILE_SIZE: Vec2 = Vec2::new(92.0, 64.0);

/// Narrow rail of sidebar tabs. Clicking the open tab closes the sidebar.
pub fn tab_bar(app: &mut DesignApp, ctx: &egui::Context) {
    egui::SidePanel::left("tab_bar")
        .resizable(false)
        .exact_width(76.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                for tab in LibraryTab::ALL {
                    let selected = app.active_tab() == Some(tab);
                    if TabButton::new(tab, selected).show(ui).clicked() {
                        app.toggle_tab(tab);
                    }
                }
            });
        });
}

pub fn library_panel(app: &mut DesignApp, ctx: &egui::Context) {
    let Some(tab) = app.active_tab() else {
        return;
    };
    egui::SidePanel::left("library_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading(tab.label());
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| match tab {
                LibraryTab::Elements => elements_tab(app, ui),
                LibraryTab::Photos => photos_tab(app, ui),
                LibraryTab::Text => text_tab(app, ui),
                LibraryTab::Tools => tools_tab(app, ui),
            });
        });
}

fn elements_tab(app: &mut DesignApp, ui: &mut egui::Ui) {
    ui.label("Shapes");
    let presets = app.library().catalog().shapes.clone();
    ui.horizontal_wrapped(|ui| {
        for preset in &presets {
            let swatch =
                RichText::new(format!("■ {}", preset.label)).color(preset.background_color());
            if ui.add(egui::Button::new(swatch).min_size(TILE_SIZE)).clicked() {
                app.add_shape(preset);
            }
        }
    });
}

fn photos_tab(app: &mut DesignApp, ui: &mut egui::Ui) {
    let mut full = app.image_variant() == ImageVariant::FullResolution;
    if ui.checkbox(&mut full, "Full resolution").changed() {
        app.set_image_variant(if full {
            ImageVariant::FullResolution
        } else {
            ImageVariant::Standard
        });
    }
    ui.separator();

    let images = app.library().catalog().images.clone();
    if images.is_empty() {
        ui.weak("No photos available");
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for image in &images {
            let button = egui::Button::new(format!("🖼 {}", image.id)).min_size(TILE_SIZE);
            if ui.add(button).on_hover_text(image.thumbnail.as_str()).clicked() {
                app.add_image(&image.id);
            }
        }
    });
}

fn text_tab(app: &mut DesignApp, ui: &mut egui::Ui) {
    for preset in app.library().text_presets() {
        let mut sample = RichText::new(preset.sample)
            .size(preset.font_size.min(32.0))
            .family(preset.font_family.egui_family())
            .color(preset.color);
        if preset.weight.is_bold() {
            sample = sample.strong();
        }
        if preset.style == FontStyle::Italic {
            sample = sample.italics();
        }
        let button = egui::Button::new(sample).min_size(Vec2::new(ui.available_width(), 0.0));
        if ui.add(button).on_hover_text(preset.name).clicked() {
            app.add_text(&preset);
        }
    }
}

/// What the tool view asked for this frame.
enum ToolAction {
    Open(&'static str),
    Back,
    Generate,
    AddToCanvas,
}

fn tools_tab(app: &mut DesignApp, ui: &mut egui::Ui) {
    let mut action = None;

    match app.session_mut() {
        None => {
            for tool in tools::TOOLS {
                let response = ui.add(
                    egui::Button::new(RichText::new(tool.name).strong())
                        .min_size(Vec2::new(ui.available_width(), 28.0)),
                );
                ui.weak(tool.description);
                ui.add_space(4.0);
                if response.clicked() {
                    action = Some(ToolAction::Open(tool.id));
                }
            }
        }
        Some(session) => {
            if ui.button("⬅ Back").clicked() {
                action = Some(ToolAction::Back);
            }
            let tool = session.tool();
            ui.heading(tool.name);
            ui.weak(tool.description);
            ui.separator();

            for input in tool.inputs {
                ui.label(input.label);
                let value = session.input_mut(input.name);
                match input.kind {
                    InputKind::Text => {
                        ui.add(egui::TextEdit::singleline(value).hint_text(input.placeholder));
                    }
                    InputKind::TextArea => {
                        ui.add(
                            egui::TextEdit::multiline(value)
                                .hint_text(input.placeholder)
                                .desired_rows(4),
                        );
                    }
                    InputKind::Select(options) => {
                        egui::ComboBox::from_id_salt(input.name)
                            .selected_text(value.as_str())
                            .show_ui(ui, |ui| {
                                for option in options {
                                    ui.selectable_value(value, (*option).to_owned(), *option);
                                }
                            });
                    }
                }
            }

            ui.add_space(8.0);
            let loading = session.is_loading();
            ui.horizontal(|ui| {
                if ui.add_enabled(!loading, egui::Button::new("✨ Generate")).clicked() {
                    action = Some(ToolAction::Generate);
                }
                if loading {
                    ui.spinner();
                }
            });

            if let GenerationStatus::Ready(result) = session.status() {
                ui.separator();
                ui.label(result.as_str());
                if ui.button("Add to Canvas").clicked() {
                    action = Some(ToolAction::AddToCanvas);
                }
            }
        }
    }

    match action {
        Some(ToolAction::Open(id)) => {
            app.open_tool(id);
        }
        Some(ToolAction::Back) => app.close_tool(),
        Some(ToolAction::Generate) => app.generate(),
        Some(ToolAction::AddToCanvas) => {
            app.add_generated_to_canvas();
        }
        None => {}
    }
}
