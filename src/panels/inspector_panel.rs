use eframe::egui::{self, Color32, RichText};

use crate::DesignApp;
use crate::element::{FontFamily, TextAlign};
use crate::id_generator::ElementId;
use crate::inspector::{InspectorEdit, InspectorView, TextControls};

/// Toolbar bound to the selected element. Every change is applied as soon
/// as the control reports it.
pub fn inspector_panel(app: &mut DesignApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("inspector_panel")
        .exact_height(44.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| match InspectorView::of(app.scene()) {
                InspectorView::NoSelection => {
                    ui.weak("No selection");
                }
                InspectorView::Element {
                    id,
                    element_type,
                    swatch,
                    opacity,
                    text,
                } => {
                    ui.strong(element_type);
                    ui.separator();

                    let mut edits = Vec::new();
                    if let Some(mut color) = swatch {
                        if egui::color_picker::color_edit_button_srgba(
                            ui,
                            &mut color,
                            egui::color_picker::Alpha::Opaque,
                        )
                        .changed()
                        {
                            edits.push(InspectorEdit::Color(color));
                        }
                    }
                    if let Some(controls) = text {
                        text_controls(app, ui, id, controls, &mut edits);
                    }

                    ui.separator();
                    let mut value = opacity;
                    ui.label("Opacity");
                    if ui
                        .add(egui::Slider::new(&mut value, 0.0..=1.0).fixed_decimals(2))
                        .changed()
                    {
                        edits.push(InspectorEdit::Opacity(value));
                    }

                    ui.separator();
                    let delete = egui::Button::new(
                        RichText::new("🗑 Delete").color(Color32::from_rgb(0xDC, 0x26, 0x26)),
                    );
                    if ui.add_enabled(app.controller().can_delete(), delete).clicked() {
                        edits.push(InspectorEdit::Delete);
                    }

                    for edit in edits {
                        if let Err(err) = app.apply_inspector_edit(edit) {
                            log::warn!("Inspector edit rejected: {}", err);
                        }
                    }
                }
            });
        });
}

fn text_controls(
    app: &mut DesignApp,
    ui: &mut egui::Ui,
    id: ElementId,
    controls: TextControls,
    edits: &mut Vec<InspectorEdit>,
) {
    let mut family = controls.font_family;
    egui::ComboBox::from_id_salt("font_family")
        .selected_text(family.label())
        .width(140.0)
        .show_ui(ui, |ui| {
            for option in FontFamily::ALL {
                ui.selectable_value(&mut family, option, option.label());
            }
        });
    if family != controls.font_family {
        edits.push(InspectorEdit::FontFamily(family));
    }

    let mut size_text = app.font_size_text(id, controls.font_size);
    let response = ui.add(egui::TextEdit::singleline(&mut size_text).desired_width(36.0));
    if response.changed() {
        app.set_font_size_draft(id, size_text);
    } else if response.lost_focus() {
        app.clear_font_size_draft();
    }
    let error_color = ui.visuals().error_fg_color;
    if let Some(err) = app.inspector_error() {
        ui.colored_label(error_color, err);
    }

    ui.separator();
    if ui.selectable_label(controls.bold, RichText::new("B").strong()).clicked() {
        edits.push(InspectorEdit::ToggleBold);
    }
    if ui.selectable_label(controls.italic, RichText::new("I").italics()).clicked() {
        edits.push(InspectorEdit::ToggleItalic);
    }

    ui.separator();
    for align in TextAlign::ALL {
        if ui
            .selectable_label(controls.is_aligned(align), align.label())
            .clicked()
        {
            edits.push(InspectorEdit::Align(align));
        }
    }
}
