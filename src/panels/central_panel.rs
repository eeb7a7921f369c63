use eframe::egui::{self, Color32, FontId, Rect, Sense, Stroke};

use crate::DesignApp;
use crate::input::CanvasTransform;

const WORKSPACE_FILL: Color32 = Color32::from_rgb(0xF1, 0xF5, 0xF9);

pub fn central_panel(app: &mut DesignApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(WORKSPACE_FILL))
        .show(ctx, |ui| {
            let workspace = ui.available_rect_before_wrap();
            let response = ui.interact(
                workspace,
                ui.id().with("workspace"),
                Sense::click_and_drag(),
            );

            let zoom = app.config().canvas_zoom;
            let canvas_rect =
                Rect::from_center_size(workspace.center(), app.config().canvas_size() * zoom);
            let transform = CanvasTransform::new(canvas_rect.min, zoom);

            app.handle_canvas_input(ctx, &response, canvas_rect, &transform);

            let painter = ui.painter_at(workspace);
            painter.rect_stroke(
                canvas_rect.expand(1.0),
                0.0,
                Stroke::new(1.0, Color32::from_gray(210)),
            );
            app.render_canvas(&painter, canvas_rect, &transform);

            edit_surface(app, ui, &transform);
        });
}

/// Inline editor laid over the text element being edited.
fn edit_surface(app: &mut DesignApp, ui: &mut egui::Ui, transform: &CanvasTransform) {
    let Some((id, _)) = app.controller().editing() else {
        return;
    };
    let Some(element) = app.scene().get(id) else {
        return;
    };
    let Some(text) = element.as_text() else {
        return;
    };
    let rect = transform.rect_to_screen(element.rect(app.renderer().measured(id)));
    let font = FontId::new(text.font_size * transform.zoom, text.font_family.egui_family());
    let text_color = text.color;

    let Some((_, buffer, needs_focus)) = app.edit_surface() else {
        return;
    };
    let response = ui.put(
        rect,
        egui::TextEdit::multiline(buffer)
            .font(font)
            .text_color(text_color)
            .desired_width(rect.width())
            .frame(false),
    );
    if needs_focus {
        response.request_focus();
    } else if response.lost_focus() {
        app.commit_text_edit();
    }
}
