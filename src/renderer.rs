use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};
use egui::text::{LayoutJob, TextFormat};

use crate::color;
use crate::element::{
    DesignElement, ElementKind, ImageElement, Outline, ShapeElement, TEXT_PADDING, TextElement,
};
use crate::id_generator::ElementId;
use crate::input::CanvasTransform;
use crate::scene::Scene;

const CANVAS_BACKGROUND: Color32 = Color32::WHITE;
const PLACEHOLDER_TEXT: Color32 = Color32::from_rgb(0x94, 0xA3, 0xB8);
const IMAGE_PLACEHOLDER: Color32 = Color32::from_rgb(0xE2, 0xE8, 0xF0);
const SELECTION_STROKE: f32 = 2.0;

/// Paints the scene onto the canvas and remembers how large each text
/// element came out, so hit testing matches what is on screen.
#[derive(Debug, Default)]
pub struct Renderer {
    measured: HashMap<ElementId, Vec2>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Laid-out size of a text element in canvas units, from the last frame.
    pub fn measured(&self, id: ElementId) -> Option<Vec2> {
        self.measured.get(&id).copied()
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     canvas (egui::Rect): Screen rectangle of the canvas
    ///     transform (CanvasTransform): Canvas to screen mapping
    ///     scene (Scene): Elements to draw, in paint order
    ///     editing (Option<ElementId>): Text element whose content is drawn by the edit surface instead
    pub fn render(
        &mut self,
        painter: &Painter,
        canvas: Rect,
        transform: &CanvasTransform,
        scene: &Scene,
        editing: Option<ElementId>,
    ) {
        let painter = painter.with_clip_rect(canvas);
        painter.rect_filled(canvas, 0.0, CANVAS_BACKGROUND);

        let mut measured = HashMap::new();
        for element in scene.elements() {
            if let ElementKind::Text(text) = element.kind() {
                let size = self.draw_text(
                    &painter,
                    transform,
                    element,
                    text,
                    editing != Some(element.id()),
                );
                measured.insert(element.id(), size);
            } else {
                draw_element(&painter, transform, element);
            }
        }
        self.measured = measured;

        if let Some(selected) = scene.selected_element() {
            let rect = transform.rect_to_screen(selected.rect(self.measured(selected.id())));
            painter.rect_stroke(
                rect.expand(SELECTION_STROKE),
                2.0,
                Stroke::new(SELECTION_STROKE, color::ACCENT),
            );
        }

        if scene.is_empty() {
            draw_empty_placeholder(&painter, canvas, transform.zoom);
        }
    }

    /// Lays out `text`, paints it when `visible`, and returns its size in
    /// canvas units including padding.
    fn draw_text(
        &self,
        painter: &Painter,
        transform: &CanvasTransform,
        element: &DesignElement,
        text: &TextElement,
        visible: bool,
    ) -> Vec2 {
        let zoom = transform.zoom;
        let color = text.color.gamma_multiply(element.opacity());
        let mut job = LayoutJob::default();
        job.append(
            &text.content,
            0.0,
            TextFormat {
                font_id: FontId::new(text.font_size * zoom, text.font_family.egui_family()),
                color,
                italics: text.is_italic(),
                ..Default::default()
            },
        );
        job.halign = text.align.egui_align();
        let galley = painter.layout_job(job);
        let padding = Vec2::splat(TEXT_PADDING);

        if visible {
            let origin = transform.to_screen(element.position()) + padding * zoom
                - galley.rect.min.to_vec2();
            if text.weight.is_bold() {
                // No bold face is registered; overdraw with a small offset
                let offset = Vec2::new((text.font_size * zoom / 24.0).max(0.5), 0.0);
                painter.galley(origin + offset, galley.clone(), color);
            }
            painter.galley(origin, galley.clone(), color);
        }

        galley.size() / zoom + padding * 2.0
    }
}

fn draw_element(painter: &Painter, transform: &CanvasTransform, element: &DesignElement) {
    let rect = transform.rect_to_screen(element.rect(None));
    match element.kind() {
        ElementKind::Shape(shape) => draw_shape(painter, rect, shape, element.opacity()),
        ElementKind::Image(image) => draw_image(painter, rect, image, element.opacity()),
        ElementKind::Text(_) => {}
    }
}

fn draw_shape(painter: &Painter, rect: Rect, shape: &ShapeElement, opacity: f32) {
    let fill = shape.background.gamma_multiply(opacity);
    match shape.outline() {
        Outline::Rect => {
            let rounding = shape
                .corner_radius
                .map_or(0.0, |radius| radius.resolve(rect.size()));
            painter.rect_filled(rect, rounding, fill);
        }
        Outline::SpeechBubble => {
            let body_bottom = rect.bottom() - rect.height() * 0.2;
            let body = Rect::from_min_max(rect.min, Pos2::new(rect.max.x, body_bottom));
            painter.rect_filled(body, body.height().min(body.width()) * 0.15, fill);
            let tail = vec![
                Pos2::new(rect.left() + rect.width() * 0.2, body.bottom() - 1.0),
                Pos2::new(rect.left() + rect.width() * 0.4, body.bottom() - 1.0),
                Pos2::new(rect.left() + rect.width() * 0.15, rect.bottom()),
            ];
            painter.add(egui::Shape::convex_polygon(tail, fill, Stroke::NONE));
        }
        outline => {
            let (points, center) = outline_points(outline, rect);
            fill_fan(painter, &points, center, fill);
        }
    }
}

/// Fills a polygon that is star-shaped around `center` with a triangle fan.
fn fill_fan(painter: &Painter, points: &[Pos2], center: Pos2, fill: Color32) {
    if points.len() < 3 {
        return;
    }
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(center, fill);
    for point in points {
        mesh.colored_vertex(*point, fill);
    }
    let n = points.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Polygon outline in screen space plus a point every vertex is visible from.
fn outline_points(outline: Outline, rect: Rect) -> (Vec<Pos2>, Pos2) {
    let at = |x: f32, y: f32| rect.lerp_inside(Vec2::new(x, y));
    match outline {
        Outline::Triangle => (vec![at(0.5, 0.0), at(1.0, 1.0), at(0.0, 1.0)], at(0.5, 0.66)),
        Outline::Hexagon => {
            let points = (0..6)
                .map(|i| {
                    let angle = TAU * i as f32 / 6.0;
                    at(0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin())
                })
                .collect();
            (points, rect.center())
        }
        Outline::Star => {
            let points = (0..10)
                .map(|i| {
                    let radius = if i % 2 == 0 { 0.5 } else { 0.2 };
                    let angle = -PI / 2.0 + PI * i as f32 / 5.0;
                    at(0.5 + radius * angle.cos(), 0.55 + radius * angle.sin())
                })
                .collect();
            (points, at(0.5, 0.55))
        }
        Outline::Arrow => (
            vec![
                at(0.0, 0.35),
                at(0.6, 0.35),
                at(0.6, 0.0),
                at(1.0, 0.5),
                at(0.6, 1.0),
                at(0.6, 0.65),
                at(0.0, 0.65),
            ],
            at(0.62, 0.5),
        ),
        Outline::Heart => (heart_points(rect), at(0.5, 0.45)),
        Outline::Rect | Outline::SpeechBubble => (
            vec![rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()],
            rect.center(),
        ),
    }
}

fn heart_points(rect: Rect) -> Vec<Pos2> {
    let raw: Vec<Vec2> = (0..48)
        .map(|i| {
            let t = TAU * i as f32 / 48.0;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            Vec2::new(x, -y)
        })
        .collect();
    let min = raw.iter().fold(Vec2::splat(f32::MAX), |acc, p| acc.min(*p));
    let max = raw.iter().fold(Vec2::splat(f32::MIN), |acc, p| acc.max(*p));
    let span = (max - min).max(Vec2::splat(f32::EPSILON));
    raw.into_iter()
        .map(|p| rect.lerp_inside((p - min) / span))
        .collect()
}

fn draw_image(painter: &Painter, rect: Rect, image: &ImageElement, opacity: f32) {
    // Images are never fetched; the canvas shows a labelled frame instead
    painter.rect_filled(rect, 4.0, IMAGE_PLACEHOLDER.gamma_multiply(opacity));
    let label_color = PLACEHOLDER_TEXT.gamma_multiply(opacity);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "🖼",
        FontId::proportional((rect.height() * 0.25).clamp(8.0, 48.0)),
        label_color,
    );
    let source: String = image.source.chars().take(32).collect();
    painter.text(
        rect.center_bottom() - Vec2::new(0.0, 6.0),
        Align2::CENTER_BOTTOM,
        source,
        FontId::proportional(10.0),
        label_color,
    );
}

fn draw_empty_placeholder(painter: &Painter, canvas: Rect, zoom: f32) {
    painter.text(
        canvas.center(),
        Align2::CENTER_BOTTOM,
        "Start Creating",
        FontId::proportional(32.0 * zoom),
        PLACEHOLDER_TEXT,
    );
    painter.text(
        canvas.center() + Vec2::new(0.0, 8.0),
        Align2::CENTER_TOP,
        "Add elements, photos or text from the library",
        FontId::proportional(14.0 * zoom),
        PLACEHOLDER_TEXT,
    );
}
