use egui::{Color32, Pos2, Rect, Vec2};

mod common;
pub(crate) mod image;
pub(crate) mod patch;
pub(crate) mod shape;
pub(crate) mod text;

pub use common::{DEFAULT_FONT_SIZE, DEFAULT_OPACITY, MIN_ELEMENT_SIZE, TEXT_PADDING};
pub use image::ImageElement;
pub use patch::ElementPatch;
pub use shape::{CornerRadius, Outline, ShapeElement};
pub use text::{FontFamily, FontStyle, FontWeight, TextAlign, TextElement};

use crate::id_generator::{self, ElementId};

/// The closed set of element kinds. Each kind carries only the fields that
/// are valid for it.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Text(TextElement),
    Image(ImageElement),
    Shape(ShapeElement),
}

/// One placed visual object. The id is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignElement {
    id: ElementId,
    position: Pos2,
    opacity: f32,
    kind: ElementKind,
}

impl DesignElement {
    /// Creates an element with a fresh id and full opacity. A non-finite
    /// position falls back to the canvas origin.
    pub fn new(kind: ElementKind, position: Pos2) -> Self {
        let position = if common::is_finite_pos(position) {
            position
        } else {
            Pos2::ZERO
        };
        Self {
            id: id_generator::generate_id(),
            position,
            opacity: DEFAULT_OPACITY,
            kind,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn element_type(&self) -> &'static str {
        match self.kind {
            ElementKind::Text(_) => "text",
            ElementKind::Image(_) => "image",
            ElementKind::Shape(_) => "shape",
        }
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.kind {
            ElementKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match &self.kind {
            ElementKind::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeElement> {
        match &self.kind {
            ElementKind::Shape(s) => Some(s),
            _ => None,
        }
    }

    /// Text content, image source or shape label.
    pub fn content(&self) -> &str {
        match &self.kind {
            ElementKind::Text(t) => &t.content,
            ElementKind::Image(i) => &i.source,
            ElementKind::Shape(s) => &s.label,
        }
    }

    /// Width and height for images and shapes; text sizes to content.
    pub fn explicit_size(&self) -> Option<Vec2> {
        match &self.kind {
            ElementKind::Text(_) => None,
            ElementKind::Image(i) => Some(i.size),
            ElementKind::Shape(s) => Some(s.size),
        }
    }

    /// The color the inspector swatch edits: text color or shape background.
    pub fn swatch_color(&self) -> Option<Color32> {
        match &self.kind {
            ElementKind::Text(t) => Some(t.color),
            ElementKind::Shape(s) => Some(s.background),
            ElementKind::Image(_) => None,
        }
    }

    /// Bounding rectangle in canvas coordinates. `measured` is the laid-out
    /// size of a text element if the renderer has one.
    pub fn rect(&self, measured: Option<Vec2>) -> Rect {
        let size = match &self.kind {
            ElementKind::Text(t) => measured.unwrap_or_else(|| t.estimated_size()),
            ElementKind::Image(i) => i.size,
            ElementKind::Shape(s) => s.size,
        };
        Rect::from_min_size(self.position, size)
    }

    pub fn hit_test(&self, pos: Pos2, measured: Option<Vec2>) -> bool {
        self.rect(measured).contains(pos)
    }

    /// Merges the fields of `patch` that apply to this kind. Invalid values
    /// (non-finite coordinates, undersized dimensions, non-positive font
    /// sizes) are dropped and the previous value kept. Returns whether
    /// anything changed.
    pub(crate) fn apply(&mut self, patch: &ElementPatch) -> bool {
        let before = self.clone();

        if let Some(position) = patch.position {
            if common::is_finite_pos(position) {
                self.position = position;
            } else {
                log::debug!("Ignoring non-finite position {:?} for {}", position, self.id);
            }
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = common::sanitize_opacity(opacity);
        }

        match &mut self.kind {
            ElementKind::Text(t) => {
                if let Some(content) = &patch.content {
                    t.content.clone_from(content);
                }
                if let Some(color) = patch.color {
                    t.color = color;
                }
                if let Some(family) = patch.font_family {
                    t.font_family = family;
                }
                if let Some(size) = patch.font_size {
                    if size.is_finite() && size > 0.0 {
                        t.font_size = size;
                    } else {
                        log::debug!("Ignoring font size {} for {}", size, self.id);
                    }
                }
                if let Some(weight) = patch.weight {
                    t.weight = weight;
                }
                if let Some(style) = patch.style {
                    t.style = style;
                }
                if let Some(align) = patch.align {
                    t.align = align;
                }
            }
            ElementKind::Image(i) => {
                if let Some(source) = &patch.content {
                    i.source.clone_from(source);
                }
                if let Some(size) = patched_size(i.size, patch) {
                    i.size = size;
                }
            }
            ElementKind::Shape(s) => {
                if let Some(label) = &patch.content {
                    s.label.clone_from(label);
                }
                if let Some(background) = patch.background {
                    s.background = background;
                }
                if let Some(radius) = patch.corner_radius {
                    s.corner_radius = radius;
                }
                if let Some(size) = patched_size(s.size, patch) {
                    s.size = size;
                }
            }
        }

        *self != before
    }
}

fn patched_size(current: Vec2, patch: &ElementPatch) -> Option<Vec2> {
    if patch.width.is_none() && patch.height.is_none() {
        return None;
    }
    let proposed = Vec2::new(
        patch.width.unwrap_or(current.x),
        patch.height.unwrap_or(current.y),
    );
    match common::validate_size(proposed) {
        Ok(size) => Some(size),
        Err(reason) => {
            log::debug!("Ignoring resize: {}", reason);
            None
        }
    }
}

/// Factory functions for creating elements with per-kind defaults
pub mod factory {
    use super::*;

    /// Create a text element with default styling
    pub fn create_text(content: impl Into<String>, position: Pos2) -> DesignElement {
        DesignElement::new(ElementKind::Text(TextElement::new(content)), position)
    }

    /// Create a styled text element
    pub fn create_styled_text(mut text: TextElement, position: Pos2) -> DesignElement {
        if !(text.font_size.is_finite() && text.font_size > 0.0) {
            text.font_size = DEFAULT_FONT_SIZE;
        }
        DesignElement::new(ElementKind::Text(text), position)
    }

    /// Create an image element referencing `source`
    pub fn create_image(source: impl Into<String>, size: Vec2, position: Pos2) -> DesignElement {
        DesignElement::new(ElementKind::Image(ImageElement::new(source, size)), position)
    }

    /// Create a shape element with the neutral default fill
    pub fn create_shape(label: impl Into<String>, size: Vec2, position: Pos2) -> DesignElement {
        DesignElement::new(ElementKind::Shape(ShapeElement::new(label, size)), position)
    }

    /// Create a shape element with explicit fill and rounding
    pub fn create_styled_shape(
        label: impl Into<String>,
        size: Vec2,
        background: Color32,
        corner_radius: Option<CornerRadius>,
        position: Pos2,
    ) -> DesignElement {
        let mut shape = ShapeElement::new(label, size);
        shape.background = background;
        shape.corner_radius = corner_radius;
        DesignElement::new(ElementKind::Shape(shape), position)
    }
}
