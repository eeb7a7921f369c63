use egui::{Color32, Pos2};

use super::{CornerRadius, FontFamily, FontStyle, FontWeight, TextAlign};

/// A partial set of element attributes merged by `Scene::update`. Fields that
/// do not apply to the target's kind are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub position: Option<Pos2>,
    pub opacity: Option<f32>,
    /// Text content, image source or shape label depending on kind.
    pub content: Option<String>,
    pub color: Option<Color32>,
    pub background: Option<Color32>,
    pub corner_radius: Option<Option<CornerRadius>>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub font_family: Option<FontFamily>,
    pub font_size: Option<f32>,
    pub weight: Option<FontWeight>,
    pub style: Option<FontStyle>,
    pub align: Option<TextAlign>,
}

impl ElementPatch {
    pub fn position(position: Pos2) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_background(mut self, background: Color32) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = Some(family);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_corner_radius(mut self, radius: Option<CornerRadius>) -> Self {
        self.corner_radius = Some(radius);
        self
    }
}
