use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::color;

/// Corner rounding of a shape. Percentages are relative to the shorter side,
/// so `Percent(50.0)` turns a square into a circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CornerRadius {
    Pixels(f32),
    Percent(f32),
}

impl CornerRadius {
    pub fn resolve(self, size: Vec2) -> f32 {
        let shorter = size.x.min(size.y);
        let r = match self {
            CornerRadius::Pixels(px) => px,
            CornerRadius::Percent(pct) => shorter * pct / 100.0,
        };
        r.clamp(0.0, shorter / 2.0)
    }
}

/// Outline drawn for a shape label. Unknown labels draw as a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outline {
    Rect,
    Triangle,
    Star,
    Heart,
    SpeechBubble,
    Arrow,
    Hexagon,
}

impl Outline {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "triangle" => Outline::Triangle,
            "star" => Outline::Star,
            "heart" => Outline::Heart,
            "speech bubble" | "speech-bubble" => Outline::SpeechBubble,
            "arrow" => Outline::Arrow,
            "hex" | "hexagon" => Outline::Hexagon,
            _ => Outline::Rect,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeElement {
    pub label: String,
    pub size: Vec2,
    pub background: Color32,
    pub corner_radius: Option<CornerRadius>,
}

impl ShapeElement {
    pub fn new(label: impl Into<String>, size: Vec2) -> Self {
        Self {
            label: label.into(),
            size: super::common::sanitize_size(size),
            background: color::SHAPE_DEFAULT,
            corner_radius: None,
        }
    }

    pub fn outline(&self) -> Outline {
        Outline::from_label(&self.label)
    }
}
