use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::color;
use crate::element::CornerRadius;

pub const DEFAULT_SHAPE_SIZE: f32 = 100.0;

/// A shape the Elements tab can insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePreset {
    pub label: String,
    pub size: [f32; 2],
    /// Fill as a hex string (`#rrggbb`).
    pub background: String,
    #[serde(default)]
    pub corner_radius: Option<CornerRadius>,
}

impl ShapePreset {
    pub fn new(label: &str, size: [f32; 2], background: &str) -> Self {
        Self {
            label: label.to_owned(),
            size,
            background: background.to_owned(),
            corner_radius: None,
        }
    }

    pub fn rounded(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.size[0], self.size[1])
    }

    pub fn background_color(&self) -> Color32 {
        color::parse_hex(&self.background).unwrap_or(color::SHAPE_DEFAULT)
    }
}

pub fn builtin() -> Vec<ShapePreset> {
    let square = [DEFAULT_SHAPE_SIZE, DEFAULT_SHAPE_SIZE];
    vec![
        ShapePreset::new("Box", square, "#d1d5db"),
        ShapePreset::new("Circle", square, "#93c5fd").rounded(CornerRadius::Percent(50.0)),
        ShapePreset::new("Triangle", square, "#fca5a5"),
        ShapePreset::new("Star", square, "#fcd34d"),
        ShapePreset::new("Heart", square, "#f9a8d4"),
        ShapePreset::new("Speech Bubble", [140.0, 100.0], "#e5e7eb")
            .rounded(CornerRadius::Pixels(16.0)),
        ShapePreset::new("Line", [150.0, 4.0], "#334155"),
        ShapePreset::new("Arrow", [120.0, 60.0], "#6ee7b7"),
        ShapePreset::new("Hexagon", square, "#c4b5fd"),
    ]
}
