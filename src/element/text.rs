use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use super::common::{DEFAULT_FONT_SIZE, TEXT_PADDING};
use crate::color;

/// Font families offered by the editor. Display fonts fall back to the
/// proportional egui family unless the host registers a matching font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    Inter,
    Poppins,
    Playfair,
    Lobster,
    RobotoMono,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Inter,
        FontFamily::Poppins,
        FontFamily::Playfair,
        FontFamily::Lobster,
        FontFamily::RobotoMono,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Poppins => "Poppins",
            FontFamily::Playfair => "Playfair Display",
            FontFamily::Lobster => "Lobster",
            FontFamily::RobotoMono => "Roboto Mono",
        }
    }

    pub fn egui_family(self) -> egui::FontFamily {
        match self {
            FontFamily::RobotoMono => egui::FontFamily::Monospace,
            _ => egui::FontFamily::Proportional,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

impl FontWeight {
    pub fn is_bold(self) -> bool {
        self == FontWeight::Bold
    }

    /// The bold toggle: bold becomes normal, anything else becomes bold.
    pub fn toggled_bold(self) -> Self {
        if self.is_bold() {
            FontWeight::Normal
        } else {
            FontWeight::Bold
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [TextAlign; 3] = [TextAlign::Left, TextAlign::Center, TextAlign::Right];

    pub fn label(self) -> &'static str {
        match self {
            TextAlign::Left => "Left",
            TextAlign::Center => "Center",
            TextAlign::Right => "Right",
        }
    }

    pub fn egui_align(self) -> egui::Align {
        match self {
            TextAlign::Left => egui::Align::LEFT,
            TextAlign::Center => egui::Align::Center,
            TextAlign::Right => egui::Align::RIGHT,
        }
    }
}

/// Text element attributes. Text has no explicit size; it sizes to content.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font_family: FontFamily,
    pub font_size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub align: TextAlign,
    pub color: Color32,
}

impl TextElement {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_family: FontFamily::default(),
            font_size: DEFAULT_FONT_SIZE,
            weight: FontWeight::default(),
            style: FontStyle::default(),
            align: TextAlign::default(),
            color: color::TEXT_DEFAULT,
        }
    }

    pub fn is_italic(&self) -> bool {
        self.style == FontStyle::Italic
    }

    /// Rough size used for hit testing before the renderer has laid the text out.
    pub fn estimated_size(&self) -> Vec2 {
        let lines: Vec<&str> = self.content.split('\n').collect();
        let widest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(1);
        Vec2::new(
            widest as f32 * self.font_size * 0.55 + TEXT_PADDING * 2.0,
            lines.len() as f32 * self.font_size * 1.25 + TEXT_PADDING * 2.0,
        )
    }
}
