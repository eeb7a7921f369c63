use egui::Color32;

use crate::color;
use crate::element::{FontFamily, FontStyle, FontWeight, TextAlign, TextElement};

/// A text style the Text tab can insert, together with its sample content.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPreset {
    pub name: &'static str,
    pub sample: &'static str,
    pub font_family: FontFamily,
    pub font_size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub color: Color32,
}

impl TextPreset {
    const fn plain(name: &'static str, sample: &'static str, font_size: f32, weight: FontWeight) -> Self {
        Self {
            name,
            sample,
            font_family: FontFamily::Inter,
            font_size,
            weight,
            style: FontStyle::Normal,
            color: color::TEXT_DEFAULT,
        }
    }

    pub fn element(&self) -> TextElement {
        TextElement {
            content: self.sample.to_owned(),
            font_family: self.font_family,
            font_size: self.font_size,
            weight: self.weight,
            style: self.style,
            align: TextAlign::Left,
            color: self.color,
        }
    }
}

pub const HEADING: TextPreset = TextPreset::plain("Heading", "Heading", 48.0, FontWeight::Bold);
pub const SUBHEADING: TextPreset =
    TextPreset::plain("Subheading", "Subheading", 24.0, FontWeight::Medium);
pub const BODY: TextPreset = TextPreset::plain("Body", "Body text", 16.0, FontWeight::Normal);

pub fn builtin() -> Vec<TextPreset> {
    vec![
        HEADING,
        SUBHEADING,
        BODY,
        TextPreset {
            name: "Elegant Serif",
            sample: "Timeless Elegance",
            font_family: FontFamily::Playfair,
            font_size: 40.0,
            weight: FontWeight::Bold,
            style: FontStyle::Italic,
            color: Color32::from_rgb(0x1f, 0x29, 0x37),
        },
        TextPreset {
            name: "Modern Mono",
            sample: "BUILD_THE_FUTURE",
            font_family: FontFamily::RobotoMono,
            font_size: 28.0,
            weight: FontWeight::Medium,
            style: FontStyle::Normal,
            color: Color32::from_rgb(0x0f, 0x76, 0x6e),
        },
        TextPreset {
            name: "Playful Display",
            sample: "Hello Sunshine!",
            font_family: FontFamily::Lobster,
            font_size: 36.0,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
            color: Color32::from_rgb(0xdb, 0x27, 0x77),
        },
    ]
}
