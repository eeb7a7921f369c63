use egui::Vec2;

/// Image element. The source is forwarded verbatim from the asset catalog;
/// nothing is downloaded or decoded here.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub source: String,
    pub size: Vec2,
}

impl ImageElement {
    pub fn new(source: impl Into<String>, size: Vec2) -> Self {
        Self {
            source: source.into(),
            size: super::common::sanitize_size(size),
        }
    }
}
