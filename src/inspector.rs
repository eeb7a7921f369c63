//! Property controls bound to the selected element. Every edit writes through
//! `Scene::update` immediately; there is no apply step.

use egui::Color32;
use thiserror::Error;

use crate::element::{
    DesignElement, ElementKind, ElementPatch, FontFamily, FontStyle, TextAlign, TextElement,
};
use crate::id_generator::ElementId;
use crate::scene::Scene;

/// Largest font size the inspector accepts.
pub const MAX_FONT_SIZE: u32 = 999;

/// One change made through an inspector control.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectorEdit {
    /// Text color or shape background, depending on kind
    Color(Color32),
    FontFamily(FontFamily),
    /// Raw font size input as typed
    FontSize(String),
    ToggleBold,
    ToggleItalic,
    Align(TextAlign),
    Opacity(f32),
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectorError {
    #[error("Font size must be a positive whole number, got {0:?}")]
    InvalidFontSize(String),

    #[error("{control} does not apply to {kind} elements")]
    NotApplicable {
        control: &'static str,
        kind: &'static str,
    },

    #[error("Nothing is selected")]
    NoSelection,

    #[error("Delete is unavailable while {0}")]
    DeleteUnavailable(&'static str),
}

/// Text-specific control values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextControls {
    pub font_family: FontFamily,
    pub font_size: u32,
    pub bold: bool,
    pub italic: bool,
    pub align: TextAlign,
}

impl TextControls {
    fn from_text(text: &TextElement) -> Self {
        Self {
            font_family: text.font_family,
            font_size: text.font_size.round().max(1.0) as u32,
            bold: text.weight.is_bold(),
            italic: text.is_italic(),
            align: text.align,
        }
    }

    /// Alignment toggles are mutually exclusive: exactly one reads as on.
    pub fn is_aligned(&self, align: TextAlign) -> bool {
        self.align == align
    }
}

/// What the inspector shows for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectorView {
    NoSelection,
    Element {
        id: ElementId,
        element_type: &'static str,
        swatch: Option<Color32>,
        opacity: f32,
        text: Option<TextControls>,
    },
}

impl InspectorView {
    pub fn of(scene: &Scene) -> Self {
        match scene.selected_element() {
            Some(element) => Self::of_element(element),
            None => InspectorView::NoSelection,
        }
    }

    fn of_element(element: &DesignElement) -> Self {
        InspectorView::Element {
            id: element.id(),
            element_type: element.element_type(),
            swatch: element.swatch_color(),
            opacity: element.opacity(),
            text: element.as_text().map(TextControls::from_text),
        }
    }
}

/// Parses font size input. Fractions round to the nearest whole size;
/// anything non-numeric or below 1 is rejected.
pub fn parse_font_size(input: &str) -> Result<u32, InspectorError> {
    let invalid = || InspectorError::InvalidFontSize(input.to_owned());
    let value: f64 = input.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    let rounded = value.round();
    if rounded < 1.0 {
        return Err(invalid());
    }
    Ok((rounded as u32).min(MAX_FONT_SIZE))
}

/// Applies `edit` to the selected element. With nothing selected no mutation
/// is issued. Rejected input leaves the element untouched.
pub fn apply_edit(scene: &mut Scene, edit: InspectorEdit) -> Result<(), InspectorError> {
    let element = scene.selected_element().ok_or(InspectorError::NoSelection)?;
    let id = element.id();
    match patch_for(&edit, element)? {
        Some(patch) => scene.update(id, &patch),
        None => scene.remove(id),
    }
    Ok(())
}

/// The patch an edit produces, or `None` for delete.
fn patch_for(
    edit: &InspectorEdit,
    element: &DesignElement,
) -> Result<Option<ElementPatch>, InspectorError> {
    let patch = match (edit, element.kind()) {
        (InspectorEdit::Delete, _) => return Ok(None),
        (InspectorEdit::Opacity(opacity), _) => ElementPatch::default().with_opacity(*opacity),
        (InspectorEdit::Color(color), ElementKind::Text(_)) => {
            ElementPatch::default().with_color(*color)
        }
        (InspectorEdit::Color(color), ElementKind::Shape(_)) => {
            ElementPatch::default().with_background(*color)
        }
        (InspectorEdit::FontFamily(family), ElementKind::Text(_)) => {
            ElementPatch::default().with_font_family(*family)
        }
        (InspectorEdit::FontSize(input), ElementKind::Text(_)) => {
            let size = parse_font_size(input).inspect_err(|err| {
                log::warn!("Rejected font size for {}: {}", element.id(), err);
            })?;
            ElementPatch::default().with_font_size(size as f32)
        }
        (InspectorEdit::ToggleBold, ElementKind::Text(text)) => {
            ElementPatch::default().with_weight(text.weight.toggled_bold())
        }
        (InspectorEdit::ToggleItalic, ElementKind::Text(text)) => {
            let style = if text.is_italic() {
                FontStyle::Normal
            } else {
                FontStyle::Italic
            };
            ElementPatch::default().with_style(style)
        }
        (InspectorEdit::Align(align), ElementKind::Text(_)) => {
            ElementPatch::default().with_align(*align)
        }
        (edit, _) => {
            return Err(InspectorError::NotApplicable {
                control: control_name(edit),
                kind: element.element_type(),
            });
        }
    };
    Ok(Some(patch))
}

fn control_name(edit: &InspectorEdit) -> &'static str {
    match edit {
        InspectorEdit::Color(_) => "Color",
        InspectorEdit::FontFamily(_) => "Font family",
        InspectorEdit::FontSize(_) => "Font size",
        InspectorEdit::ToggleBold => "Bold",
        InspectorEdit::ToggleItalic => "Italic",
        InspectorEdit::Align(_) => "Alignment",
        InspectorEdit::Opacity(_) => "Opacity",
        InspectorEdit::Delete => "Delete",
    }
}
