use egui::{Pos2, Vec2};

// Common constants for all element types
pub const MIN_ELEMENT_SIZE: f32 = 2.0;
pub const DEFAULT_FONT_SIZE: f32 = 24.0;
pub const DEFAULT_OPACITY: f32 = 1.0;
/// Padding around laid-out text inside its hit region.
pub const TEXT_PADDING: f32 = 8.0;

/// A size is usable when both axes are finite and at least [`MIN_ELEMENT_SIZE`].
pub(crate) fn validate_size(size: Vec2) -> Result<Vec2, String> {
    if !size.x.is_finite() || !size.y.is_finite() {
        return Err(format!("Element size must be finite, got {size:?}"));
    }
    if size.x < MIN_ELEMENT_SIZE || size.y < MIN_ELEMENT_SIZE {
        return Err(format!(
            "Element dimensions too small (min: {}). Width: {}, Height: {}",
            MIN_ELEMENT_SIZE, size.x, size.y
        ));
    }
    Ok(size)
}

/// Clamps a constructor-supplied size into the valid range.
pub(crate) fn sanitize_size(size: Vec2) -> Vec2 {
    let axis = |v: f32| {
        if v.is_finite() {
            v.max(MIN_ELEMENT_SIZE)
        } else {
            MIN_ELEMENT_SIZE
        }
    };
    Vec2::new(axis(size.x), axis(size.y))
}

pub(crate) fn is_finite_pos(pos: Pos2) -> bool {
    pos.x.is_finite() && pos.y.is_finite()
}

pub(crate) fn sanitize_opacity(opacity: f32) -> f32 {
    if opacity.is_finite() {
        opacity.clamp(0.0, 1.0)
    } else {
        DEFAULT_OPACITY
    }
}
