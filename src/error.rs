use thiserror::Error;

use crate::id_generator::ElementId;

/// Errors that can occur during interaction state transitions. None of these
/// end the editing session; callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Attempted to transition between incompatible states
    #[error("Cannot transition from {from} to {to}")]
    InvalidStateTransition {
        from: &'static str,
        to: &'static str,
    },
    /// Inline editing was requested on a non-text element
    #[error("Element {0} is not a text element")]
    NotText(ElementId),
    /// The target element is no longer in the scene
    #[error("Element {0} is not in the scene")]
    MissingElement(ElementId),
}
