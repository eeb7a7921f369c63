use egui::{Pos2, Vec2};

use crate::id_generator::ElementId;

/// Where the pointer went down on a selected element, recorded so a later
/// move can turn the press into a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressAnchor {
    /// Canvas position of the press
    pub pointer: Pos2,
    /// Pointer position minus element position at press time
    pub offset: Vec2,
}

/// The controller's single active state. Only one element is ever selected,
/// dragged or edited at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Selected {
        id: ElementId,
        /// Set while the button that selected the element is still held
        press: Option<PressAnchor>,
    },
    Dragging {
        id: ElementId,
        offset: Vec2,
    },
    EditingText {
        id: ElementId,
        buffer: String,
    },
}

/// How a single element currently appears to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementState {
    Idle,
    Selected,
    Dragging,
    EditingText,
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "Idle",
            InteractionState::Selected { .. } => "Selected",
            InteractionState::Dragging { .. } => "Dragging",
            InteractionState::EditingText { .. } => "EditingText",
        }
    }

    pub fn target(&self) -> Option<ElementId> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Selected { id, .. }
            | InteractionState::Dragging { id, .. }
            | InteractionState::EditingText { id, .. } => Some(*id),
        }
    }

    pub fn state_of(&self, element: ElementId) -> ElementState {
        if self.target() != Some(element) {
            return ElementState::Idle;
        }
        match self {
            InteractionState::Idle => ElementState::Idle,
            InteractionState::Selected { .. } => ElementState::Selected,
            InteractionState::Dragging { .. } => ElementState::Dragging,
            InteractionState::EditingText { .. } => ElementState::EditingText,
        }
    }

    pub(crate) fn selected(id: Option<ElementId>) -> Self {
        match id {
            Some(id) => InteractionState::Selected { id, press: None },
            None => InteractionState::Idle,
        }
    }
}
