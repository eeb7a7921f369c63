//! Pointer-driven selection, dragging and inline text editing.
//!
//! The controller owns no scene; every operation borrows the [`Scene`] it
//! mutates. Transitions:
//!
//! - `Idle -> Selected`: pointer down on an element (commits any open edit first)
//! - `Selected -> Dragging`: pointer moves while the pressing button is held
//! - `Dragging -> Selected`: button released
//! - `Selected -> EditingText`: double click on the selected text element
//! - `EditingText -> Selected`: edit surface loses focus; the buffer is committed
//! - pointer down on empty space clears the selection

mod state;

pub use state::{ElementState, InteractionState, PressAnchor};

use egui::{Key, Pos2, Vec2};

use crate::element::ElementPatch;
use crate::error::TransitionError;
use crate::id_generator::ElementId;
use crate::input::{CanvasTransform, InputEvent};
use crate::scene::Scene;

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn current_state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn element_state(&self, id: ElementId) -> ElementState {
        self.state.state_of(id)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, InteractionState::EditingText { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging { .. })
    }

    /// Delete is offered only from `Selected`.
    pub fn can_delete(&self) -> bool {
        matches!(self.state, InteractionState::Selected { .. })
    }

    /// The element being edited and the current edit buffer.
    pub fn editing(&self) -> Option<(ElementId, &str)> {
        match &self.state {
            InteractionState::EditingText { id, buffer } => Some((*id, buffer.as_str())),
            _ => None,
        }
    }

    pub fn edit_buffer_mut(&mut self) -> Option<&mut String> {
        match &mut self.state {
            InteractionState::EditingText { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    /// Replaces the edit buffer. Nothing reaches the scene until focus is lost.
    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(buffer) = self.edit_buffer_mut() {
            *buffer = text.into();
        }
    }

    /// Reconciles with selection changes made outside the controller (new
    /// elements from the library, deletes from the inspector). An open edit
    /// is committed before the controller follows the new selection.
    pub fn sync(&mut self, scene: &mut Scene) {
        let selected = scene.selected_id();
        if self.state.target() == selected {
            return;
        }
        if self.is_editing() {
            self.commit_edit(scene);
        }
        log::debug!(
            "Following external selection change: {} -> {:?}",
            self.state.name(),
            selected
        );
        self.state = InteractionState::selected(scene.selected_id());
    }

    /// Feeds one input event through the state machine. Screen positions are
    /// converted to canvas space with `transform`; `measured` supplies laid-out
    /// text sizes for hit testing.
    pub fn handle_event(
        &mut self,
        scene: &mut Scene,
        event: &InputEvent,
        transform: &CanvasTransform,
        measured: impl Fn(ElementId) -> Option<Vec2>,
    ) {
        match event {
            InputEvent::PointerDown { location } => {
                let pos = transform.to_canvas(location.position);
                self.pointer_down(scene, pos, location.is_in_canvas, measured);
            }
            InputEvent::PointerMove {
                location,
                button_held,
            } => {
                let pos = transform.to_canvas(location.position);
                self.pointer_move(scene, pos, *button_held);
            }
            InputEvent::PointerUp { .. } => self.pointer_up(),
            InputEvent::DoubleClick { location } => {
                let pos = transform.to_canvas(location.position);
                if let Err(err) = self.double_click(scene, pos, measured) {
                    log::debug!("Ignoring double click: {}", err);
                }
            }
            InputEvent::KeyDown { key, .. } => match key {
                Key::Delete | Key::Backspace => {
                    if let Err(err) = self.delete_selected(scene) {
                        log::debug!("Ignoring delete key: {}", err);
                    }
                }
                Key::Escape => self.focus_lost(scene),
                _ => {}
            },
        }
    }

    /// Pointer pressed at canvas position `pos`. `in_canvas` is false for
    /// presses on the workspace around the canvas, which count as empty space.
    pub fn pointer_down(
        &mut self,
        scene: &mut Scene,
        pos: Pos2,
        in_canvas: bool,
        measured: impl Fn(ElementId) -> Option<Vec2>,
    ) {
        let hit = if in_canvas {
            scene.hit_test(pos, measured)
        } else {
            None
        };

        if let InteractionState::EditingText { id, .. } = &self.state {
            if hit == Some(*id) {
                // Presses inside the edit surface belong to the editor
                return;
            }
            self.commit_edit(scene);
        }

        match hit.and_then(|id| scene.get(id)) {
            Some(element) => {
                let id = element.id();
                let offset = pos - element.position();
                scene.select(Some(id));
                log::debug!("{} -> Selected({})", self.state.name(), id);
                self.state = InteractionState::Selected {
                    id,
                    press: Some(PressAnchor {
                        pointer: pos,
                        offset,
                    }),
                };
            }
            None => {
                scene.select(None);
                self.state = InteractionState::Idle;
            }
        }
    }

    /// Pointer moved to canvas position `pos`. Each move recomputes the
    /// absolute position from the recorded offset, so repeated events never
    /// accumulate error.
    pub fn pointer_move(&mut self, scene: &mut Scene, pos: Pos2, button_held: bool) {
        match self.state {
            InteractionState::Selected {
                id,
                press: Some(anchor),
            } => {
                if !button_held {
                    self.state = InteractionState::Selected { id, press: None };
                } else if pos != anchor.pointer {
                    log::debug!("Selected({}) -> Dragging", id);
                    self.state = InteractionState::Dragging {
                        id,
                        offset: anchor.offset,
                    };
                    scene.update(id, &ElementPatch::position(pos - anchor.offset));
                }
            }
            InteractionState::Dragging { id, offset } => {
                if button_held {
                    scene.update(id, &ElementPatch::position(pos - offset));
                } else {
                    self.state = InteractionState::Selected { id, press: None };
                }
            }
            _ => {}
        }
    }

    pub fn pointer_up(&mut self) {
        match self.state {
            InteractionState::Dragging { id, .. } => {
                log::debug!("Dragging({}) -> Selected", id);
                self.state = InteractionState::Selected { id, press: None };
            }
            InteractionState::Selected { id, press: Some(_) } => {
                self.state = InteractionState::Selected { id, press: None };
            }
            _ => {}
        }
    }

    /// Opens inline editing on the selected text element under `pos`.
    pub fn double_click(
        &mut self,
        scene: &mut Scene,
        pos: Pos2,
        measured: impl Fn(ElementId) -> Option<Vec2>,
    ) -> Result<(), TransitionError> {
        let InteractionState::Selected { id, .. } = self.state else {
            return Err(TransitionError::InvalidStateTransition {
                from: self.state.name(),
                to: "EditingText",
            });
        };
        if scene.hit_test(pos, measured) != Some(id) {
            return Err(TransitionError::InvalidStateTransition {
                from: "Selected",
                to: "EditingText",
            });
        }
        self.begin_editing(scene, id)
    }

    /// Enters `EditingText` for the selected text element `id`.
    pub fn begin_editing(&mut self, scene: &Scene, id: ElementId) -> Result<(), TransitionError> {
        match self.state {
            InteractionState::Selected { id: selected, .. } if selected == id => {}
            _ => {
                return Err(TransitionError::InvalidStateTransition {
                    from: self.state.name(),
                    to: "EditingText",
                });
            }
        }
        let element = scene.get(id).ok_or(TransitionError::MissingElement(id))?;
        let text = element.as_text().ok_or(TransitionError::NotText(id))?;
        log::debug!("Selected({}) -> EditingText", id);
        self.state = InteractionState::EditingText {
            id,
            buffer: text.content.clone(),
        };
        Ok(())
    }

    /// The edit surface lost focus: commit the buffer and return to `Selected`.
    pub fn focus_lost(&mut self, scene: &mut Scene) {
        if self.is_editing() {
            self.commit_edit(scene);
        }
    }

    /// Removes the selected element. Only allowed from `Selected`.
    pub fn delete_selected(&mut self, scene: &mut Scene) -> Result<ElementId, TransitionError> {
        let InteractionState::Selected { id, .. } = self.state else {
            return Err(TransitionError::InvalidStateTransition {
                from: self.state.name(),
                to: "Deleted",
            });
        };
        if !scene.contains(id) {
            self.state = InteractionState::Idle;
            return Err(TransitionError::MissingElement(id));
        }
        scene.remove(id);
        self.state = InteractionState::Idle;
        Ok(id)
    }

    fn commit_edit(&mut self, scene: &mut Scene) {
        let state = std::mem::take(&mut self.state);
        if let InteractionState::EditingText { id, buffer } = state {
            log::debug!("EditingText({}) -> Selected, committing {} bytes", id, buffer.len());
            scene.update(id, &ElementPatch::content(buffer));
            self.state = if scene.contains(id) {
                InteractionState::Selected { id, press: None }
            } else {
                InteractionState::Idle
            };
        } else {
            self.state = state;
        }
    }
}
