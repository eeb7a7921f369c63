use egui::{Pos2, Vec2};

use crate::element::{DesignElement, ElementPatch};
use crate::id_generator::ElementId;

/// The ordered set of placed elements plus the current selection.
///
/// Insertion order is paint order: later elements draw on top. The selection
/// always refers to an element currently in the scene or is `None`.
/// Operations naming an id that is not present are ignored.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: Vec<DesignElement>,
    selected: Option<ElementId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `element` on top of the paint order and selects it.
    pub fn add(&mut self, element: DesignElement) {
        let id = element.id();
        if self.contains(id) {
            log::warn!("Element {} is already in the scene; ignoring add", id);
            return;
        }
        log::info!("Adding {} element {}", element.element_type(), id);
        self.elements.push(element);
        self.selected = Some(id);
    }

    /// Merges `patch` into the element with `id`.
    pub fn update(&mut self, id: ElementId, patch: &ElementPatch) {
        match self.elements.iter_mut().find(|e| e.id() == id) {
            Some(element) => {
                if !patch.is_empty() && element.apply(patch) {
                    log::debug!("Updated element {}", id);
                }
            }
            None => log::debug!("Ignoring update for missing element {}", id),
        }
    }

    /// Removes the element with `id`, clearing the selection if it was selected.
    pub fn remove(&mut self, id: ElementId) {
        let Some(index) = self.index_of(id) else {
            log::debug!("Ignoring remove for missing element {}", id);
            return;
        };
        self.elements.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        log::info!("Removed element {}", id);
    }

    /// Sets or clears the selection. Selecting a missing id does nothing.
    pub fn select(&mut self, id: Option<ElementId>) {
        match id {
            Some(id) if !self.contains(id) => {
                log::debug!("Ignoring selection of missing element {}", id);
            }
            _ => self.selected = id,
        }
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&DesignElement> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: ElementId) -> Option<&DesignElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    /// Elements in paint order.
    pub fn elements(&self) -> &[DesignElement] {
        &self.elements
    }

    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(DesignElement::id).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The top-most element under `pos`. `measured` supplies laid-out text
    /// sizes where known.
    pub fn hit_test(
        &self,
        pos: Pos2,
        measured: impl Fn(ElementId) -> Option<Vec2>,
    ) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.hit_test(pos, measured(e.id())))
            .map(DesignElement::id)
    }
}
