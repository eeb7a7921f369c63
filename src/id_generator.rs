use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all elements
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

/// Identifier of a placed element. Only [`generate_id`] mints new values, so an
/// id is never handed out twice within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub fn generate_id() -> ElementId {
    ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst))
}
