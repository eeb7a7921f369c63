use egui::{Pos2, Vec2};
use rand::Rng;

/// Where newly created elements land: the work-area anchor plus a random
/// offset in `[0, jitter)` on each axis, so repeated creations don't stack
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub anchor: Pos2,
    pub jitter: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            anchor: Pos2::new(150.0, 150.0),
            jitter: 50.0,
        }
    }
}

impl Placement {
    pub fn new(anchor: Pos2, jitter: f32) -> Self {
        Self {
            anchor,
            jitter: if jitter.is_finite() { jitter.max(0.0) } else { 0.0 },
        }
    }

    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R) -> Pos2 {
        if self.jitter <= 0.0 {
            return self.anchor;
        }
        self.anchor + Vec2::new(rng.gen_range(0.0..self.jitter), rng.gen_range(0.0..self.jitter))
    }
}
