// Tracks the pointer over the surface. No position means the pointer has
// left the surface and repulsion is switched off.

use crate::config::POINTER_RADIUS_SCALE;
use crate::surface::Bounds;

#[derive(Clone, Debug, PartialEq)]
pub struct PointerState {
    position: Option<(f64, f64)>,
    previous: Option<(f64, f64)>,
    changed: bool,
    radius: f64,
}

impl PointerState {
    // Radius is fixed from the bounds at creation, later resizes keep it
    pub fn new(bounds: Bounds) -> Self {
        PointerState {
            position: None,
            previous: None,
            changed: false,
            radius: PointerState::radius_for(bounds),
        }
    }

    pub fn radius_for(bounds: Bounds) -> f64 {
        (bounds.height / 100.0 + bounds.width / 100.0) * POINTER_RADIUS_SCALE
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.previous = self.position;
        self.position = Some((x, y));
        self.changed = self.previous != self.position;
    }

    pub fn leave(&mut self) {
        self.position = None;
        self.previous = None;
        self.changed = false;
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    pub fn previous(&self) -> Option<(f64, f64)> {
        self.previous
    }

    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}
