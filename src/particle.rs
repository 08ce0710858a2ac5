// Particle struct to keep track of individual position, velocity, size and color,
// and to move itself away from the pointer each frame

use crate::color::Color;
use crate::config::{
    MAX_REPULSION_FORCE, MAX_SPAWN_SPEED, MIN_SIZE, PARTICLE_COLOR, REPULSION_JITTER,
    REPULSION_TOLERANCE, SIZE_SPREAD,
};
use crate::pointer::PointerState;
use crate::surface::{Bounds, Surface};
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub direction_x: f64,
    pub direction_y: f64,
    pub size: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(
        x: f64,
        y: f64,
        direction_x: f64,
        direction_y: f64,
        size: f64,
        color: Color,
    ) -> Particle {
        Particle {
            x,
            y,
            direction_x,
            direction_y,
            size,
            color,
        }
    }

    // Random placement away from the edges by twice the radius
    pub fn spawn<R: Rng>(bounds: Bounds, rng: &mut R) -> Particle {
        let size = rng.gen::<f64>() * SIZE_SPREAD + MIN_SIZE;
        let inset = size * 2.0;
        let x = rng.gen::<f64>() * ((bounds.width - inset) - inset) + inset;
        let y = rng.gen::<f64>() * ((bounds.height - inset) - inset) + inset;
        let direction_x = rng.gen::<f64>() * MAX_SPAWN_SPEED * 2.0 - MAX_SPAWN_SPEED;
        let direction_y = rng.gen::<f64>() * MAX_SPAWN_SPEED * 2.0 - MAX_SPAWN_SPEED;
        Particle::new(
            x,
            y,
            direction_x,
            direction_y,
            size,
            Color::from_u32(PARTICLE_COLOR),
        )
    }

    pub fn update<R: Rng>(&mut self, pointer: &PointerState, bounds: Bounds, rng: &mut R) {
        self.x += self.direction_x;
        self.y += self.direction_y;

        if self.x > bounds.width || self.x < 0.0 {
            self.direction_x = -self.direction_x;
        }
        if self.y > bounds.height || self.y < 0.0 {
            self.direction_y = -self.direction_y;
        }

        if let Some((pointer_x, pointer_y)) = pointer.position() {
            self.repel(pointer_x, pointer_y, pointer.radius(), bounds, rng);
        }
    }

    // Moves position directly, velocity is left untouched
    fn repel<R: Rng>(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
        radius: f64,
        bounds: Bounds,
        rng: &mut R,
    ) {
        let offset = glm::vec2(self.x - pointer_x, self.y - pointer_y);
        let distance = glm::length(&offset);
        let effective_radius = radius + self.size + REPULSION_TOLERANCE;

        if distance <= 0.0 || distance >= effective_radius {
            return;
        }

        let push = 1.0 - distance / effective_radius;
        let jitter = (rng.gen::<f64>() - 0.5) * REPULSION_JITTER;
        let force = push * MAX_REPULSION_FORCE + jitter;

        let away = offset / distance;
        self.x += away[0] * force;
        self.y += away[1] * force;

        // Keep the whole disc on the surface
        if self.x > bounds.width - self.size {
            self.x = bounds.width - self.size;
        }
        if self.x < self.size {
            self.x = self.size;
        }
        if self.y > bounds.height - self.size {
            self.y = bounds.height - self.size;
        }
        if self.y < self.size {
            self.y = self.size;
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_circle(self.x, self.y, self.size, &self.color.to_css())
    }
}
