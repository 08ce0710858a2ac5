// Owns the particle collection and the random source used to spawn and jitter it

use crate::config::AREA_PER_PARTICLE;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::{Bounds, Surface};
use rand::Rng;

pub struct Simulation<R: Rng> {
    particles: Vec<Particle>,
    rng: R,
}

// Zero for empty or negative surfaces
pub fn particle_count(bounds: Bounds) -> usize {
    (bounds.area() / AREA_PER_PARTICLE).floor() as usize
}

impl<R: Rng> Simulation<R> {
    pub fn new(rng: R) -> Self {
        Simulation {
            particles: Vec::new(),
            rng,
        }
    }

    // Throws away the previous particles and spawns a fresh set
    pub fn init(&mut self, bounds: Bounds) {
        let count = particle_count(bounds);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(bounds, &mut self.rng));
        }
        self.particles = particles;
    }

    pub fn tick(&mut self, pointer: &PointerState, bounds: Bounds) {
        let rng = &mut self.rng;
        for particle in &mut self.particles {
            particle.update(pointer, bounds, rng);
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for particle in &self.particles {
            particle.draw(surface)?;
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
