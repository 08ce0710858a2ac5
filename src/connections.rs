// Faded lines between every pair of particles closer than a fifth of the surface.
// O(n^2) per frame.

use crate::color::Color;
use crate::config::{CONNECTION_DIVISOR, LINE_WIDTH, OPACITY_FALLOFF, PARTICLE_COLOR};
use crate::particle::Particle;
use crate::surface::{Bounds, Surface};

// Squared distance below which two particles are joined
pub fn threshold(bounds: Bounds) -> f64 {
    (bounds.width / CONNECTION_DIVISOR) * (bounds.height / CONNECTION_DIVISOR)
}

// Linear in squared distance, clamped at fully transparent
pub fn opacity(distance_squared: f64) -> f64 {
    (1.0 - distance_squared / OPACITY_FALLOFF).max(0.0)
}

// Self pairs are skipped, they would only stroke a zero length segment
pub fn connect<S: Surface>(
    particles: &[Particle],
    bounds: Bounds,
    surface: &mut S,
) -> Result<(), S::Error> {
    let threshold = threshold(bounds);
    let color = Color::from_u32(PARTICLE_COLOR);

    for (a, first) in particles.iter().enumerate() {
        for second in &particles[a + 1..] {
            let dx = first.x - second.x;
            let dy = first.y - second.y;
            let distance_squared = dx * dx + dy * dy;
            if distance_squared < threshold {
                surface.stroke_line(
                    (first.x, first.y),
                    (second.x, second.y),
                    &color.to_rgba_css(opacity(distance_squared)),
                    LINE_WIDTH,
                )?;
            }
        }
    }
    Ok(())
}
