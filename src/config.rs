// Fixed tuning constants for the particle field

// RRGGBBAA, #58a6ff fully opaque
pub const PARTICLE_COLOR: u32 = 0x58a6ffff;

// One particle per this many square pixels of surface
pub const AREA_PER_PARTICLE: f64 = 9000.0;

// Particle radius is drawn from [MIN_SIZE, MIN_SIZE + SIZE_SPREAD)
pub const MIN_SIZE: f64 = 1.0;
pub const SIZE_SPREAD: f64 = 2.0;

// Spawn velocity components lie in [-MAX_SPAWN_SPEED, MAX_SPAWN_SPEED)
pub const MAX_SPAWN_SPEED: f64 = 0.2;

// Soft range in pixels added around the pointer radius
pub const REPULSION_TOLERANCE: f64 = 50.0;
// Max displacement per frame from pointer repulsion
pub const MAX_REPULSION_FORCE: f64 = 3.0;
// Total width of the uniform jitter added to the force
pub const REPULSION_JITTER: f64 = 0.8;

// Pointer radius = (height / 100 + width / 100) * POINTER_RADIUS_SCALE
pub const POINTER_RADIUS_SCALE: f64 = 8.0;

// Lines are drawn when squared distance < (w / d) * (h / d)
pub const CONNECTION_DIVISOR: f64 = 5.0;
// Squared distance at which a line fades to fully transparent
pub const OPACITY_FALLOFF: f64 = 20000.0;
pub const LINE_WIDTH: f64 = 1.0;

pub const CANVAS_ID: &str = "background-canvas";
