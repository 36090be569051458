// Default tuning for the firework show. `SimulationConfig::default()` is built
// from these; trail lengths are compile-time because they size the trail arrays.

// Scheduler
pub const SPAWN_INTERVAL_FRAMES: u32 = 20; // counter value that triggers an automatic launch
pub const MANUAL_BURST_SIZE: usize = 5; // projectiles per celebratory trigger

// Colour cycling
pub const INITIAL_HUE: f64 = 120.0; // green
pub const HUE_STEP: f64 = 0.5; // degrees per frame

// Compositing
pub const FADE_OPACITY: f64 = 0.5; // alpha of the destination-out wash each frame

// Projectile
pub const PROJECTILE_TRAIL_LEN: usize = 3;
pub const PROJECTILE_START_SPEED: f64 = 2.0;
pub const PROJECTILE_ACCELERATION: f64 = 1.05;
pub const PROJECTILE_BRIGHTNESS_MIN: f64 = 50.0;
pub const PROJECTILE_BRIGHTNESS_MAX: f64 = 70.0;
pub const TARGET_RADIUS_MIN: f64 = 1.0;
pub const TARGET_RADIUS_MAX: f64 = 8.0;
pub const TARGET_RADIUS_STEP: f64 = 0.3;

// Particle
pub const PARTICLE_TRAIL_LEN: usize = 5;
pub const PARTICLES_PER_BURST: usize = 30;
pub const PARTICLE_FRICTION: f64 = 0.95;
pub const PARTICLE_GRAVITY: f64 = 1.0;
pub const PARTICLE_SPEED_MIN: f64 = 1.0;
pub const PARTICLE_SPEED_MAX: f64 = 10.0;
pub const PARTICLE_DECAY_MIN: f64 = 0.015;
pub const PARTICLE_DECAY_MAX: f64 = 0.03;
pub const PARTICLE_BRIGHTNESS_MIN: f64 = 50.0;
pub const PARTICLE_BRIGHTNESS_MAX: f64 = 80.0;
pub const PARTICLE_HUE_JITTER: f64 = 20.0; // +/- degrees around the global hue

// Explosion tone
pub const TONE_START_HZ: f32 = 100.0;
pub const TONE_END_HZ: f32 = 0.01; // exponential ramps cannot target zero
pub const TONE_START_GAIN: f32 = 0.1;
pub const TONE_END_GAIN: f32 = 0.001;
pub const TONE_DURATION_SEC: f64 = 0.5;
