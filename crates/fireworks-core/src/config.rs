//! Tunable parameters for the simulation.
//!
//! Everything defaults to the values in `constants.rs`. A config is checked
//! once when the `Simulation` is built; entities trust it afterwards.

use crate::constants::*;
use crate::random::RandomRange;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{name} = {value} is out of bounds (expected {expected})")]
    OutOfBounds {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Parameters for the ascending projectiles.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectileParams {
    pub start_speed: f64,
    /// Per-frame speed multiplier, must exceed 1.
    pub acceleration: f64,
    pub brightness: RandomRange,
}

impl Default for ProjectileParams {
    fn default() -> Self {
        Self {
            start_speed: PROJECTILE_START_SPEED,
            acceleration: PROJECTILE_ACCELERATION,
            brightness: RandomRange::new(PROJECTILE_BRIGHTNESS_MIN, PROJECTILE_BRIGHTNESS_MAX),
        }
    }
}

/// Parameters for burst particles.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    /// Per-frame speed multiplier, strictly between 0 and 1.
    pub friction: f64,
    /// Constant added to the vertical displacement each frame (screen y grows downwards).
    pub gravity: f64,
    pub speed: RandomRange,
    /// Opacity lost per frame; drawn once per particle.
    pub decay: RandomRange,
    pub brightness: RandomRange,
    pub hue_jitter: f64,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            friction: PARTICLE_FRICTION,
            gravity: PARTICLE_GRAVITY,
            speed: RandomRange::new(PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX),
            decay: RandomRange::new(PARTICLE_DECAY_MIN, PARTICLE_DECAY_MAX),
            brightness: RandomRange::new(PARTICLE_BRIGHTNESS_MIN, PARTICLE_BRIGHTNESS_MAX),
            hue_jitter: PARTICLE_HUE_JITTER,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub spawn_interval: u32,
    pub particles_per_burst: usize,
    pub manual_burst_size: usize,
    pub fade_opacity: f64,
    pub initial_hue: f64,
    pub hue_step: f64,
    pub projectile: ProjectileParams,
    pub particle: ParticleParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            spawn_interval: SPAWN_INTERVAL_FRAMES,
            particles_per_burst: PARTICLES_PER_BURST,
            manual_burst_size: MANUAL_BURST_SIZE,
            fade_opacity: FADE_OPACITY,
            initial_hue: INITIAL_HUE,
            hue_step: HUE_STEP,
            projectile: ProjectileParams::default(),
            particle: ParticleParams::default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("projectile brightness", &self.projectile.brightness)?;
        check_range("particle speed", &self.particle.speed)?;
        check_range("particle decay", &self.particle.decay)?;
        check_range("particle brightness", &self.particle.brightness)?;

        check_finite("initial_hue", self.initial_hue)?;
        check_finite("hue_step", self.hue_step)?;
        check_finite("particle.gravity", self.particle.gravity)?;
        check_finite("particle.hue_jitter", self.particle.hue_jitter)?;

        if !(self.fade_opacity >= 0.0 && self.fade_opacity <= 1.0) {
            return Err(ConfigError::OutOfBounds {
                name: "fade_opacity",
                value: self.fade_opacity,
                expected: "0 <= x <= 1",
            });
        }
        if !(self.projectile.start_speed > 0.0) {
            return Err(ConfigError::OutOfBounds {
                name: "projectile.start_speed",
                value: self.projectile.start_speed,
                expected: "x > 0",
            });
        }
        if !(self.projectile.acceleration > 1.0) {
            return Err(ConfigError::OutOfBounds {
                name: "projectile.acceleration",
                value: self.projectile.acceleration,
                expected: "x > 1",
            });
        }
        if !(self.particle.friction > 0.0 && self.particle.friction < 1.0) {
            return Err(ConfigError::OutOfBounds {
                name: "particle.friction",
                value: self.particle.friction,
                expected: "0 < x < 1",
            });
        }
        if !(self.particle.speed.min > 0.0) {
            return Err(ConfigError::OutOfBounds {
                name: "particle.speed.min",
                value: self.particle.speed.min,
                expected: "x > 0",
            });
        }
        // A zero decay would keep a particle alive forever.
        if !(self.particle.decay.min > 0.0) {
            return Err(ConfigError::OutOfBounds {
                name: "particle.decay.min",
                value: self.particle.decay.min,
                expected: "x > 0",
            });
        }
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfBounds {
            name,
            value,
            expected: "finite",
        })
    }
}

fn check_range(name: &'static str, range: &RandomRange) -> Result<(), ConfigError> {
    if !range.is_finite() {
        let value = if range.min.is_finite() {
            range.max
        } else {
            range.min
        };
        return Err(ConfigError::OutOfBounds {
            name,
            value,
            expected: "finite bounds",
        });
    }
    if range.is_ordered() {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange {
            name,
            min: range.min,
            max: range.max,
        })
    }
}
