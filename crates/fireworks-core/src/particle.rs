use crate::config::ParticleParams;
use crate::constants::PARTICLE_TRAIL_LEN;
use crate::surface::{Hsla, Surface};
use crate::trail::Trail;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Outcome of one `Particle::advance` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Glow {
    Alive,
    Expired,
}

/// A spark thrown out by a burst. Slows down by friction, falls under a
/// constant gravity term and fades out at a fixed per-frame rate.
#[derive(Clone, Debug)]
pub struct Particle {
    position: DVec2,
    trail: Trail<PARTICLE_TRAIL_LEN>,
    angle: f64,
    speed: f64,
    friction: f64,
    gravity: f64,
    hue: f64,
    brightness: f64,
    opacity: f64,
    decay: f64,
}

impl Particle {
    /// Spawn at `position` with every random attribute drawn from `rng`; the
    /// hue lands within `params.hue_jitter` of `base_hue`.
    pub fn spawn<R: Rng + ?Sized>(
        position: DVec2,
        base_hue: f64,
        params: &ParticleParams,
        rng: &mut R,
    ) -> Self {
        let angle = crate::random::random_between(rng, 0.0, TAU);
        let speed = params.speed.sample(rng);
        let hue = crate::random::random_between(
            rng,
            base_hue - params.hue_jitter,
            base_hue + params.hue_jitter,
        );
        let brightness = params.brightness.sample(rng);
        let decay = params.decay.sample(rng);
        Self {
            position,
            trail: Trail::filled(position),
            angle,
            speed,
            friction: params.friction,
            gravity: params.gravity,
            hue,
            brightness,
            opacity: 1.0,
            decay,
        }
    }

    pub fn advance(&mut self) -> Glow {
        self.trail.push_front(self.position);
        self.speed *= self.friction;
        self.position.x += self.angle.cos() * self.speed;
        self.position.y += self.angle.sin() * self.speed + self.gravity;
        self.opacity -= self.decay;

        if self.opacity <= self.decay {
            Glow::Expired
        } else {
            Glow::Alive
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let tail = self.trail.oldest().unwrap_or(self.position);
        surface.stroke_segment(tail, self.position, self.color());
    }

    pub fn color(&self) -> Hsla {
        Hsla::new(self.hue, 100.0, self.brightness, self.opacity)
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn trail(&self) -> &Trail<PARTICLE_TRAIL_LEN> {
        &self.trail
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }
}
