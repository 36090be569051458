use crate::config::ProjectileParams;
use crate::constants::{
    PROJECTILE_TRAIL_LEN, TARGET_RADIUS_MAX, TARGET_RADIUS_MIN, TARGET_RADIUS_STEP,
};
use crate::surface::{Hsla, Surface};
use crate::trail::Trail;
use glam::DVec2;
use rand::Rng;

/// Outcome of one `Projectile::advance` call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[must_use]
pub enum Flight {
    Flying,
    /// The projectile reached its target and must be removed; the caller
    /// spawns the particle burst at the given point.
    Burst(DVec2),
}

/// An ascending shell travelling in a straight line from `source` to `target`
/// with geometrically increasing speed.
#[derive(Clone, Debug)]
pub struct Projectile {
    position: DVec2,
    source: DVec2,
    target: DVec2,
    distance_to_target: f64,
    distance_traveled: f64,
    trail: Trail<PROJECTILE_TRAIL_LEN>,
    angle: f64,
    speed: f64,
    acceleration: f64,
    brightness: f64,
    target_radius: f64,
}

impl Projectile {
    pub fn new(source: DVec2, target: DVec2, params: &ProjectileParams, brightness: f64) -> Self {
        let delta = target - source;
        Self {
            position: source,
            source,
            target,
            distance_to_target: source.distance(target),
            distance_traveled: 0.0,
            trail: Trail::filled(source),
            // atan2(0, 0) is 0, so a zero-length flight still has an angle
            angle: delta.y.atan2(delta.x),
            speed: params.start_speed,
            acceleration: params.acceleration,
            brightness,
            target_radius: TARGET_RADIUS_MIN,
        }
    }

    /// New projectile with a random brightness.
    pub fn launch<R: Rng + ?Sized>(
        source: DVec2,
        target: DVec2,
        params: &ProjectileParams,
        rng: &mut R,
    ) -> Self {
        let brightness = params.brightness.sample(rng);
        Self::new(source, target, params, brightness)
    }

    pub fn advance(&mut self) -> Flight {
        self.trail.push_front(self.position);

        if self.target_radius < TARGET_RADIUS_MAX {
            self.target_radius += TARGET_RADIUS_STEP;
        } else {
            self.target_radius = TARGET_RADIUS_MIN;
        }

        self.speed *= self.acceleration;
        let velocity = DVec2::new(self.angle.cos(), self.angle.sin()) * self.speed;

        self.distance_traveled = self.source.distance(self.position);
        if self.distance_traveled >= self.distance_to_target {
            return Flight::Burst(self.target);
        }
        self.position += velocity;
        Flight::Flying
    }

    /// Stroke from the oldest trail point to the head, tinted with the
    /// show-wide `hue`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, hue: f64) {
        let tail = self.trail.oldest().unwrap_or(self.position);
        surface.stroke_segment(tail, self.position, self.color(hue));
    }

    pub fn color(&self, hue: f64) -> Hsla {
        Hsla::new(hue, 100.0, self.brightness, 1.0)
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn source(&self) -> DVec2 {
        self.source
    }

    pub fn target(&self) -> DVec2 {
        self.target
    }

    pub fn distance_to_target(&self) -> f64 {
        self.distance_to_target
    }

    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    pub fn trail(&self) -> &Trail<PROJECTILE_TRAIL_LEN> {
        &self.trail
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Pulsing marker radius, cycling between 1 and 8.
    pub fn target_radius(&self) -> f64 {
        self.target_radius
    }
}
