use crate::audio::AudioCue;
use crate::config::{ConfigError, SimulationConfig};
use crate::particle::{Glow, Particle};
use crate::projectile::{Flight, Projectile};
use crate::random::random_between;
use crate::scheduler::Scheduler;
use crate::state::{RunState, TickReport};
use crate::surface::Surface;
use glam::DVec2;
use rand::prelude::*;

/// The firework show: live projectiles and particles, the colour cycle and
/// the launch scheduler.
///
/// Typical usage:
/// - Construct with `Simulation::new(config, bounds, seed)`
/// - Call `start()` once from the frame driver, then `tick(surface, cue)` on
///   every display refresh
/// - Call `launch_burst(n)` / `celebrate()` from UI triggers at any time
///
/// All randomness comes from the seeded RNG, so two simulations built with the
/// same seed and driven identically produce identical shows.
pub struct Simulation {
    config: SimulationConfig,
    projectiles: Vec<Projectile>,
    particles: Vec<Particle>,
    hue: f64,
    scheduler: Scheduler,
    bounds: DVec2,
    state: RunState,
    rng: StdRng,
    frame: u64,
}

impl Simulation {
    pub fn new(config: SimulationConfig, bounds: DVec2, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "[sim] new bounds={:.0}x{:.0} interval={} burst={} seed={}",
            bounds.x,
            bounds.y,
            config.spawn_interval,
            config.particles_per_burst,
            seed
        );
        Ok(Self {
            hue: config.initial_hue.rem_euclid(360.0),
            scheduler: Scheduler::new(config.spawn_interval),
            config,
            projectiles: Vec::new(),
            particles: Vec::new(),
            bounds,
            state: RunState::Idle,
            rng: StdRng::seed_from_u64(seed),
            frame: 0,
        })
    }

    /// Enter the running state. Returns `false` if the show was already
    /// running, in which case the caller must not start another driver.
    pub fn start(&mut self) -> bool {
        let started = self.state.start();
        if started {
            log::info!("[sim] running");
        }
        started
    }

    /// One frame: colour drift, fade + additive compositing, physics for all
    /// live entities, then the scheduler.
    pub fn tick<S, A>(&mut self, surface: &mut S, cue: &mut A) -> TickReport
    where
        S: Surface + ?Sized,
        A: AudioCue + ?Sized,
    {
        let mut report = TickReport::default();
        self.frame += 1;
        self.bounds = surface.size();
        self.hue = (self.hue + self.config.hue_step).rem_euclid(360.0);

        surface.fade(self.config.fade_opacity);
        surface.begin_additive();

        // Walk backwards and swap_remove: the element moved into slot `i`
        // comes from a higher index that was already visited this pass.
        for i in (0..self.projectiles.len()).rev() {
            let projectile = &mut self.projectiles[i];
            projectile.render(surface, self.hue);
            if let Flight::Burst(at) = projectile.advance() {
                self.projectiles.swap_remove(i);
                report.particles_spawned += self.burst(at, cue);
                report.bursts += 1;
            }
        }

        for i in (0..self.particles.len()).rev() {
            let particle = &mut self.particles[i];
            particle.render(surface);
            if particle.advance() == Glow::Expired {
                self.particles.swap_remove(i);
                report.particles_expired += 1;
            }
        }

        if self.scheduler.step() {
            let target = self.random_target();
            self.launch_toward(target);
            log::trace!("[sim] frame {} auto launch", self.frame);
            report.launches += 1;
        }
        report
    }

    fn burst<A: AudioCue + ?Sized>(&mut self, at: DVec2, cue: &mut A) -> usize {
        let count = self.config.particles_per_burst;
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle::spawn(at, self.hue, &self.config.particle, &mut self.rng);
            self.particles.push(particle);
        }
        cue.play_explosion();
        log::debug!(
            "[sim] burst at ({:.1},{:.1}) hue={:.1} live_particles={}",
            at.x,
            at.y,
            self.hue,
            self.particles.len()
        );
        count
    }

    /// Launch `count` projectiles right away, each toward its own random
    /// target. The scheduler counter is not touched.
    pub fn launch_burst(&mut self, count: usize) -> usize {
        for _ in 0..count {
            let target = self.random_target();
            self.launch_toward(target);
        }
        log::debug!("[sim] manual burst of {}", count);
        count
    }

    /// Celebratory trigger: a manual burst of the configured size.
    pub fn celebrate(&mut self) -> usize {
        self.launch_burst(self.config.manual_burst_size)
    }

    /// Launch one projectile from the launch point toward `target`.
    pub fn launch_toward(&mut self, target: DVec2) {
        let projectile = Projectile::launch(
            self.launch_point(),
            target,
            &self.config.projectile,
            &mut self.rng,
        );
        self.projectiles.push(projectile);
    }

    /// Bottom-centre of the surface.
    pub fn launch_point(&self) -> DVec2 {
        DVec2::new(self.bounds.x / 2.0, self.bounds.y)
    }

    /// Uniform over the full width and the upper half of the height.
    fn random_target(&mut self) -> DVec2 {
        DVec2::new(
            random_between(&mut self.rng, 0.0, self.bounds.x),
            random_between(&mut self.rng, 0.0, self.bounds.y / 2.0),
        )
    }

    /// Update the bounds used for launches made before the next tick.
    pub fn resize(&mut self, bounds: DVec2) {
        self.bounds = bounds;
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
