//! Run state of the show.
//!
//! `Running` is terminal: once the frame driver has started it reschedules
//! itself until the page goes away.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

impl RunState {
    /// Move to `Running`. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        match self {
            RunState::Idle => {
                *self = RunState::Running;
                true
            }
            RunState::Running => false,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

/// Per-frame summary returned by `Simulation::tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Projectiles that reached their target this frame.
    pub bursts: usize,
    /// Particles spawned by those bursts.
    pub particles_spawned: usize,
    /// Particles removed after fading out.
    pub particles_expired: usize,
    /// Projectiles launched by the scheduler (0 or 1).
    pub launches: usize,
}
