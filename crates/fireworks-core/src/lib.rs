pub mod audio;
pub mod config;
pub mod constants;
pub mod particle;
pub mod projectile;
pub mod random;
pub mod scheduler;
pub mod simulation;
pub mod state;
pub mod surface;
pub mod trail;

pub use audio::*;
pub use config::*;
pub use particle::*;
pub use projectile::*;
pub use random::*;
pub use scheduler::*;
pub use simulation::*;
pub use state::*;
pub use surface::*;
pub use trail::*;

pub use glam::DVec2;
