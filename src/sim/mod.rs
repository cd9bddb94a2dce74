//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (creation order for obstacles and particles)
//! - No rendering or platform dependencies

pub mod collision;
pub mod command;
pub mod effects;
pub mod obstacles;
pub mod particles;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_overlap, resolve_collisions};
pub use command::Command;
pub use effects::{EffectKind, PostEffectSample, PostEffects};
pub use obstacles::{Obstacle, ObstacleField, ObstacleKind};
pub use particles::{EmitterSpec, Particle, ParticleSystem, Rgb};
pub use player::{JumpOutcome, Player};
pub use snapshot::{FrameSnapshot, ParticleSprite};
pub use state::{GamePhase, RunState, SettingsOrigin};
pub use tick::{TickInput, tick};
