//! Wizard Rush - a side-scrolling arcade runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, particles, post-effects)
//! - `settings`: Difficulty and effects presets chosen by the menu layer

pub mod settings;
pub mod sim;

pub use settings::{Difficulty, EffectsLevel, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions (world units are pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Player feet rest here when grounded
    pub const GROUND_Y: f32 = SCREEN_HEIGHT - 170.0;
    /// Tolerance for the derived grounded check
    pub const GROUND_EPSILON: f32 = 0.1;
    /// Fixed horizontal player position
    pub const PLAYER_X: f32 = 220.0;

    /// Player physics
    pub const GRAVITY: f32 = 1500.0;
    pub const JUMP_FORCE: f32 = 690.0;
    /// Max seconds between two jump presses to count as a double-tap
    pub const LONG_JUMP_WINDOW: f32 = 0.28;
    /// Launch multiplier for a grounded double-tap
    pub const DOUBLE_TAP_BOOST: f32 = 1.2;
    /// Long-jump timer armed by a grounded double-tap
    pub const LONG_JUMP_DURATION: f32 = 0.24;
    /// Mid-air assist: velocity floor as a fraction of jump force
    pub const AIR_ASSIST_FACTOR: f32 = 0.55;
    /// Long-jump timer armed by the mid-air assist
    pub const AIR_ASSIST_DURATION: f32 = 0.2;
    /// Gravity multiplier while the long-jump timer runs
    pub const LONG_JUMP_GRAVITY_SCALE: f32 = 0.58;
    /// Landing speed that counts as a hard landing
    pub const HARD_LANDING_SPEED: f32 = 760.0;

    /// Obstacles spawn just past the right edge
    pub const SPAWN_X: f32 = SCREEN_WIDTH + 30.0;
    /// Obstacles are pruned once their right edge passes this
    pub const PRUNE_X: f32 = -40.0;
    /// Obstacle bottoms sit this far below the player ground line
    pub const OBSTACLE_GROUND_OFFSET: f32 = 60.0;
    /// Probability a spawned obstacle is a Wall
    pub const WALL_CHANCE: f64 = 0.28;
    /// Cosmetic pulse speed (radians/sec)
    pub const OBSTACLE_PULSE_RATE: f32 = 3.2;

    /// Player hitbox, relative to (PLAYER_X, player y)
    pub const HITBOX_OFFSET_X: f32 = -28.0;
    pub const HITBOX_OFFSET_Y: f32 = -106.0;
    pub const HITBOX_WIDTH: f32 = 56.0;
    pub const HITBOX_HEIGHT: f32 = 132.0;

    /// Wand tip offset from (PLAYER_X, player y) used for spell trails
    pub const WAND_OFFSET_X: f32 = 42.0;
    pub const WAND_OFFSET_Y: f32 = -18.0;
}

/// Clamp a ratio into [0, 1]
#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
