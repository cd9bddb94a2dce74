//! Read-only per-frame view handed to the renderer
//!
//! The renderer never borrows live state; it gets an owned snapshot taken
//! after the tick has fully finished.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::effects::PostEffectSample;
use super::obstacles::Obstacle;
use super::particles::Rgb;
use super::state::{GamePhase, RunState};
use crate::settings::Settings;

/// One particle as the renderer draws it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleSprite {
    pub pos: Vec2,
    pub radius: u32,
    pub color: Rgb,
    pub alpha: u8,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    /// For cosmetic animation (bobbing, twinkles)
    pub time_ticks: u64,
    pub player_y: f32,
    pub airborne: bool,
    /// Long-jump arc in progress (drawn with a glow)
    pub long_jump: bool,
    pub obstacles: Vec<Obstacle>,
    pub particles: Vec<ParticleSprite>,
    pub effects: PostEffectSample,
    /// Floored score; only shown while Playing or on the game over screen
    pub score: Option<u32>,
    pub best: u32,
    pub settings: Settings,
}

impl RunState {
    /// Capture a frame. Shake jitter is seeded from the run seed and tick so
    /// sampling never disturbs the gameplay RNG.
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut jitter_rng =
            Pcg32::seed_from_u64(self.seed ^ self.time_ticks.wrapping_mul(0x9E37_79B9_7F4A_7C15));

        let score = match self.phase {
            GamePhase::Playing | GamePhase::GameOver => Some(self.score.floor() as u32),
            _ => None,
        };

        FrameSnapshot {
            phase: self.phase,
            time_ticks: self.time_ticks,
            player_y: self.player.y,
            airborne: !self.player.is_grounded(),
            long_jump: self.player.long_jump_active(),
            obstacles: self.obstacles.as_slice().to_vec(),
            particles: self
                .particles
                .iter()
                .map(|p| ParticleSprite {
                    pos: p.pos,
                    radius: p.radius(),
                    color: p.color,
                    alpha: p.alpha(),
                })
                .collect(),
            effects: self.effects.sample(&mut jitter_rng),
            score,
            best: self.best,
            settings: self.settings,
        }
    }
}
