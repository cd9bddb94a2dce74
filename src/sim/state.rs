//! Run state and core simulation types
//!
//! One owned `RunState` holds everything that evolves during play. Each
//! component gets `&mut` access to its own field during the tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::{EffectKind, PostEffects};
use super::obstacles::ObstacleField;
use super::particles::{ParticleSystem, Rgb};
use super::player::Player;
use crate::settings::Settings;

/// Where the settings screen was opened from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsOrigin {
    Menu,
    Paused,
}

impl SettingsOrigin {
    /// Phase to return to on "Back"
    pub fn phase(&self) -> GamePhase {
        match self {
            SettingsOrigin::Menu => GamePhase::Menu,
            SettingsOrigin::Paused => GamePhase::Paused,
        }
    }
}

/// Top-level mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen
    Menu,
    /// Active run
    Playing,
    /// Run frozen mid-way
    Paused,
    /// Difficulty/effects screen
    Settings { origin: SettingsOrigin },
    /// Run ended by a collision
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "Menu",
            GamePhase::Playing => "Playing",
            GamePhase::Paused => "Paused",
            GamePhase::Settings { .. } => "Settings",
            GamePhase::GameOver => "GameOver",
        }
    }
}

/// Complete simulation state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct RunState {
    /// Seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Current run score (grows while Playing, frozen otherwise)
    pub score: f32,
    /// Best floored score this session
    pub best: u32,
    /// Simulation tick counter (never reset)
    pub time_ticks: u64,
    /// Simulated seconds (never reset)
    pub clock: f64,
    pub player: Player,
    pub obstacles: ObstacleField,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    pub effects: PostEffects,
    pub settings: Settings,
    /// Gameplay RNG
    pub rng: Pcg32,
}

impl RunState {
    /// Create a new state on the title screen with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            score: 0.0,
            best: 0,
            time_ticks: 0,
            clock: 0.0,
            player: Player::default(),
            obstacles: ObstacleField::new(),
            particles: ParticleSystem::new(),
            effects: PostEffects::default(),
            settings,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Clear everything belonging to a single run. Best score survives.
    pub fn reset_run(&mut self) {
        self.player = Player::default();
        self.score = 0.0;
        self.obstacles.clear();
        self.particles.clear();
        self.effects = PostEffects::default();
    }

    /// Reset and enter Playing
    pub fn start_run(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Playing;
        log::info!(
            "Run started ({}, effects {})",
            self.settings.difficulty.as_str(),
            self.settings.effects.as_str()
        );
    }

    /// Reset and return to the title screen
    pub fn go_to_menu(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Menu;
        log::info!("Back to menu (best {})", self.best);
    }

    /// Current scroll speed (pixels/sec)
    pub fn speed(&self) -> f32 {
        self.settings.difficulty.speed()
    }

    /// Current seconds between spawns
    pub fn spawn_interval(&self) -> f32 {
        self.settings.difficulty.spawn_interval()
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Impact: shake + chroma + flash, plus a hit burst at `origin`
    pub fn impact(&mut self, origin: Vec2, tint: Rgb, power: f32) {
        self.effects.trigger(EffectKind::Impact, power);
        let count = (16.0 * power) as usize;
        self.particles.emit_hit_burst(&mut self.rng, origin, count, tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_state_on_menu() {
        let state = RunState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.best, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.player.y, GROUND_Y);
    }

    #[test]
    fn test_reset_run_clears_run_but_keeps_best() {
        let mut state = RunState::new(1);
        state.start_run();
        state.best = 77;
        state.score = 50.0;
        state.player.y = GROUND_Y - 100.0;
        state.player.long_jump_timer = 0.2;
        let mut rng = Pcg32::seed_from_u64(9);
        state.obstacles.spawn(&mut rng);
        state.impact(Vec2::new(100.0, 100.0), Rgb(255, 255, 255), 1.0);

        state.reset_run();
        assert_eq!(state.score, 0.0);
        assert_eq!(state.best, 77);
        assert_eq!(state.player, Player::default());
        assert!(state.obstacles.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.effects, PostEffects::default());
    }

    #[test]
    fn test_impact_scales_burst_with_power() {
        let mut state = RunState::new(1);
        state.impact(Vec2::ZERO, Rgb(250, 214, 120), 0.55);
        assert_eq!(state.particles.len(), 8);
        assert!((state.effects.flash_time - 0.1 * 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_settings_origin_phase() {
        assert_eq!(SettingsOrigin::Menu.phase(), GamePhase::Menu);
        assert_eq!(SettingsOrigin::Paused.phase(), GamePhase::Paused);
    }
}
