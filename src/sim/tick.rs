//! Fixed timestep simulation tick
//!
//! Core game loop that advances the run one step. Playing-only logic is
//! gated on the phase; particles and post-effects always keep fading.

use glam::Vec2;
use rand::Rng;

use super::collision::resolve_collisions;
use super::command::Command;
use super::effects::EffectKind;
use super::obstacles::ObstacleKind;
use super::particles::{Rgb, SPARK_TINT};
use super::player::JumpOutcome;
use super::state::{GamePhase, RunState};
use crate::consts::*;

/// Gold used for long-jump feedback
const LONG_JUMP_TINT: Rgb = Rgb(250, 214, 120);
const JUMP_DUST_TINT: Rgb = Rgb(215, 232, 255);
const AIR_ASSIST_TINT: Rgb = Rgb(246, 225, 128);
const FOOTSTEP_TINT: Rgb = Rgb(164, 184, 206);
const WALL_BREAK_TINT: Rgb = Rgb(205, 170, 255);

/// Impact strength of a double-tap launch
const LONG_JUMP_IMPACT_POWER: f32 = 0.55;
/// Impact strength of a spell breaking a wall
const WALL_BREAK_IMPACT_POWER: f32 = 0.8;
/// Sparks along the wand-to-target trail
const SPELL_TRAIL_POINTS: usize = 10;
const SPELL_BURST_COUNT: usize = 12;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump key pressed at this timestamp (monotonic seconds)
    pub jump: Option<f64>,
    /// Cast spell key
    pub cast: bool,
    /// Escape key: pause toggle / leave settings
    pub pause: bool,
    /// Restart key
    pub retry: bool,
    /// Confirm key on the title screen
    pub start: bool,
}

/// Advance the run state by one fixed timestep
pub fn tick(state: &mut RunState, input: &TickInput, dt: f32) {
    // Gameplay keys act on the screen the tick started on
    let phase = state.phase;

    if input.pause {
        state.dispatch(Command::TogglePause);
    }
    if input.start && state.phase == GamePhase::Menu {
        state.dispatch(Command::StartRun);
    }
    if input.retry {
        state.dispatch(Command::Retry);
    }
    if let Some(now) = input.jump {
        if phase == GamePhase::Menu {
            state.dispatch(Command::StartRun);
        } else if state.phase == phase {
            state.jump_pressed(now);
        }
    }
    if input.cast {
        state.cast_spell();
    }

    // Effects decay in every phase so a crash flash fades on the game over screen
    state.effects.decay(dt);

    if state.is_playing() {
        update_playing(state, dt);
    }

    // Keep particles animating across pause and game over
    state.particles.update(dt);

    state.time_ticks += 1;
    state.clock += dt as f64;
}

/// Player, world and collision update for one Playing tick
fn update_playing(state: &mut RunState, dt: f32) {
    if let Some(impact_speed) = state.player.integrate(dt) {
        state.on_landing(impact_speed);
    }

    let speed = state.speed();
    let spawn_interval = state.spawn_interval();
    state.score += dt * (11.0 + speed * 0.035);

    state
        .obstacles
        .update(&mut state.rng, dt, speed, spawn_interval);

    resolve_collisions(state);

    // Still runs on the crash tick
    emit_ambient(state);
}

/// Wand glints and footstep dust
fn emit_ambient(state: &mut RunState) {
    let effects = state.settings.effects;
    if state.rng.random_bool(effects.wand_spark_chance()) {
        let wand = Vec2::new(PLAYER_X + 42.0, state.player.y.floor() - 26.0);
        state.particles.emit_sparks(&mut state.rng, wand, 1, SPARK_TINT);
    }
    if state.player.is_grounded() && state.rng.random_bool(effects.footstep_dust_chance()) {
        let feet = Vec2::new(PLAYER_X - 8.0, GROUND_Y + 64.0);
        state.particles.emit_dust(&mut state.rng, feet, 1, FOOTSTEP_TINT);
    }
}

impl RunState {
    /// Jump key handler. Ignored outside Playing.
    pub fn jump_pressed(&mut self, now: f64) -> JumpOutcome {
        if !self.is_playing() {
            return JumpOutcome::Ignored;
        }

        let outcome = self.player.handle_jump_input(now);
        match outcome {
            JumpOutcome::Launch { double_tap } => {
                let count = self.settings.effects.jump_dust_count();
                let tint = if double_tap {
                    LONG_JUMP_TINT
                } else {
                    JUMP_DUST_TINT
                };
                let feet = Vec2::new(PLAYER_X, GROUND_Y + 64.0);
                self.particles.emit_dust(&mut self.rng, feet, count, tint);
                if double_tap {
                    self.impact(
                        Vec2::new(PLAYER_X, GROUND_Y + 52.0),
                        LONG_JUMP_TINT,
                        LONG_JUMP_IMPACT_POWER,
                    );
                }
            }
            JumpOutcome::AirAssist => {
                let at = Vec2::new(PLAYER_X + 24.0, self.player.y + 14.0);
                self.particles.emit_sparks(&mut self.rng, at, 10, AIR_ASSIST_TINT);
            }
            JumpOutcome::Ignored => {}
        }
        outcome
    }

    /// Blast the first obstacle ahead of the player.
    ///
    /// Returns the kind destroyed, or None when nothing is ahead or the run
    /// is not in progress.
    pub fn cast_spell(&mut self) -> Option<ObstacleKind> {
        if !self.is_playing() {
            return None;
        }

        let index = self.obstacles.first_ahead_of(PLAYER_X)?;
        let target = self.obstacles.remove(index);
        let center = target.center();
        let wand = Vec2::new(
            PLAYER_X + WAND_OFFSET_X,
            self.player.y.floor() + WAND_OFFSET_Y,
        );

        // Trail of single sparks from the wand to the target
        let trail_tint = target.kind.trail_tint();
        for i in 0..SPELL_TRAIL_POINTS {
            let t = i as f32 / (SPELL_TRAIL_POINTS - 1) as f32;
            let jitter = Vec2::new(
                self.rng.random_range(-3.0..=3.0),
                self.rng.random_range(-3.0..=3.0),
            );
            let at = wand.lerp(center, t) + jitter;
            self.particles.emit_sparks(&mut self.rng, at, 1, trail_tint);
        }
        self.particles.emit_hit_burst(
            &mut self.rng,
            center,
            SPELL_BURST_COUNT,
            target.kind.spell_burst_tint(),
        );

        if target.kind == ObstacleKind::Wall {
            self.impact(center, WALL_BREAK_TINT, WALL_BREAK_IMPACT_POWER);
        }

        log::debug!("Spell cleared {:?} at x={:.0}", target.kind, center.x);
        Some(target.kind)
    }

    /// Touch-down feedback; hard landings rumble the camera
    fn on_landing(&mut self, impact_speed: f32) {
        if impact_speed < HARD_LANDING_SPEED {
            return;
        }
        let power = (impact_speed / HARD_LANDING_SPEED).min(1.5);
        self.effects.trigger(EffectKind::Rumble, power);
        let feet = Vec2::new(PLAYER_X, GROUND_Y + 64.0);
        let count = self.settings.effects.jump_dust_count() / 2;
        self.particles.emit_dust(&mut self.rng, feet, count, JUMP_DUST_TINT);
    }
}
