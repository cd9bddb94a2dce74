//! Player vertical physics
//!
//! The wizard runs in place at `PLAYER_X`; only the vertical axis is
//! simulated. Jump input timing selects between a normal jump, a boosted
//! double-tap launch, and a single mid-air assist.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// What a jump press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Left the ground; `double_tap` means the boosted long-jump launch
    Launch { double_tap: bool },
    /// One-time mid-air boost
    AirAssist,
    /// Airborne press that was not a usable double-tap
    Ignored,
}

/// The player's vertical state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Feet position (y grows downward, never exceeds `GROUND_Y`)
    pub y: f32,
    /// Vertical velocity (negative is upward)
    pub vel_y: f32,
    /// Seconds of reduced gravity left
    pub long_jump_timer: f32,
    /// Timestamp of the previous jump press (monotonic seconds)
    pub last_jump_time: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: GROUND_Y,
            vel_y: 0.0,
            long_jump_timer: 0.0,
            last_jump_time: -10.0,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived from position; never stored
    pub fn is_grounded(&self) -> bool {
        self.y >= GROUND_Y - GROUND_EPSILON
    }

    pub fn long_jump_active(&self) -> bool {
        self.long_jump_timer > 0.0
    }

    /// Apply a jump key press at time `now`
    pub fn handle_jump_input(&mut self, now: f64) -> JumpOutcome {
        let is_double_tap = (now - self.last_jump_time) as f32 <= LONG_JUMP_WINDOW;

        let outcome = if self.is_grounded() {
            if is_double_tap {
                self.vel_y = -(JUMP_FORCE * DOUBLE_TAP_BOOST);
                self.long_jump_timer = LONG_JUMP_DURATION;
            } else {
                self.vel_y = -JUMP_FORCE;
                self.long_jump_timer = 0.0;
            }
            JumpOutcome::Launch {
                double_tap: is_double_tap,
            }
        } else if is_double_tap && !self.long_jump_active() {
            // Only a boost if not already rising faster
            self.vel_y = self.vel_y.min(-(JUMP_FORCE * AIR_ASSIST_FACTOR));
            self.long_jump_timer = AIR_ASSIST_DURATION;
            JumpOutcome::AirAssist
        } else {
            JumpOutcome::Ignored
        };

        self.last_jump_time = now;
        outcome
    }

    /// Advance one tick. Returns the impact speed if the player touched down.
    pub fn integrate(&mut self, dt: f32) -> Option<f32> {
        let was_airborne = !self.is_grounded();

        let gravity = if self.long_jump_active() {
            GRAVITY * LONG_JUMP_GRAVITY_SCALE
        } else {
            GRAVITY
        };
        if self.long_jump_active() {
            self.long_jump_timer = (self.long_jump_timer - dt).max(0.0);
        }

        self.vel_y += gravity * dt;
        self.y += self.vel_y * dt;

        if self.y > GROUND_Y {
            let impact_speed = self.vel_y;
            self.y = GROUND_Y;
            self.vel_y = 0.0;
            if was_airborne {
                return Some(impact_speed);
            }
        }
        None
    }

    /// Collision box anchored to the current (pixel-snapped) height
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            PLAYER_X + HITBOX_OFFSET_X,
            self.y.floor() + HITBOX_OFFSET_Y,
            HITBOX_WIDTH,
            HITBOX_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_jump_from_ground() {
        let mut player = Player::new();
        let outcome = player.handle_jump_input(5.0);
        assert_eq!(outcome, JumpOutcome::Launch { double_tap: false });
        assert_eq!(player.vel_y, -690.0);
        assert_eq!(player.long_jump_timer, 0.0);
        assert_eq!(player.last_jump_time, 5.0);
    }

    #[test]
    fn test_grounded_double_tap_launch() {
        let mut player = Player::new();
        player.handle_jump_input(0.0);
        // Second press lands before any tick, so the player is still grounded
        let outcome = player.handle_jump_input(0.1);
        assert_eq!(outcome, JumpOutcome::Launch { double_tap: true });
        assert!((player.vel_y - (-828.0)).abs() < 1e-3);
        assert_eq!(player.long_jump_timer, 0.24);
    }

    #[test]
    fn test_presses_outside_window_are_single_taps() {
        let mut player = Player::new();
        player.handle_jump_input(0.0);
        let outcome = player.handle_jump_input(0.5);
        assert_eq!(outcome, JumpOutcome::Launch { double_tap: false });
        assert_eq!(player.vel_y, -690.0);
    }

    #[test]
    fn test_air_assist_once() {
        let mut player = Player::new();
        player.handle_jump_input(0.0);
        for _ in 0..20 {
            player.integrate(1.0 / 60.0);
        }
        assert!(!player.is_grounded());
        // Falling now: the assist should pull velocity up to the floor
        player.vel_y = 100.0;

        let outcome = player.handle_jump_input(1.0);
        assert_eq!(outcome, JumpOutcome::Ignored);

        let outcome = player.handle_jump_input(1.1);
        assert_eq!(outcome, JumpOutcome::AirAssist);
        assert!((player.vel_y - (-690.0 * 0.55)).abs() < 1e-3);
        assert_eq!(player.long_jump_timer, 0.2);

        // Third tap while the timer runs does nothing
        let vel = player.vel_y;
        let outcome = player.handle_jump_input(1.2);
        assert_eq!(outcome, JumpOutcome::Ignored);
        assert_eq!(player.vel_y, vel);
        assert_eq!(player.last_jump_time, 1.2);
    }

    #[test]
    fn test_air_assist_never_slows_a_faster_rise() {
        let mut player = Player::new();
        player.y = GROUND_Y - 100.0;
        player.vel_y = -600.0;
        player.last_jump_time = 0.0;
        assert_eq!(player.handle_jump_input(0.1), JumpOutcome::AirAssist);
        assert_eq!(player.vel_y, -600.0);
    }

    #[test]
    fn test_long_jump_reduces_gravity() {
        let dt = 1.0 / 60.0;
        let mut floaty = Player::new();
        floaty.y = GROUND_Y - 200.0;
        floaty.long_jump_timer = 0.24;
        floaty.integrate(dt);

        let mut normal = Player::new();
        normal.y = GROUND_Y - 200.0;
        normal.integrate(dt);

        assert!((floaty.vel_y - GRAVITY * 0.58 * dt).abs() < 1e-3);
        assert!((normal.vel_y - GRAVITY * dt).abs() < 1e-3);
        assert!((floaty.long_jump_timer - (0.24 - dt)).abs() < 1e-6);
    }

    #[test]
    fn test_long_jump_timer_clamps_at_zero() {
        let mut player = Player::new();
        player.y = GROUND_Y - 300.0;
        player.long_jump_timer = 0.01;
        player.integrate(0.1);
        assert_eq!(player.long_jump_timer, 0.0);
    }

    #[test]
    fn test_landing_clamps_and_zeroes() {
        let mut player = Player::new();
        player.handle_jump_input(0.0);
        let mut landed = None;
        for _ in 0..200 {
            if let Some(speed) = player.integrate(1.0 / 60.0) {
                landed = Some(speed);
                break;
            }
            assert!(player.y <= GROUND_Y);
        }
        let speed = landed.expect("player should land");
        assert!(speed > 0.0);
        assert_eq!(player.y, GROUND_Y);
        assert_eq!(player.vel_y, 0.0);
        assert!(player.is_grounded());
    }

    #[test]
    fn test_resting_on_ground_is_not_a_landing() {
        let mut player = Player::new();
        for _ in 0..10 {
            assert_eq!(player.integrate(1.0 / 60.0), None);
        }
        assert_eq!(player.y, GROUND_Y);
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_hitbox_follows_height() {
        let mut player = Player::new();
        let ground_box = player.hitbox();
        assert_eq!(ground_box, Rect::new(192.0, GROUND_Y - 106.0, 56.0, 132.0));

        player.y = GROUND_Y - 50.5;
        assert_eq!(player.hitbox().y, (GROUND_Y - 50.5).floor() - 106.0);
    }
}
