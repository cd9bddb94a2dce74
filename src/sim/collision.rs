//! Collision detection and impact response
//!
//! Everything in the world is an axis-aligned box. A hit ends the run, so
//! the resolver stops at the first overlapping obstacle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacles::{Obstacle, ObstacleKind};
use super::state::{GamePhase, RunState};

/// Impact strength when the player crashes
pub const CRASH_IMPACT_POWER: f32 = 1.3;

/// Axis-aligned rectangle (x/y is the top-left corner, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Index of the first obstacle (in stored order) overlapping `hitbox`
pub fn first_overlap(hitbox: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| hitbox.overlaps(&o.rect))
}

/// Test the player against every obstacle and end the run on a hit.
///
/// Returns the kind of obstacle hit, if any. Does nothing outside Playing.
pub fn resolve_collisions(state: &mut RunState) -> Option<ObstacleKind> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let hitbox = state.player.hitbox();
    let index = first_overlap(&hitbox, state.obstacles.as_slice())?;
    let kind = state.obstacles.as_slice()[index].kind;

    state.best = state.best.max(state.score.floor() as u32);
    state.phase = GamePhase::GameOver;
    state.impact(hitbox.center(), kind.crash_tint(), CRASH_IMPACT_POWER);

    log::info!(
        "Run over: hit {:?} at score {} (best {})",
        kind,
        state.score.floor(),
        state.best
    );
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn obstacle(kind: ObstacleKind, rect: Rect) -> Obstacle {
        Obstacle {
            kind,
            rect,
            phase: 0.0,
        }
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(2.0, 2.0, 2.0, 2.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_first_overlap_in_stored_order() {
        let hitbox = Rect::new(0.0, 0.0, 100.0, 100.0);
        let obstacles = vec![
            obstacle(ObstacleKind::Wall, Rect::new(500.0, 0.0, 10.0, 10.0)),
            obstacle(ObstacleKind::Hurdle, Rect::new(50.0, 50.0, 10.0, 10.0)),
            obstacle(ObstacleKind::Wall, Rect::new(10.0, 10.0, 10.0, 10.0)),
        ];
        assert_eq!(first_overlap(&hitbox, &obstacles), Some(1));
        assert_eq!(first_overlap(&hitbox, &obstacles[..1]), None);
    }

    #[test]
    fn test_crash_into_hurdle_ends_run() {
        let mut state = RunState::new(5);
        state.start_run();
        state.score = 42.7;
        let hitbox = state.player.hitbox();
        state.obstacles.push(obstacle(
            ObstacleKind::Hurdle,
            Rect::new(hitbox.x + 10.0, hitbox.y + 40.0, 50.0, 100.0),
        ));

        assert_eq!(resolve_collisions(&mut state), Some(ObstacleKind::Hurdle));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best, 42);
        assert_eq!(state.score, 42.7);
        assert!(state.effects.shake_time > 0.0);
        assert!(state.effects.shake_power > 0.0);
        assert!(state.effects.chroma_time > 0.0);
        assert!(state.effects.flash_time > 0.0);
        assert_eq!(state.particles.len(), (16.0 * CRASH_IMPACT_POWER) as usize);
        // The obstacle stays for the game over screen
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_best_never_decreases() {
        let mut state = RunState::new(5);
        state.best = 100;
        state.start_run();
        state.score = 12.0;
        state.obstacles.push(obstacle(ObstacleKind::Wall, state.player.hitbox()));
        resolve_collisions(&mut state);
        assert_eq!(state.best, 100);
    }

    #[test]
    fn test_no_collision_outside_playing() {
        let mut state = RunState::new(5);
        state.obstacles.push(obstacle(ObstacleKind::Wall, state.player.hitbox()));
        assert_eq!(resolve_collisions(&mut state), None);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_airborne_player_clears_hurdle() {
        let mut state = RunState::new(5);
        state.start_run();
        state.player.y = GROUND_Y - 200.0;
        state.obstacles.push(obstacle(
            ObstacleKind::Hurdle,
            Rect::new(PLAYER_X - 20.0, GROUND_Y + 60.0 - 120.0, 50.0, 120.0),
        ));
        assert_eq!(resolve_collisions(&mut state), None);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
