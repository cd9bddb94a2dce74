//! Obstacle spawning, scrolling and pruning

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::particles::Rgb;
use crate::consts::*;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Short, narrow barrier meant to be jumped
    Hurdle,
    /// Tall cursed wall; clearing one with a spell gives a bonus impact
    Wall,
}

impl ObstacleKind {
    /// Tint for spell trail sparks
    pub fn trail_tint(&self) -> Rgb {
        match self {
            ObstacleKind::Hurdle => Rgb(138, 246, 255),
            ObstacleKind::Wall => Rgb(192, 152, 255),
        }
    }

    /// Tint for the burst when a spell clears it
    pub fn spell_burst_tint(&self) -> Rgb {
        match self {
            ObstacleKind::Hurdle => Rgb(130, 245, 255),
            ObstacleKind::Wall => Rgb(198, 160, 255),
        }
    }

    /// Tint for the burst when the player runs into it
    pub fn crash_tint(&self) -> Rgb {
        match self {
            ObstacleKind::Hurdle => Rgb(255, 130, 130),
            ObstacleKind::Wall => Rgb(196, 138, 255),
        }
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// Cosmetic pulse phase (radians, grows without bound)
    pub phase: f32,
}

impl Obstacle {
    /// Build a randomized obstacle at the spawn line
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let kind = if rng.random_bool(WALL_CHANCE) {
            ObstacleKind::Wall
        } else {
            ObstacleKind::Hurdle
        };
        let (h, w) = match kind {
            ObstacleKind::Wall => (rng.random_range(230..=300), rng.random_range(74..=96)),
            ObstacleKind::Hurdle => (rng.random_range(70..=165), rng.random_range(45..=75)),
        };
        let (h, w) = (h as f32, w as f32);
        Self {
            kind,
            // Bottom sits on the obstacle ground line
            rect: Rect::new(SPAWN_X, GROUND_Y + OBSTACLE_GROUND_OFFSET - h, w, h),
            phase: rng.random_range(0.0..6.28),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

/// Slack on the spawn check so accumulated `SIM_DT` steps land on the interval
const SPAWN_TIMER_EPSILON: f32 = 1e-4;

/// Owns active obstacles and the spawn timer
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    spawn_timer: f32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one randomized obstacle at the spawn line
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) {
        let obstacle = Obstacle::random(rng);
        log::debug!(
            "Spawned {:?} {}x{}",
            obstacle.kind,
            obstacle.rect.w,
            obstacle.rect.h
        );
        self.obstacles.push(obstacle);
    }

    /// Advance the spawn timer, scroll everything left and prune what is
    /// off screen. Returns how many obstacles were pruned.
    pub fn update<R: Rng>(&mut self, rng: &mut R, dt: f32, speed: f32, spawn_interval: f32) -> usize {
        self.spawn_timer += dt;
        if self.spawn_timer + SPAWN_TIMER_EPSILON >= spawn_interval {
            // Full reset: overshoot past one interval is dropped
            self.spawn_timer = 0.0;
            self.spawn(rng);
        }

        for obstacle in self.obstacles.iter_mut() {
            obstacle.rect.x -= speed * dt;
            obstacle.phase += dt * OBSTACLE_PULSE_RATE;
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.rect.right() >= PRUNE_X);
        before - self.obstacles.len()
    }

    /// Index of the first obstacle (in stored order) whose center is ahead of `x`
    pub fn first_ahead_of(&self, x: f32) -> Option<usize> {
        self.obstacles.iter().position(|o| o.rect.center().x > x)
    }

    /// Remove and return the obstacle at `index`
    pub fn remove(&mut self, index: usize) -> Obstacle {
        self.obstacles.remove(index)
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Drop every obstacle and restart the spawn timer
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }
}
