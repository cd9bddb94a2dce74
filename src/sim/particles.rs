//! Transient visual particles
//!
//! Particles never affect gameplay. Every emitter is a preset of the one
//! generic [`ParticleSystem::spawn_batch`] primitive.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clamp01;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Smallest and largest radius handed to the renderer (pixels)
pub const MIN_SPRITE_RADIUS: u32 = 1;
pub const MAX_SPRITE_RADIUS: u32 = 14;

/// A single particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left to live
    pub life: f32,
    /// Lifetime at spawn
    pub max_life: f32,
    /// Base radius before lifetime scaling
    pub size: f32,
    pub color: Rgb,
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Horizontal exponential drag coefficient
    pub drag: f32,
}

impl Particle {
    /// Remaining fraction of lifetime in [0, 1]
    pub fn life_ratio(&self) -> f32 {
        clamp01(self.life / self.max_life.max(0.001))
    }

    /// Rendered radius: shrinks as the particle ages
    pub fn radius(&self) -> u32 {
        let r = (self.size * (0.4 + self.life_ratio() * 1.5)) as i32;
        r.clamp(MIN_SPRITE_RADIUS as i32, MAX_SPRITE_RADIUS as i32) as u32
    }

    /// Rendered alpha: fades linearly with remaining life
    pub fn alpha(&self) -> u8 {
        (40.0 + self.life_ratio() * 215.0) as u8
    }

    fn update(&mut self, dt: f32) {
        self.life -= dt;
        self.vel.x *= (1.0 - self.drag * dt).max(0.0);
        self.pos += self.vel * dt;
        self.vel.y += self.gravity * dt;
    }
}

/// Randomization ranges for a batch of particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterSpec {
    /// Origin jitter (min, max) per axis
    pub jitter_x: (f32, f32),
    pub jitter_y: (f32, f32),
    /// Initial velocity range per axis
    pub vel_x: (f32, f32),
    pub vel_y: (f32, f32),
    /// Lifetime range in seconds
    pub life: (f32, f32),
    /// Integer base size range (inclusive)
    pub size: (u32, u32),
    pub gravity: f32,
    pub drag: f32,
}

/// Ground puffs: low spread, strong drag
pub const DUST: EmitterSpec = EmitterSpec {
    jitter_x: (-16.0, 16.0),
    jitter_y: (-4.0, 3.0),
    vel_x: (-120.0, 95.0),
    vel_y: (-140.0, -40.0),
    life: (0.2, 0.38),
    size: (2, 5),
    gravity: 340.0,
    drag: 1.6,
};

/// Wand and impact glints
pub const SPARKS: EmitterSpec = EmitterSpec {
    jitter_x: (-10.0, 10.0),
    jitter_y: (-10.0, 10.0),
    vel_x: (-170.0, 170.0),
    vel_y: (-240.0, -50.0),
    life: (0.22, 0.5),
    size: (2, 6),
    gravity: 420.0,
    drag: 0.45,
};

/// Large omnidirectional explosion for collisions and spell hits
pub const HIT_BURST: EmitterSpec = EmitterSpec {
    jitter_x: (0.0, 0.0),
    jitter_y: (0.0, 0.0),
    vel_x: (-260.0, 260.0),
    vel_y: (-320.0, 110.0),
    life: (0.3, 0.7),
    size: (3, 8),
    gravity: 520.0,
    drag: 0.25,
};

/// Default tints
pub const DUST_TINT: Rgb = Rgb(180, 205, 230);
pub const SPARK_TINT: Rgb = Rgb(130, 245, 255);

/// Owns every live particle
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `count` particles around `origin` with values drawn from `spec`
    pub fn spawn_batch<R: Rng>(
        &mut self,
        rng: &mut R,
        origin: Vec2,
        spec: &EmitterSpec,
        count: usize,
        color: Rgb,
    ) {
        self.particles.reserve(count);
        for _ in 0..count {
            let jitter = Vec2::new(
                rng.random_range(spec.jitter_x.0..=spec.jitter_x.1),
                rng.random_range(spec.jitter_y.0..=spec.jitter_y.1),
            );
            let vel = Vec2::new(
                rng.random_range(spec.vel_x.0..=spec.vel_x.1),
                rng.random_range(spec.vel_y.0..=spec.vel_y.1),
            );
            let life = rng.random_range(spec.life.0..=spec.life.1);
            let size = rng.random_range(spec.size.0..=spec.size.1) as f32;
            self.particles.push(Particle {
                pos: origin + jitter,
                vel,
                life,
                max_life: life,
                size,
                color,
                gravity: spec.gravity,
                drag: spec.drag,
            });
        }
    }

    pub fn emit_dust<R: Rng>(&mut self, rng: &mut R, origin: Vec2, count: usize, tint: Rgb) {
        self.spawn_batch(rng, origin, &DUST, count, tint);
    }

    pub fn emit_sparks<R: Rng>(&mut self, rng: &mut R, origin: Vec2, count: usize, tint: Rgb) {
        self.spawn_batch(rng, origin, &SPARKS, count, tint);
    }

    pub fn emit_hit_burst<R: Rng>(&mut self, rng: &mut R, origin: Vec2, count: usize, tint: Rgb) {
        self.spawn_batch(rng, origin, &HIT_BURST, count, tint);
    }

    /// Integrate all particles and drop the expired ones
    pub fn update(&mut self, dt: f32) {
        for particle in self.particles.iter_mut() {
            particle.update(dt);
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
