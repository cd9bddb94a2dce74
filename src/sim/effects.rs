//! Screen-space post-effects (camera shake, chroma split, flash)
//!
//! Triggers only ever raise a channel, so overlapping events never cut an
//! in-flight effect short.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clamp01;

/// Full-strength impact durations/magnitude
pub const IMPACT_SHAKE_TIME: f32 = 0.22;
pub const IMPACT_SHAKE_POWER: f32 = 11.0;
pub const IMPACT_CHROMA_TIME: f32 = 0.16;
pub const IMPACT_FLASH_TIME: f32 = 0.1;

/// Hard-landing shake duration
pub const RUMBLE_SHAKE_TIME: f32 = 0.14;

/// Per-tick multiplicative falloff of shake magnitude
pub const SHAKE_POWER_DECAY: f32 = 0.92;

/// Peak overlay alphas
const CHROMA_MAX_ALPHA: f32 = 65.0;
const FLASH_MAX_ALPHA: f32 = 130.0;

/// Kinds of screen response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Shake + chroma split + flash (collisions, spell breaks, double jumps)
    Impact,
    /// Short shake only (hard landings)
    Rumble,
}

impl EffectKind {
    /// Channel values at power 1.0
    pub fn base(&self) -> PostEffects {
        match self {
            EffectKind::Impact => PostEffects {
                shake_time: IMPACT_SHAKE_TIME,
                shake_base_time: IMPACT_SHAKE_TIME,
                shake_power: IMPACT_SHAKE_POWER,
                chroma_time: IMPACT_CHROMA_TIME,
                flash_time: IMPACT_FLASH_TIME,
            },
            EffectKind::Rumble => PostEffects {
                shake_time: RUMBLE_SHAKE_TIME,
                shake_base_time: RUMBLE_SHAKE_TIME,
                shake_power: 5.0,
                chroma_time: 0.0,
                flash_time: 0.0,
            },
        }
    }
}

/// Remaining durations and shake magnitude
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PostEffects {
    pub shake_time: f32,
    /// Base duration of the trigger that set `shake_time`; shake fades against it
    pub shake_base_time: f32,
    pub shake_power: f32,
    pub chroma_time: f32,
    pub flash_time: f32,
}

/// What the renderer needs for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PostEffectSample {
    /// Whole-frame offset in pixels
    pub shake_offset: Vec2,
    /// Horizontal red/cyan split in pixels (0 when inactive)
    pub chroma_offset: f32,
    /// Split layer alpha (0-65)
    pub chroma_alpha: f32,
    /// White overlay alpha (0-130)
    pub flash_alpha: f32,
}

impl PostEffects {
    /// Raise every channel to at least `kind`'s base scaled by `power`
    pub fn trigger(&mut self, kind: EffectKind, power: f32) {
        let base = kind.base();
        let shake_time = base.shake_time * power;
        if shake_time > self.shake_time {
            self.shake_time = shake_time;
            self.shake_base_time = base.shake_base_time;
        }
        self.shake_power = self.shake_power.max(base.shake_power * power);
        self.chroma_time = self.chroma_time.max(base.chroma_time * power);
        self.flash_time = self.flash_time.max(base.flash_time * power);
    }

    /// Count down durations; soften shake while it runs
    pub fn decay(&mut self, dt: f32) {
        if self.shake_time > 0.0 {
            self.shake_power = (self.shake_power * SHAKE_POWER_DECAY).max(0.0);
        }
        self.shake_time = (self.shake_time - dt).max(0.0);
        self.chroma_time = (self.chroma_time - dt).max(0.0);
        self.flash_time = (self.flash_time - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.shake_time > 0.0 || self.chroma_time > 0.0 || self.flash_time > 0.0
    }

    /// Current shake amplitude before randomization
    pub fn shake_amount(&self) -> f32 {
        if self.shake_time <= 0.0 || self.shake_base_time <= 0.0 {
            return 0.0;
        }
        self.shake_power * clamp01(self.shake_time / self.shake_base_time)
    }

    /// Sample offsets/alphas for the renderer. Does not mutate the effects.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> PostEffectSample {
        let amount = self.shake_amount();
        let shake_offset = if amount > 0.0 {
            Vec2::new(
                rng.random_range(-amount..=amount),
                rng.random_range(-amount * 0.7..=amount * 0.7),
            )
        } else {
            Vec2::ZERO
        };

        let (chroma_offset, chroma_alpha) = if self.chroma_time > 0.0 {
            let strength = clamp01(self.chroma_time / IMPACT_CHROMA_TIME);
            (2.0 + strength * 4.0, CHROMA_MAX_ALPHA * strength)
        } else {
            (0.0, 0.0)
        };

        let flash_alpha = FLASH_MAX_ALPHA * clamp01(self.flash_time / IMPACT_FLASH_TIME);

        PostEffectSample {
            shake_offset,
            chroma_offset,
            chroma_alpha,
            flash_alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_trigger_takes_max_not_sum() {
        let mut fx = PostEffects::default();
        fx.trigger(EffectKind::Impact, 0.5);
        fx.trigger(EffectKind::Impact, 1.0);

        let mut alone = PostEffects::default();
        alone.trigger(EffectKind::Impact, 1.0);
        assert_eq!(fx, alone);

        // A weaker trigger afterwards changes nothing
        fx.trigger(EffectKind::Impact, 0.3);
        assert_eq!(fx, alone);
    }

    #[test]
    fn test_rumble_leaves_chroma_and_flash_alone() {
        let mut fx = PostEffects::default();
        fx.trigger(EffectKind::Rumble, 1.0);
        assert!(fx.shake_time > 0.0);
        assert_eq!(fx.chroma_time, 0.0);
        assert_eq!(fx.flash_time, 0.0);
    }

    #[test]
    fn test_fresh_rumble_shakes_at_full_strength() {
        let mut fx = PostEffects::default();
        fx.trigger(EffectKind::Rumble, 1.0);
        assert_eq!(fx.shake_amount(), 5.0);

        // Half way through its own duration it is at half strength
        fx.shake_time = RUMBLE_SHAKE_TIME * 0.5;
        assert!((fx.shake_amount() - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_longer_shake_keeps_its_base() {
        let mut fx = PostEffects::default();
        fx.trigger(EffectKind::Impact, 1.0);
        // A shorter rumble does not re-normalize the running impact shake
        fx.trigger(EffectKind::Rumble, 1.0);
        assert_eq!(fx.shake_base_time, IMPACT_SHAKE_TIME);
        assert_eq!(fx.shake_amount(), IMPACT_SHAKE_POWER);
    }

    #[test]
    fn test_decay_clamps_at_zero() {
        let mut fx = PostEffects::default();
        fx.trigger(EffectKind::Impact, 1.0);
        for _ in 0..60 {
            fx.decay(1.0 / 60.0);
        }
        assert_eq!(fx.shake_time, 0.0);
        assert_eq!(fx.chroma_time, 0.0);
        assert_eq!(fx.flash_time, 0.0);
        assert!(!fx.is_active());

        fx.decay(1.0);
        assert_eq!(fx.flash_time, 0.0);
    }

    #[test]
    fn test_shake_power_softens_while_active() {
        let mut fx = PostEffects::default();
        fx.trigger(EffectKind::Impact, 1.0);
        fx.decay(1.0 / 60.0);
        assert!((fx.shake_power - IMPACT_SHAKE_POWER * SHAKE_POWER_DECAY).abs() < 1e-4);

        // Power is frozen once the shake timer has expired
        fx.shake_time = 0.0;
        let power = fx.shake_power;
        fx.decay(1.0 / 60.0);
        assert_eq!(fx.shake_power, power);
    }

    #[test]
    fn test_sample_bounds() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut fx = PostEffects::default();
        fx.trigger(EffectKind::Impact, 1.0);

        for _ in 0..100 {
            let s = fx.sample(&mut rng);
            assert!(s.shake_offset.x.abs() <= IMPACT_SHAKE_POWER);
            assert!(s.shake_offset.y.abs() <= IMPACT_SHAKE_POWER * 0.7 + 1e-4);
        }

        let s = fx.sample(&mut rng);
        assert!((s.chroma_offset - 6.0).abs() < 1e-4);
        assert!((s.chroma_alpha - 65.0).abs() < 1e-4);
        assert!((s.flash_alpha - 130.0).abs() < 1e-4);
    }

    #[test]
    fn test_idle_sample_is_zero() {
        let mut rng = Pcg32::seed_from_u64(1);
        let fx = PostEffects::default();
        assert_eq!(fx.sample(&mut rng), PostEffectSample::default());
    }
}
