//! Game settings and preferences
//!
//! Written by the menu layer, read by the simulation at tick time.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Difficulty presets (scroll speed and spawn cadence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// World scroll speed (pixels/sec)
    pub fn speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 360.0,
            Difficulty::Normal => 470.0,
            Difficulty::Hard => 580.0,
        }
    }

    /// Seconds between obstacle spawns
    pub fn spawn_interval(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.25,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.82,
        }
    }

    /// Next preset in the settings menu cycle
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Effects quality. Only changes particle counts, never physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EffectsLevel {
    Low,
    Medium,
    #[default]
    High,
}

impl EffectsLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectsLevel::Low => "Low",
            EffectsLevel::Medium => "Medium",
            EffectsLevel::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(EffectsLevel::Low),
            "medium" | "med" => Some(EffectsLevel::Medium),
            "high" => Some(EffectsLevel::High),
            _ => None,
        }
    }

    /// Dust puff size when the player leaves the ground
    pub fn jump_dust_count(&self) -> usize {
        match self {
            EffectsLevel::Low => 4,
            EffectsLevel::Medium => 7,
            EffectsLevel::High => 10,
        }
    }

    /// Per-tick chance of an ambient wand spark while playing
    pub fn wand_spark_chance(&self) -> f64 {
        match self {
            EffectsLevel::Low => 0.0,
            EffectsLevel::Medium => 0.11,
            EffectsLevel::High => 0.19,
        }
    }

    /// Per-tick chance of an ambient footstep dust puff while grounded
    pub fn footstep_dust_chance(&self) -> f64 {
        match self {
            EffectsLevel::Low => 0.08,
            EffectsLevel::Medium | EffectsLevel::High => 0.14,
        }
    }

    /// Next preset in the settings menu cycle
    pub fn next(&self) -> Self {
        match self {
            EffectsLevel::Low => EffectsLevel::Medium,
            EffectsLevel::Medium => EffectsLevel::High,
            EffectsLevel::High => EffectsLevel::Low,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Scroll speed and spawn cadence
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Particle density
    #[serde(default)]
    pub effects: EffectsLevel,
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
