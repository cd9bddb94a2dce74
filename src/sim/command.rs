//! Menu/UI commands and the phase state machine

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, RunState, SettingsOrigin};

/// Named control entry points invoked by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Menu → Playing
    StartRun,
    /// Playing → Paused
    Pause,
    /// Paused → Playing
    Resume,
    /// Escape key: Playing ↔ Paused, or leave Settings
    TogglePause,
    /// Menu/Paused → Settings, remembering where we came from
    OpenSettings,
    /// Settings → origin
    CloseSettings,
    /// Fresh run from GameOver, Playing or Paused
    Retry,
    /// Menu/Paused/GameOver → Menu (full reset)
    GoToMenu,
    /// Settings only
    CycleDifficulty,
    /// Settings only
    CycleEffects,
}

impl RunState {
    /// Apply a command. Returns false (and changes nothing) when the command
    /// does not apply to the current phase.
    pub fn dispatch(&mut self, command: Command) -> bool {
        match (command, self.phase) {
            (Command::StartRun, GamePhase::Menu) => self.start_run(),
            (Command::Pause, GamePhase::Playing)
            | (Command::TogglePause, GamePhase::Playing) => {
                self.phase = GamePhase::Paused;
                log::info!("Paused");
            }
            (Command::Resume, GamePhase::Paused) | (Command::TogglePause, GamePhase::Paused) => {
                self.phase = GamePhase::Playing;
                log::info!("Resumed");
            }
            (Command::TogglePause, GamePhase::Settings { origin })
            | (Command::CloseSettings, GamePhase::Settings { origin }) => {
                self.phase = origin.phase();
            }
            (Command::OpenSettings, GamePhase::Menu) => {
                self.phase = GamePhase::Settings {
                    origin: SettingsOrigin::Menu,
                };
            }
            (Command::OpenSettings, GamePhase::Paused) => {
                self.phase = GamePhase::Settings {
                    origin: SettingsOrigin::Paused,
                };
            }
            (Command::Retry, GamePhase::GameOver | GamePhase::Playing | GamePhase::Paused) => {
                self.start_run()
            }
            (Command::GoToMenu, GamePhase::Menu | GamePhase::Paused | GamePhase::GameOver) => {
                self.go_to_menu()
            }
            (Command::CycleDifficulty, GamePhase::Settings { .. }) => {
                self.settings.difficulty = self.settings.difficulty.next();
                log::debug!("Difficulty: {}", self.settings.difficulty.as_str());
            }
            (Command::CycleEffects, GamePhase::Settings { .. }) => {
                self.settings.effects = self.settings.effects.next();
                log::debug!("Effects: {}", self.settings.effects.as_str());
            }
            (command, phase) => {
                log::debug!("Ignoring {:?} in {}", command, phase.as_str());
                return false;
            }
        }
        true
    }
}
