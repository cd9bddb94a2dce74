//! Wizard Rush entry point
//!
//! Headless native driver: runs the simulation at a fixed timestep with a
//! simple autopilot standing in for the keyboard, then reports the results.
//!
//! Usage: wizard-rush [--seed N] [--seconds S] [--difficulty easy|normal|hard]
//!                    [--effects low|medium|high] [--settings PATH] [--dump]

use std::time::{SystemTime, UNIX_EPOCH};

use wizard_rush::consts::*;
use wizard_rush::sim::{Command, GamePhase, ObstacleKind, RunState, TickInput, tick};
use wizard_rush::{Difficulty, EffectsLevel, Settings};

/// Host frame time the driver pretends to render at
const FRAME_DT: f32 = 1.0 / 60.0;

/// Command line options
struct Options {
    seed: u64,
    seconds: f32,
    settings: Settings,
    dump: bool,
}

impl Options {
    fn parse() -> Self {
        let mut seed = None;
        let mut seconds = 30.0;
        let mut difficulty = None;
        let mut effects = None;
        let mut settings_path = None;
        let mut dump = false;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => seed = args.next().and_then(|v| v.parse().ok()),
                "--seconds" => {
                    if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                        seconds = v;
                    }
                }
                "--difficulty" => difficulty = args.next().and_then(|v| Difficulty::from_str(&v)),
                "--effects" => effects = args.next().and_then(|v| EffectsLevel::from_str(&v)),
                "--settings" => settings_path = args.next(),
                "--dump" => dump = true,
                other => log::warn!("Ignoring unknown argument: {}", other),
            }
        }

        let mut settings = settings_path
            .as_deref()
            .map(Settings::load_from)
            .unwrap_or_default();
        if let Some(d) = difficulty {
            settings.difficulty = d;
        }
        if let Some(e) = effects {
            settings.effects = e;
        }

        let seed = seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        Self {
            seed,
            seconds,
            settings,
            dump,
        }
    }
}

/// Game instance holding all state
struct Game {
    state: RunState,
    accumulator: f32,
    input: TickInput,
    runs: u32,
}

impl Game {
    fn new(seed: u64, settings: Settings) -> Self {
        Self {
            state: RunState::with_settings(seed, settings),
            accumulator: 0.0,
            input: TickInput::default(),
            runs: 0,
        }
    }

    /// Run simulation ticks for one host frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let was_playing = self.state.is_playing();
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input = TickInput::default();

            if was_playing && self.state.phase == GamePhase::GameOver {
                self.runs += 1;
            }
        }
    }

    /// Stand-in for a player: jump hurdles, blast walls
    fn autopilot(&mut self) {
        let state = &self.state;
        match state.phase {
            GamePhase::Menu => {
                self.input.start = true;
                return;
            }
            GamePhase::GameOver => {
                self.input.retry = true;
                return;
            }
            GamePhase::Playing => {}
            _ => return,
        }

        let player_front = PLAYER_X + HITBOX_OFFSET_X + HITBOX_WIDTH;
        let Some(next) = state
            .obstacles
            .iter()
            .find(|o| o.rect.right() > PLAYER_X + HITBOX_OFFSET_X)
        else {
            return;
        };

        let gap = next.rect.x - player_front;
        match next.kind {
            ObstacleKind::Wall if gap < 500.0 => self.input.cast = true,
            ObstacleKind::Hurdle if gap < state.speed() * 0.3 && state.player.is_grounded() => {
                self.input.jump = Some(state.clock);
            }
            _ => {}
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    let options = Options::parse();
    log::info!(
        "Wizard Rush (headless) seed={} difficulty={} effects={}",
        options.seed,
        options.settings.difficulty.as_str(),
        options.settings.effects.as_str()
    );

    let mut game = Game::new(options.seed, options.settings);
    let frames = (options.seconds / FRAME_DT).ceil() as u64;
    for _ in 0..frames {
        game.autopilot();
        game.update(FRAME_DT);
    }

    // Leave the game on a stable screen
    if game.state.is_playing() {
        game.state.dispatch(Command::Pause);
    }

    println!(
        "Simulated {:.1}s: {} crash(es), best score {}",
        game.state.clock, game.runs, game.state.best
    );

    if options.dump {
        match serde_json::to_string_pretty(&game.state.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is driven by the host page on the web; nothing to run here
}
