//! Brickfall headless runner
//!
//! Plays one session with a simple autopilot standing in for the pointer and
//! reports the outcome. Rendering and live input belong to a host frontend.

#[cfg(not(target_arch = "wasm32"))]
use brickfall::Settings;
#[cfg(not(target_arch = "wasm32"))]
use brickfall::consts::TARGET_DT;
#[cfg(not(target_arch = "wasm32"))]
use brickfall::sim::{GamePhase, GameState, TickInput, tick};

/// Read from the working directory when no path is given
#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_FILE: &str = "brickfall.json";

/// Ten simulated minutes at 60 Hz
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u32 = 60 * 60 * 10;

/// Follow the lowest descending ball, or drift back to centre
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_target(state: &GameState) -> f32 {
    state
        .balls
        .iter()
        .filter(|b| b.vel.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|b| b.pos.x)
        .unwrap_or(state.field.width / 2.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SETTINGS_FILE.to_string());
    let settings = match Settings::load_or_default(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Game initialized with seed: {}", seed);
    let mut state = GameState::new(seed, &settings);

    let mut input = TickInput {
        start: true,
        ..Default::default()
    };
    for _ in 0..MAX_FRAMES {
        input.pointer_x = Some(autopilot_target(&state));
        tick(&mut state, &input, TARGET_DT);
        input.start = false;

        if matches!(state.phase, GamePhase::GameOver | GamePhase::Victory) {
            break;
        }
    }

    let snapshot = state.snapshot();
    println!(
        "{:?}: score {} | level {} | lives {} | {} ticks",
        snapshot.phase, snapshot.score, snapshot.level, snapshot.lives, snapshot.time_ticks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive the simulation through the library
}
