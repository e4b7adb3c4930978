//! Strider entry point
//!
//! Owns the window, the fixed-timestep frame driver, input mapping and
//! high-score persistence. All gameplay lives in `sim`.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use strider::assets::{self, Assets};
use strider::consts::*;
use strider::highscore::{self, HighScore};
use strider::renderer;
use strider::settings::{self, Settings};
use strider::sim::{GamePhase, GameState, TickInput, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Strider".to_owned(),
        window_width: SCREEN_W as i32,
        window_height: SCREEN_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Seed from the wall clock when settings don't pin one.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::load(settings::DEFAULT_PATH);
    let assets = match Assets::load(assets::ASSET_DIR).await {
        Ok(assets) => assets,
        Err(err) => {
            log::error!("failed to load assets: {err:?}");
            return;
        }
    };
    let mut high = HighScore::load(highscore::DEFAULT_PATH);

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("starting with seed {seed}");
    let mut state = GameState::new(seed);

    let mut input = TickInput::default();
    let mut accumulator = 0.0f32;
    let mut last_phase = state.phase;

    loop {
        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            break;
        }

        // Latch one-shot presses until a tick consumes them, so a press on
        // a frame that runs no tick is not lost.
        if is_key_pressed(KeyCode::Space) {
            input.confirm = true;
            input.jump = true;
        }
        if is_key_pressed(KeyCode::Down) {
            input.slide = true;
        }
        if is_key_pressed(KeyCode::P) {
            input.pause = true;
        }

        accumulator += (get_frame_time() * 1000.0).min(MAX_FRAME_MS);
        let mut substeps = 0;
        while accumulator >= TICK_DT_MS && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input, TICK_DT_MS);
            accumulator -= TICK_DT_MS;
            substeps += 1;
            input = TickInput::default();
        }

        // Overwrite the stored best the moment the run exceeds it.
        high.submit(state.score);

        match (last_phase, state.phase) {
            (GamePhase::Running, GamePhase::GameOver) => {
                log::info!("run ended: score {}", state.score);
            }
            // The sim resets itself to the title screen after a game over;
            // pick up whatever best is on disk for the next run.
            (GamePhase::GameOver, GamePhase::Start) => high.reload(),
            _ => {}
        }
        last_phase = state.phase;

        renderer::draw_frame(&assets, &state, &high, settings.show_fps);

        next_frame().await;
    }
}
