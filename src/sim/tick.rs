//! Fixed timestep simulation tick
//!
//! Advances the whole game by one 60 Hz step: phase machine, pause gate,
//! player physics, parallax scroll, spawn timers, the collision & scoring
//! pass, and the speed ratchet.

use super::collision::rects_overlap;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick. All flags are one-shot edges; the
/// frame driver latches key presses until a tick consumes them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start the run, or restart after a game over
    pub confirm: bool,
    /// Jump while running
    pub jump: bool,
    /// Slide while running
    pub slide: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one fixed timestep of `dt_ms` milliseconds.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    match state.phase {
        GamePhase::Start => {
            if input.confirm {
                state.phase = GamePhase::Running;
            }
            return;
        }
        GamePhase::GameOver => {
            // Full in-place reset; never a recursive re-entry of the loop.
            if input.confirm {
                state.reset();
            }
            return;
        }
        GamePhase::Running => {}
    }

    if input.pause {
        state.paused = !state.paused;
    }
    // Frozen: rendering continues upstairs, simulation time stands still.
    if state.paused {
        return;
    }

    state.time_ms += f64::from(dt_ms);

    if input.jump {
        state.player.jump();
    }
    if input.slide {
        state.player.slide();
    }
    state.player.update(dt_ms);

    state.scroll.advance(state.speed);

    // Spawn timers run on simulation time, so a pause can never leave an
    // overdue interval behind.
    if state.time_ms - state.last_obstacle_ms >= OBSTACLE_INTERVAL_MS {
        state.spawn_obstacle();
    }
    if state.time_ms - state.last_coin_ms >= COIN_INTERVAL_MS {
        state.spawn_coin();
    }

    // Obstacle pass. A hit ends the run before anything else mutates; the
    // entity lists are left exactly as they are this frame.
    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.update(speed);
    }
    let player_rect = state.player.rect();
    if state
        .obstacles
        .iter()
        .any(|o| rects_overlap(&o.rect(), &player_rect))
    {
        state.phase = GamePhase::GameOver;
        return;
    }
    state.obstacles.retain(|o| o.x + OBSTACLE_W > 0.0);

    // Coin pass: each overlap collects exactly once, everything that
    // scrolled off the left edge is dropped by the same filter.
    for coin in &mut state.coins {
        coin.update(dt_ms, speed);
    }
    let mut collected = 0u32;
    state.coins.retain(|c| {
        if rects_overlap(&c.rect(), &player_rect) {
            collected += 1;
            return false;
        }
        c.x + COIN_SIZE > 0.0
    });
    if collected > 0 {
        state.add_score((collected * COIN_REWARD) as f32);
    }

    // Distance score; the ratchet inside steps speed per 500 crossed.
    let accrual = state.speed * SCORE_RATE;
    state.add_score(accrual);
}
