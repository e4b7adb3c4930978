//! Presentation layer
//!
//! Reads `GameState` and draws it; never mutates the simulation. Layout
//! mirrors the fixed 960x540 logical screen.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::consts::*;
use crate::highscore::HighScore;
use crate::sim::{GamePhase, GameState, PlayerPose};

/// Sky tone behind the farthest layer.
const SKY: Color = Color::new(0.53, 0.81, 0.92, 1.0);
const HUD_FONT_SIZE: f32 = 30.0;
const OVERLAY_FONT_SIZE: f32 = 36.0;

/// Draw one complete frame: scenery, entities, HUD, phase overlays.
pub fn draw_frame(assets: &Assets, state: &GameState, high: &HighScore, show_fps: bool) {
    if state.phase == GamePhase::Running && state.paused {
        // The pause screen replaces the scene entirely.
        clear_background(BLACK);
        center_text("PAUSED - Press P to Resume");
        return;
    }

    clear_background(SKY);
    draw_background(assets, state);
    draw_entities(assets, state);
    draw_hud(state, high, show_fps);

    match state.phase {
        GamePhase::Start => center_text("Press SPACE to Start"),
        GamePhase::GameOver => center_text("Game Over - Press SPACE to Restart"),
        GamePhase::Running => {}
    }
}

fn draw_background(assets: &Assets, state: &GameState) {
    let mid_h = SCREEN_H * 0.6;
    let ground_h = SCREEN_H * 0.25;
    draw_layer(&assets.bg_far, state.scroll.far_x, 0.0, SCREEN_H);
    draw_layer(
        &assets.bg_mid,
        state.scroll.mid_x,
        SCREEN_H - mid_h - 120.0,
        mid_h,
    );
    draw_layer(
        &assets.bg_ground,
        state.scroll.ground_x,
        SCREEN_H - ground_h,
        ground_h,
    );
}

/// Two screen-wide copies a screen apart; the wrap keeps the seam moving.
fn draw_layer(tex: &Texture2D, x: f32, y: f32, h: f32) {
    for offset in [0.0, SCREEN_W] {
        draw_sprite(tex, x + offset, y, SCREEN_W, h);
    }
}

fn draw_entities(assets: &Assets, state: &GameState) {
    for coin in &state.coins {
        draw_sprite(&assets.coin[coin.frame()], coin.x, coin.y, COIN_SIZE, COIN_SIZE);
    }
    for obstacle in &state.obstacles {
        let rect = obstacle.rect();
        draw_sprite(
            assets.obstacle(obstacle.kind),
            rect.x,
            rect.y,
            OBSTACLE_W,
            OBSTACLE_H,
        );
    }

    let player = &state.player;
    let (tex, sprite_h) = match player.pose() {
        PlayerPose::Run(frame) => (&assets.player_run[frame], PLAYER_H),
        PlayerPose::Jump => (&assets.player_jump, PLAYER_H),
        PlayerPose::Slide => (&assets.player_slide, SLIDE_SPRITE_H),
    };
    draw_sprite(tex, player.x, player.y, PLAYER_W, sprite_h);
}

fn draw_sprite(tex: &Texture2D, x: f32, y: f32, w: f32, h: f32) {
    draw_texture_ex(
        tex,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w, h)),
            ..Default::default()
        },
    );
}

fn draw_hud(state: &GameState, high: &HighScore, show_fps: bool) {
    draw_text(
        &format!("Score: {}", state.score),
        10.0,
        34.0,
        HUD_FONT_SIZE,
        WHITE,
    );
    draw_text(
        &format!("High Score: {}", high.best()),
        10.0,
        64.0,
        HUD_FONT_SIZE,
        WHITE,
    );
    if show_fps {
        draw_text(
            &format!("FPS: {}", get_fps()),
            SCREEN_W - 120.0,
            34.0,
            HUD_FONT_SIZE,
            WHITE,
        );
    }
}

fn center_text(text: &str) {
    let size = measure_text(text, None, OVERLAY_FONT_SIZE as u16, 1.0);
    draw_text(
        text,
        (SCREEN_W - size.width) / 2.0,
        SCREEN_H / 2.0,
        OVERLAY_FONT_SIZE,
        WHITE,
    );
}
