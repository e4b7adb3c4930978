//! Startup-time asset bundle
//!
//! Every texture the game draws, loaded once before the loop starts. A
//! missing or unreadable file is fatal: the game refuses to start rather
//! than run without art.

use macroquad::texture::{FilterMode, Texture2D, load_texture};

use crate::sim::ObstacleKind;

/// Directory all image files are loaded from, relative to the working dir.
pub const ASSET_DIR: &str = "assets";

pub struct Assets {
    pub bg_far: Texture2D,
    pub bg_mid: Texture2D,
    pub bg_ground: Texture2D,
    pub player_run: [Texture2D; 3],
    pub player_jump: Texture2D,
    pub player_slide: Texture2D,
    pub coin: [Texture2D; 3],
    pub obstacle_log: Texture2D,
    pub obstacle_rock: Texture2D,
}

impl Assets {
    /// Load the full bundle from `dir`, failing on the first missing file.
    pub async fn load(dir: &str) -> Result<Self, macroquad::Error> {
        let assets = Self {
            bg_far: texture(dir, "bg_far.png").await?,
            bg_mid: texture(dir, "bg_mid.png").await?,
            bg_ground: texture(dir, "bg_ground.png").await?,
            player_run: [
                texture(dir, "player_run_1.png").await?,
                texture(dir, "player_run_2.png").await?,
                texture(dir, "player_run_3.png").await?,
            ],
            player_jump: texture(dir, "player_jump.png").await?,
            player_slide: texture(dir, "player_slide.png").await?,
            coin: [
                texture(dir, "coin_1.png").await?,
                texture(dir, "coin_2.png").await?,
                texture(dir, "coin_3.png").await?,
            ],
            obstacle_log: texture(dir, "obstacle_log.png").await?,
            obstacle_rock: texture(dir, "obstacle_rock.png").await?,
        };
        log::info!("assets loaded from {dir}/");
        Ok(assets)
    }

    pub fn obstacle(&self, kind: ObstacleKind) -> &Texture2D {
        match kind {
            ObstacleKind::Log => &self.obstacle_log,
            ObstacleKind::Rock => &self.obstacle_rock,
        }
    }
}

async fn texture(dir: &str, name: &str) -> Result<Texture2D, macroquad::Error> {
    let tex = load_texture(&format!("{dir}/{name}")).await?;
    // Sprites are drawn scaled to their logical sizes; linear filtering
    // keeps the scaling smooth.
    tex.set_filter(FilterMode::Linear);
    Ok(tex)
}
