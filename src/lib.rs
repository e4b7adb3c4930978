//! Strider - a side-view endless runner
//!
//! Core modules:
//! - `sim`: deterministic simulation (entities, spawning, collisions, score)
//! - `renderer`: sprite and HUD drawing
//! - `assets`: startup-time texture bundle
//! - `highscore`: best-score file persistence
//! - `settings`: optional local preferences

pub mod assets;
pub mod highscore;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscore::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen size; the window is fixed at this size
    pub const SCREEN_W: f32 = 960.0;
    pub const SCREEN_H: f32 = 540.0;
    /// Ground line the player and obstacles stand on
    pub const GROUND_Y: f32 = SCREEN_H - 110.0;

    /// Fixed simulation timestep (60 Hz, in milliseconds)
    pub const TICK_DT_MS: f32 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Per-frame elapsed-time clamp (ms) so a hitch can't flood the accumulator
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Player body. The slide sprite is shorter but the hitbox is not.
    pub const PLAYER_X: f32 = 150.0;
    pub const PLAYER_W: f32 = 64.0;
    pub const PLAYER_H: f32 = 80.0;
    pub const SLIDE_SPRITE_H: f32 = 60.0;
    /// Upward jump impulse (px per tick; negative is up)
    pub const JUMP_VEL: f32 = -18.0;
    /// Gravity added to vertical velocity each tick
    pub const GRAVITY: f32 = 0.8;
    /// Slide duration in milliseconds
    pub const SLIDE_MS: f32 = 300.0;
    pub const RUN_FRAMES: usize = 3;
    pub const RUN_ANIM_FPS: f32 = 8.0;

    /// Obstacle footprint (both sprite variants share it)
    pub const OBSTACLE_W: f32 = 64.0;
    pub const OBSTACLE_H: f32 = 48.0;

    pub const COIN_SIZE: f32 = 32.0;
    pub const COIN_FRAMES: usize = 3;
    pub const COIN_ANIM_FPS: f32 = 10.0;
    /// Vertical band coins spawn in, above the ground line
    pub const COIN_BAND_TOP: f32 = GROUND_Y - 160.0;
    pub const COIN_BAND_BOTTOM: f32 = GROUND_Y - 60.0;

    /// Spawn cadence, measured in simulation time
    pub const OBSTACLE_INTERVAL_MS: f64 = 1500.0;
    pub const COIN_INTERVAL_MS: f64 = 800.0;
    /// New entities appear just past the right edge
    pub const SPAWN_X: f32 = SCREEN_W + 50.0;

    /// Scroll speed at the start of a run (px per tick)
    pub const START_SPEED: f32 = 6.0;
    /// Distance score accrued per tick, as a fraction of speed
    pub const SCORE_RATE: f32 = 0.1;
    /// Points per collected coin
    pub const COIN_REWARD: u32 = 10;
    /// Speed steps up once per this many points
    pub const SPEED_STEP_SCORE: u32 = 500;
    /// Speed increase per threshold crossed
    pub const SPEED_INCREMENT: f32 = 0.25;

    /// Parallax depth fractions for the far and mid background layers
    pub const PARALLAX_FAR: f32 = 0.2;
    pub const PARALLAX_MID: f32 = 0.4;
}
