//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, windowing or filesystem dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::rects_overlap;
pub use state::{
    Animator, Coin, GamePhase, GameState, Obstacle, ObstacleKind, ParallaxScroll, Player,
    PlayerPose,
};
pub use tick::{TickInput, tick};
