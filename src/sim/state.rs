//! Game state and core simulation types
//!
//! Everything the renderer reads to draw a frame lives here; all of it is
//! advanced exclusively by `tick`.

use macroquad::math::Rect;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Start,
    /// Active gameplay
    Running,
    /// Run ended by an obstacle hit; re-enterable via confirm
    GameOver,
}

/// Cycles a fixed frame sequence at its own rate, independent of game speed.
#[derive(Debug, Clone)]
pub struct Animator {
    frame_count: usize,
    fps: f32,
    index: usize,
    timer_ms: f32,
}

impl Animator {
    pub fn new(frame_count: usize, fps: f32) -> Self {
        Self {
            frame_count,
            fps,
            index: 0,
            timer_ms: 0.0,
        }
    }

    /// Advance the frame timer by `dt_ms`, stepping at most one frame.
    /// The timer resets to zero on a step rather than carrying a remainder.
    pub fn update(&mut self, dt_ms: f32) {
        if self.frame_count <= 1 {
            return;
        }
        self.timer_ms += dt_ms;
        if self.timer_ms >= 1000.0 / self.fps {
            self.timer_ms = 0.0;
            self.index = (self.index + 1) % self.frame_count;
        }
    }

    /// Index of the frame to display.
    pub fn current(&self) -> usize {
        self.index
    }
}

/// Which sprite the player shows this frame. Jumping wins over sliding,
/// sliding over the run cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPose {
    Run(usize),
    Jump,
    Slide,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Fixed horizontal position; the world scrolls, the player doesn't
    pub x: f32,
    pub y: f32,
    pub vel_y: f32,
    pub jumping: bool,
    pub sliding: bool,
    slide_timer_ms: f32,
    anim: Animator,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_X,
            y: GROUND_Y - PLAYER_H,
            vel_y: 0.0,
            jumping: false,
            sliding: false,
            slide_timer_ms: 0.0,
            anim: Animator::new(RUN_FRAMES, RUN_ANIM_FPS),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_W, PLAYER_H)
    }

    /// Start a jump. Ignored mid-jump or mid-slide.
    pub fn jump(&mut self) {
        if !self.jumping && !self.sliding {
            self.jumping = true;
            self.vel_y = JUMP_VEL;
        }
    }

    /// Start a slide. Ignored mid-jump or mid-slide.
    pub fn slide(&mut self) {
        if !self.jumping && !self.sliding {
            self.sliding = true;
            self.slide_timer_ms = SLIDE_MS;
        }
    }

    /// Per-tick physics: one-step Euler gravity while airborne (y clamped
    /// to the ground when the arc lands), slide countdown otherwise. The
    /// run animation advances regardless of pose.
    pub fn update(&mut self, dt_ms: f32) {
        self.anim.update(dt_ms);
        if self.jumping {
            self.vel_y += GRAVITY;
            self.y += self.vel_y;
            if self.y >= GROUND_Y - PLAYER_H {
                self.y = GROUND_Y - PLAYER_H;
                self.vel_y = 0.0;
                self.jumping = false;
            }
        }
        if self.sliding {
            self.slide_timer_ms -= dt_ms;
            if self.slide_timer_ms <= 0.0 {
                self.sliding = false;
            }
        }
    }

    pub fn pose(&self) -> PlayerPose {
        if self.jumping {
            PlayerPose::Jump
        } else if self.sliding {
            PlayerPose::Slide
        } else {
            PlayerPose::Run(self.anim.current())
        }
    }
}

/// Obstacle sprite variants; picked once at spawn, immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Log,
    Rock,
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(x: f32, kind: ObstacleKind) -> Self {
        Self { x, kind }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, GROUND_Y - OBSTACLE_H, OBSTACLE_W, OBSTACLE_H)
    }

    /// Scroll left by the current speed. Per tick, not dt-scaled; the
    /// tick rate is pinned at 60 Hz.
    pub fn update(&mut self, speed: f32) {
        self.x -= speed;
    }
}

#[derive(Debug, Clone)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    anim: Animator,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            anim: Animator::new(COIN_FRAMES, COIN_ANIM_FPS),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, COIN_SIZE, COIN_SIZE)
    }

    pub fn update(&mut self, dt_ms: f32, speed: f32) {
        self.x -= speed;
        self.anim.update(dt_ms);
    }

    /// Index into the coin spin cycle.
    pub fn frame(&self) -> usize {
        self.anim.current()
    }
}

/// Background layer offsets. Owned by the simulation so a pause freezes
/// the scenery along with everything else.
#[derive(Debug, Clone, Default)]
pub struct ParallaxScroll {
    pub far_x: f32,
    pub mid_x: f32,
    pub ground_x: f32,
}

impl ParallaxScroll {
    /// Scroll each layer at its depth fraction, wrapping at one screen width.
    pub fn advance(&mut self, speed: f32) {
        self.far_x -= speed * PARALLAX_FAR;
        self.mid_x -= speed * PARALLAX_MID;
        self.ground_x -= speed;
        if self.far_x <= -SCREEN_W {
            self.far_x = 0.0;
        }
        if self.mid_x <= -SCREEN_W {
            self.mid_x = 0.0;
        }
        if self.ground_x <= -SCREEN_W {
            self.ground_x = 0.0;
        }
    }
}

/// Complete game state, advanced only by `tick`.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Orthogonal to `phase`; only meaningful while Running
    pub paused: bool,
    /// Simulation time in ms. Advances only while Running and unpaused,
    /// so spawn timers cannot fire for time spent paused.
    pub time_ms: f64,
    pub last_obstacle_ms: f64,
    pub last_coin_ms: f64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub score: u32,
    /// Sub-point carry; per-tick accrual is fractional
    score_carry: f32,
    pub speed: f32,
    /// How many 500-point thresholds have already been paid out
    speed_level: u32,
    pub scroll: ParallaxScroll,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            paused: false,
            time_ms: 0.0,
            last_obstacle_ms: 0.0,
            last_coin_ms: 0.0,
            player: Player::new(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            score: 0,
            score_carry: 0.0,
            speed: START_SPEED,
            speed_level: 0,
            scroll: ParallaxScroll::default(),
        }
    }

    /// Full in-place reset back to the title screen: fresh player, empty
    /// entity lists, score and speed at their starting values. The next
    /// run draws its seed from the old stream.
    pub fn reset(&mut self) {
        let seed = self.rng.random::<u64>();
        *self = Self::new(seed);
    }

    /// Append an obstacle just past the right edge and stamp the timer.
    pub fn spawn_obstacle(&mut self) {
        let kind = if self.rng.random_range(0..2) == 0 {
            ObstacleKind::Log
        } else {
            ObstacleKind::Rock
        };
        self.obstacles.push(Obstacle::new(SPAWN_X, kind));
        self.last_obstacle_ms = self.time_ms;
    }

    /// Append a coin just past the right edge, at a random height within
    /// the spawn band, and stamp the timer.
    pub fn spawn_coin(&mut self) {
        let y = self.rng.random_range(COIN_BAND_TOP..=COIN_BAND_BOTTOM);
        self.coins.push(Coin::new(SPAWN_X, y));
        self.last_coin_ms = self.time_ms;
    }

    /// Credit `points` (fractions carried across ticks) and step the speed
    /// ratchet once per 500-point threshold crossed. Speed never steps
    /// again for frames spent sitting at a multiple.
    pub(crate) fn add_score(&mut self, points: f32) {
        self.score_carry += points;
        if self.score_carry >= 1.0 {
            let whole = self.score_carry.floor();
            self.score += whole as u32;
            self.score_carry -= whole;
        }
        let level = self.score / SPEED_STEP_SCORE;
        if level > self.speed_level {
            self.speed += SPEED_INCREMENT * (level - self.speed_level) as f32;
            self.speed_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_animator_single_frame_is_inert() {
        let mut anim = Animator::new(1, 8.0);
        anim.update(10_000.0);
        assert_eq!(anim.current(), 0);
    }

    #[test]
    fn test_animator_wraps_modulo_frame_count() {
        let mut anim = Animator::new(3, 8.0);
        // 8 fps = one step per 125 ms
        for expected in [1, 2, 0, 1] {
            anim.update(125.0);
            assert_eq!(anim.current(), expected);
        }
    }

    #[test]
    fn test_animator_large_dt_steps_at_most_once() {
        let mut anim = Animator::new(3, 8.0);
        anim.update(10_000.0);
        assert_eq!(anim.current(), 1);
    }

    proptest! {
        // One big update may never get ahead of the same total time fed
        // in 1 ms steps.
        #[test]
        fn prop_animator_big_dt_never_outruns_small_steps(dt_ms in 0u32..5_000) {
            let mut big = Animator::new(3, 8.0);
            let mut small = Animator::new(3, 8.0);

            let before = big.current();
            big.update(dt_ms as f32);
            let big_steps = usize::from(big.current() != before);

            let mut small_steps = 0usize;
            for _ in 0..dt_ms {
                let before = small.current();
                small.update(1.0);
                if small.current() != before {
                    small_steps += 1;
                }
            }

            prop_assert!(big_steps <= small_steps);
            prop_assert!(big.current() < 3);
            if dt_ms >= 125 {
                prop_assert_eq!(big_steps, 1);
            }
        }
    }

    #[test]
    fn test_jump_and_slide_are_mutually_exclusive() {
        let mut player = Player::new();
        player.jump();
        assert!(player.jumping);
        player.slide();
        assert!(!player.sliding, "slide must be ignored mid-jump");

        let mut player = Player::new();
        player.slide();
        assert!(player.sliding);
        player.jump();
        assert!(!player.jumping, "jump must be ignored mid-slide");
    }

    #[test]
    fn test_jump_returns_exactly_to_ground() {
        let mut player = Player::new();
        player.jump();
        let mut ticks = 0;
        while player.jumping {
            player.update(TICK_DT_MS);
            ticks += 1;
            assert!(ticks < 200, "jump never landed");
        }
        assert_eq!(player.y, GROUND_Y - PLAYER_H);
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_slide_expires_after_duration() {
        let mut player = Player::new();
        player.slide();
        for _ in 0..10 {
            player.update(TICK_DT_MS);
        }
        // 10 ticks is ~167 ms, well inside the 300 ms window
        assert!(player.sliding);
        for _ in 0..10 {
            player.update(TICK_DT_MS);
        }
        assert!(!player.sliding);
    }

    #[test]
    fn test_pose_priority() {
        let mut player = Player::new();
        assert!(matches!(player.pose(), PlayerPose::Run(_)));
        player.jump();
        assert_eq!(player.pose(), PlayerPose::Jump);

        let mut player = Player::new();
        player.slide();
        assert_eq!(player.pose(), PlayerPose::Slide);
    }

    #[test]
    fn test_parallax_offsets_stay_wrapped() {
        let mut scroll = ParallaxScroll::default();
        for _ in 0..2_000 {
            scroll.advance(7.5);
            for offset in [scroll.far_x, scroll.mid_x, scroll.ground_x] {
                assert!(offset <= 0.0 && offset > -SCREEN_W);
            }
        }
    }

    #[test]
    fn test_score_carry_accumulates_fractions() {
        let mut state = GameState::new(1);
        for _ in 0..10 {
            state.add_score(0.6);
        }
        assert_eq!(state.score, 6);
    }

    #[test]
    fn test_speed_ratchet_fires_once_per_threshold() {
        let mut state = GameState::new(1);
        let base = state.speed;

        state.add_score(499.0);
        assert_eq!(state.speed, base);

        state.add_score(1.0);
        assert_eq!(state.speed, base + SPEED_INCREMENT);

        // Sitting at the multiple must not re-fire
        state.add_score(0.25);
        state.add_score(0.25);
        assert_eq!(state.speed, base + SPEED_INCREMENT);

        // Crossing two thresholds at once pays out both
        state.add_score(1_000.0);
        assert_eq!(state.speed, base + 3.0 * SPEED_INCREMENT);
    }

    #[test]
    fn test_reset_restores_initial_shape() {
        let mut state = GameState::new(42);
        state.phase = GamePhase::Running;
        state.add_score(777.0);
        state.spawn_obstacle();
        state.spawn_coin();
        state.player.jump();
        let old_seed = state.seed;

        state.reset();
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, START_SPEED);
        assert!(state.obstacles.is_empty());
        assert!(state.coins.is_empty());
        assert_eq!(state.player.y, GROUND_Y - PLAYER_H);
        assert_ne!(state.seed, old_seed);
    }
}
