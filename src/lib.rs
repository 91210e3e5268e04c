//! Flagrun - a side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `settings`: Player preferences consumed by the audio/HUD collaborators
//!
//! Rendering, audio playback and raw input polling live outside this crate;
//! the simulation exposes entity boxes, frame indices, score/time and a
//! per-tick event stream for those collaborators to consume.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (30 Hz)
    pub const SIM_DT: f32 = 1.0 / 30.0;

    /// Screen dimensions (the fixed viewport the world scrolls through)
    pub const SCREEN_W: f32 = 1000.0;
    pub const SCREEN_H: f32 = 700.0;
    /// World floor: the y coordinate entity bottoms rest on
    pub const FLOOR_Y: f32 = 605.0;

    /// Player defaults
    pub const PLAYER_W: f32 = 50.0;
    pub const PLAYER_H: f32 = 50.0;
    /// Horizontal speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Initial upward speed on jump (pixels per tick, applied as negative y)
    pub const JUMP_SPEED: f32 = 40.0;
    /// Constant downward acceleration (pixels per tick per tick)
    pub const GRAVITY: f32 = 5.0;
    /// Walk-cycle frame advances once per this many ticks while moving
    pub const ANIM_PERIOD_TICKS: u32 = 5;
    /// Number of walk-cycle frames the renderer provides
    pub const PLAYER_FRAME_COUNT: usize = 6;

    /// World scroll: distance everything shifts left per scroll tick.
    /// Identical to PLAYER_SPEED so that "world moves" and "player moves"
    /// ticks cover the same ground.
    pub const SCROLL_SPEED: f32 = 5.0;
    /// The player leads the world up to this screen column before the
    /// world starts scrolling under them
    pub const SCROLL_THRESHOLD_X: f32 = 200.0;
    /// Scrolling stops once the goal pole reaches this screen x
    pub const WORLD_END_X: f32 = 800.0;

    /// Hazard autonomous leftward drift per tick (on top of any scroll)
    pub const HAZARD_DRIFT: f32 = 2.0;

    /// Scoring
    pub const STOMP_BONUS: u64 = 100;
    pub const COIN_BONUS: u64 = 50;
    /// Awarded per tick while sliding down the flagpole
    pub const SLIDE_SCORE: u64 = 10;

    /// Flagpole sequence
    pub const SLIDE_SPEED: f32 = 8.0;
    pub const WALK_SPEED: f32 = 4.0;
    /// Screen x the player walks to after dismounting; reaching it ends
    /// the session successfully
    pub const FINISH_X: f32 = 900.0;
    /// Cosmetic flag marker descent per tick
    pub const FLAG_DESCENT: f32 = 6.0;
    /// Resting y for the flag marker's top edge
    pub const FLAG_REST_Y: f32 = 545.0;

    /// Session time budget (real-time seconds)
    pub const TIME_LIMIT: f32 = 90.0;
}
