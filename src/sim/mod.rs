//! Deterministic simulation module
//!
//! Pure game logic: fixed timestep, explicit inputs, no rendering, audio or
//! platform dependencies. Everything a frontend needs is reachable from
//! [`GameState`] and [`tick`].

pub mod collision;
pub mod level;
pub mod player;
pub mod rect;
pub mod scroll;
pub mod state;
pub mod tick;

pub use collision::{Face, resolve, resolve_side};
pub use level::{GoalSpec, Level, LevelError, TeleportSpec};
pub use rect::Rect;
pub use state::{
    Coin, Flagpole, GameEvent, GameState, Hazard, Obstacle, Outcome, Player, PlayerState,
    PolePhase, TeleportPair,
};
pub use tick::{TickInput, tick};
