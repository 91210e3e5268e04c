//! Game state and core simulation types
//!
//! Everything the renderer, HUD and sound dispatcher read lives here: entity
//! boxes, the player's frame index, score, remaining time and the per-tick
//! event stream.

use serde::{Deserialize, Serialize};

use super::level::{Level, LevelError};
use super::rect::Rect;
use crate::consts::*;

/// Player lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Standing on the floor or an obstacle top
    Grounded,
    /// In the air (jumping or falling)
    Airborne,
    /// Attached to the goal pole, running the scripted end sequence
    OnFlagpole { phase: PolePhase },
    /// Run ended in failure
    Dead,
    /// Run ended at the goal
    GoalReached,
}

/// Sub-phases of the flagpole end sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolePhase {
    /// Frozen in place until the flag marker descends to the player's level
    Attached,
    /// Moving straight down the pole, scoring per tick
    Sliding,
    /// On the ground, walking right toward the finish column
    WalkingOff,
}

/// The controllable character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity in pixels per tick, positive is down
    pub vy: f32,
    pub state: PlayerState,
    /// Horizontal world-scroll/advance is suspended while set. Recomputed
    /// every tick from side contacts; held permanently on the flagpole.
    pub blocked: bool,
    pub is_jumping: bool,
    /// True when a horizontal input was applied this tick (drives animation)
    pub moving: bool,
    /// Current walk-cycle frame for the renderer
    pub frame_index: usize,
    /// Ticks accumulated toward the next frame advance
    anim_ticks: u32,
    /// Top/bottom edges before the most recent vertical integration,
    /// used for the face-crossing tests
    pub prev_top: f32,
    pub prev_bottom: f32,
}

impl Player {
    pub fn new(spawn: glam::Vec2) -> Self {
        let rect = Rect {
            pos: spawn,
            size: glam::Vec2::new(PLAYER_W, PLAYER_H),
        };
        Self {
            vy: 0.0,
            state: PlayerState::Grounded,
            blocked: false,
            is_jumping: false,
            moving: false,
            frame_index: 0,
            anim_ticks: 0,
            prev_top: rect.top(),
            prev_bottom: rect.bottom(),
            rect,
        }
    }

    /// Advance or reset the walk-cycle frame. Deterministic: one frame per
    /// ANIM_PERIOD_TICKS while moving, snaps back to 0 the tick movement
    /// stops.
    pub fn advance_animation(&mut self) {
        if self.moving {
            self.anim_ticks += 1;
            if self.anim_ticks >= ANIM_PERIOD_TICKS {
                self.frame_index = (self.frame_index + 1) % PLAYER_FRAME_COUNT;
                self.anim_ticks = 0;
            }
        } else {
            self.frame_index = 0;
            self.anim_ticks = 0;
        }
    }

    /// Refresh the previous-edge snapshot to the current box (after a warp,
    /// so the teleport cannot fabricate a face crossing)
    pub fn sync_prev_edges(&mut self) {
        self.prev_top = self.rect.top();
        self.prev_bottom = self.rect.bottom();
    }
}

/// Immovable platform geometry. Shape never changes; position only moves
/// with the world scroll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

/// A patrolling monster. Drifts left on its own every tick, in addition to
/// any scroll shift. Stompable from above, lethal from anywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    pub alive: bool,
}

/// A coin. Collected exactly once on player overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    pub collected: bool,
}

/// The toilet/tap transport: drop into the entry while holding "down" and
/// the player warps to the exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeleportPair {
    pub entry: Rect,
    pub exit: Rect,
}

/// The terminal flagpole structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flagpole {
    /// Thin vertical collider the player attaches to
    pub pole: Rect,
    /// Cosmetic flag marker; descends independently once the level starts
    pub flag: Rect,
    /// Set once the flag marker finishes its descent
    pub lowered: bool,
}

/// Discrete triggers for the external sound dispatcher. Drained by the
/// caller each tick; the core never blocks on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jump,
    Stomp,
    CoinPickup,
    Teleport,
    GoalSlideTick,
    Death,
}

/// Terminal result exposed to the end-screen collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Session continues
    Running,
    Dead {
        time_expired: bool,
    },
    GoalReached,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub hazards: Vec<Hazard>,
    pub coins: Vec<Coin>,
    pub teleport: Option<TeleportPair>,
    pub goal: Flagpole,
    /// Monotonically non-decreasing
    pub score: u64,
    /// Remaining real-time seconds; clamped at exactly 0.0
    pub time_left: f32,
    pub time_expired: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub is_game_over: bool,
    /// Set on GoalReached, never on Dead
    pub success: bool,
    /// Pending audio triggers, drained by the caller
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Set by the player controller when this tick's rightward travel should
    /// come from the world shifting; consumed by the scroll pass.
    #[serde(skip)]
    pub scroll_pending: bool,
}

impl GameState {
    /// Build a session from a validated level descriptor
    pub fn from_level(level: &Level) -> Result<Self, LevelError> {
        level.validate()?;
        Ok(Self {
            player: Player::new(level.player_spawn),
            obstacles: level
                .obstacles
                .iter()
                .map(|&rect| Obstacle { rect })
                .collect(),
            hazards: level
                .hazards
                .iter()
                .map(|&rect| Hazard { rect, alive: true })
                .collect(),
            coins: level
                .coins
                .iter()
                .map(|&rect| Coin {
                    rect,
                    collected: false,
                })
                .collect(),
            teleport: level.teleport.as_ref().map(|t| TeleportPair {
                entry: t.entry,
                exit: t.exit,
            }),
            goal: Flagpole {
                pole: level.goal.pole,
                flag: level.goal.flag,
                lowered: false,
            },
            score: 0,
            time_left: level.time_limit,
            time_expired: false,
            time_ticks: 0,
            is_game_over: false,
            success: false,
            events: Vec::new(),
            scroll_pending: false,
        })
    }

    /// Terminal failure transition. A no-op when the session already ended,
    /// so death side effects never re-fire.
    pub fn kill(&mut self) {
        if self.is_game_over {
            return;
        }
        self.is_game_over = true;
        self.success = false;
        self.player.state = PlayerState::Dead;
        self.events.push(GameEvent::Death);
    }

    /// Terminal success transition. Idempotent like `kill`.
    pub fn reach_goal(&mut self) {
        if self.is_game_over {
            return;
        }
        self.is_game_over = true;
        self.success = true;
        self.player.state = PlayerState::GoalReached;
    }

    /// Current session outcome for the end-screen collaborator
    pub fn outcome(&self) -> Outcome {
        if !self.is_game_over {
            Outcome::Running
        } else if self.success {
            Outcome::GoalReached
        } else {
            Outcome::Dead {
                time_expired: self.time_expired,
            }
        }
    }

    /// Take this tick's audio triggers
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
