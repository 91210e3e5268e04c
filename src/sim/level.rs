//! Level descriptors
//!
//! A level is a fixed list of (shape, position) placements plus a time
//! budget. It is plain data: it can live in a JSON file or be built in code
//! without changing core behavior. Degenerate geometry is rejected here, at
//! load time, never during a tick.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Entry/exit fixtures of the teleport pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeleportSpec {
    pub entry: Rect,
    pub exit: Rect,
}

/// Goal structure placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSpec {
    pub pole: Rect,
    pub flag: Rect,
}

/// A complete level: every placement the session starts with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Top-left corner of the player's starting box
    pub player_spawn: Vec2,
    pub obstacles: Vec<Rect>,
    pub hazards: Vec<Rect>,
    pub coins: Vec<Rect>,
    pub teleport: Option<TeleportSpec>,
    pub goal: GoalSpec,
    /// Countdown budget in seconds
    pub time_limit: f32,
}

/// Load-time validation failures
#[derive(Debug)]
pub enum LevelError {
    /// A collider with zero or negative width/height; names the offending
    /// placement list
    DegenerateRect(&'static str),
    NonPositiveTime,
    Parse(String),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::DegenerateRect(what) => {
                write!(f, "zero- or negative-sized rect in {what}")
            }
            LevelError::NonPositiveTime => write!(f, "time limit must be positive"),
            LevelError::Parse(msg) => write!(f, "malformed level data: {msg}"),
        }
    }
}

impl std::error::Error for LevelError {}

fn check_rects(rects: &[Rect], what: &'static str) -> Result<(), LevelError> {
    if rects.iter().any(|r| r.size.x <= 0.0 || r.size.y <= 0.0) {
        return Err(LevelError::DegenerateRect(what));
    }
    Ok(())
}

impl Level {
    /// Reject malformed placements before the session starts
    pub fn validate(&self) -> Result<(), LevelError> {
        check_rects(&self.obstacles, "obstacles")?;
        check_rects(&self.hazards, "hazards")?;
        check_rects(&self.coins, "coins")?;
        if let Some(tp) = &self.teleport {
            check_rects(&[tp.entry, tp.exit], "teleport")?;
        }
        check_rects(&[self.goal.pole, self.goal.flag], "goal")?;
        if self.time_limit <= 0.0 {
            return Err(LevelError::NonPositiveTime);
        }
        Ok(())
    }

    /// Parse and validate a JSON level descriptor
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Level =
            serde_json::from_str(json).map_err(|e| LevelError::Parse(e.to_string()))?;
        level.validate()?;
        Ok(level)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The built-in level: a floor-level run past platforms, two monsters,
    /// a toilet/tap teleport and the flagpole at the far end.
    pub fn bundled() -> Self {
        Self {
            player_spawn: Vec2::new(175.0, FLOOR_Y - PLAYER_H),
            obstacles: vec![
                Rect::new(350.0, 500.0, 150.0, 30.0),
                Rect::new(620.0, 430.0, 140.0, 30.0),
                Rect::new(1150.0, 500.0, 150.0, 30.0),
                Rect::new(1450.0, 430.0, 140.0, 30.0),
                // Ground-level block the player has to jump over
                Rect::new(1750.0, FLOOR_Y - 50.0, 60.0, 50.0),
            ],
            hazards: vec![
                Rect::new(700.0, FLOOR_Y - 50.0, 50.0, 50.0),
                Rect::new(1600.0, FLOOR_Y - 50.0, 50.0, 50.0),
            ],
            coins: vec![
                Rect::new(400.0, 450.0, 30.0, 30.0),
                Rect::new(670.0, 380.0, 30.0, 30.0),
                Rect::new(1200.0, 450.0, 30.0, 30.0),
                Rect::new(1900.0, 520.0, 30.0, 30.0),
            ],
            teleport: Some(TeleportSpec {
                entry: Rect::new(900.0, FLOOR_Y - 60.0, 60.0, 60.0),
                exit: Rect::new(1350.0, FLOOR_Y - 60.0, 60.0, 60.0),
            }),
            goal: GoalSpec {
                pole: Rect::new(2400.0, 205.0, 10.0, 400.0),
                flag: Rect::new(2360.0, 205.0, 40.0, 30.0),
            },
            time_limit: TIME_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_level_valid() {
        assert!(Level::bundled().validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_obstacle() {
        let mut level = Level::bundled();
        level.obstacles.push(Rect::new(0.0, 0.0, 0.0, 10.0));
        assert!(matches!(
            level.validate(),
            Err(LevelError::DegenerateRect("obstacles"))
        ));
    }

    #[test]
    fn test_rejects_negative_hazard_size() {
        let mut level = Level::bundled();
        level.hazards.push(Rect::new(0.0, 0.0, 20.0, -5.0));
        assert!(matches!(
            level.validate(),
            Err(LevelError::DegenerateRect("hazards"))
        ));
    }

    #[test]
    fn test_rejects_non_positive_time() {
        let mut level = Level::bundled();
        level.time_limit = 0.0;
        assert!(matches!(level.validate(), Err(LevelError::NonPositiveTime)));
    }

    #[test]
    fn test_json_round_trip() {
        let level = Level::bundled();
        let json = level.to_json().unwrap();
        let back = Level::from_json(&json).unwrap();
        assert_eq!(back.obstacles.len(), level.obstacles.len());
        assert_eq!(back.player_spawn, level.player_spawn);
        assert_eq!(back.goal.pole, level.goal.pole);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Level::from_json("not json"),
            Err(LevelError::Parse(_))
        ));
    }
}
