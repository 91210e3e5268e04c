//! World-scroll model
//!
//! The viewport never moves. Traversal is simulated by shifting every
//! scrollable entity leftward in lockstep while the player occupies a fixed
//! screen column. Every entity must shift by exactly the same delta in the
//! same tick; drift between them is a correctness bug.

use glam::Vec2;

use super::collision;
use super::state::GameState;
use crate::consts::*;

/// Whether this tick's rightward travel may come from the world shifting
/// instead of the player's box advancing. The goal pole doubles as the
/// sentinel: once it reaches its on-screen stop column, the world end has
/// scrolled into view.
pub fn permitted(state: &GameState, right_held: bool) -> bool {
    right_held
        && state.player.rect.left() >= SCROLL_THRESHOLD_X
        && !state.player.blocked
        && state.goal.pole.left() > WORLD_END_X
}

/// Shift every scrollable entity left by `delta`. The player's box is left
/// untouched; any side contact the shift creates is pushed out and marks the
/// player blocked, which suppresses further scrolling while it persists.
pub fn apply(state: &mut GameState, delta: f32) {
    let shift = Vec2::new(-delta, 0.0);
    for obstacle in &mut state.obstacles {
        obstacle.rect.translate(shift);
    }
    for hazard in &mut state.hazards {
        hazard.rect.translate(shift);
    }
    for coin in &mut state.coins {
        coin.rect.translate(shift);
    }
    if let Some(tp) = &mut state.teleport {
        tp.entry.translate(shift);
        tp.exit.translate(shift);
    }
    state.goal.pole.translate(shift);
    state.goal.flag.translate(shift);

    // The world moving left under a stationary player is relative rightward
    // motion, so shift-induced contacts resolve against obstacle left faces
    for i in 0..state.obstacles.len() {
        let obstacle = state.obstacles[i].rect;
        if collision::resolve_side(&mut state.player.rect, &obstacle, true) {
            state.player.blocked = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{GoalSpec, Level, TeleportSpec};
    use crate::sim::rect::Rect;

    fn test_state() -> GameState {
        let level = Level {
            player_spawn: Vec2::new(200.0, FLOOR_Y - PLAYER_H),
            obstacles: vec![Rect::new(400.0, 500.0, 100.0, 30.0)],
            hazards: vec![Rect::new(700.0, FLOOR_Y - 50.0, 50.0, 50.0)],
            coins: vec![Rect::new(450.0, 450.0, 30.0, 30.0)],
            teleport: Some(TeleportSpec {
                entry: Rect::new(900.0, FLOOR_Y - 60.0, 60.0, 60.0),
                exit: Rect::new(1300.0, FLOOR_Y - 60.0, 60.0, 60.0),
            }),
            goal: GoalSpec {
                pole: Rect::new(2000.0, 205.0, 10.0, 400.0),
                flag: Rect::new(1960.0, 205.0, 40.0, 30.0),
            },
            time_limit: 90.0,
        };
        GameState::from_level(&level).unwrap()
    }

    #[test]
    fn test_permitted_requires_right_held() {
        let state = test_state();
        assert!(permitted(&state, true));
        assert!(!permitted(&state, false));
    }

    #[test]
    fn test_permitted_requires_threshold() {
        let mut state = test_state();
        state.player.rect.pos.x = SCROLL_THRESHOLD_X - 1.0;
        assert!(!permitted(&state, true));
    }

    #[test]
    fn test_permitted_suppressed_while_blocked() {
        let mut state = test_state();
        state.player.blocked = true;
        assert!(!permitted(&state, true));
    }

    #[test]
    fn test_permitted_stops_at_world_end() {
        let mut state = test_state();
        state.goal.pole.pos.x = WORLD_END_X;
        assert!(!permitted(&state, true));
    }

    #[test]
    fn test_apply_shifts_everything_in_lockstep() {
        let mut state = test_state();
        let before: Vec<f32> = vec![
            state.obstacles[0].rect.left(),
            state.hazards[0].rect.left(),
            state.coins[0].rect.left(),
            state.teleport.as_ref().unwrap().entry.left(),
            state.teleport.as_ref().unwrap().exit.left(),
            state.goal.pole.left(),
            state.goal.flag.left(),
        ];
        let player_before = state.player.rect.pos;

        apply(&mut state, SCROLL_SPEED);

        let after: Vec<f32> = vec![
            state.obstacles[0].rect.left(),
            state.hazards[0].rect.left(),
            state.coins[0].rect.left(),
            state.teleport.as_ref().unwrap().entry.left(),
            state.teleport.as_ref().unwrap().exit.left(),
            state.goal.pole.left(),
            state.goal.flag.left(),
        ];
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b - a, SCROLL_SPEED);
        }
        // The player's box never moves during a scroll tick
        assert_eq!(state.player.rect.pos, player_before);
    }

    #[test]
    fn test_shift_into_wall_blocks_and_pushes_out() {
        let mut state = test_state();
        // Wall just right of the player at ground level
        state.obstacles[0].rect = Rect::new(253.0, FLOOR_Y - 100.0, 50.0, 100.0);

        apply(&mut state, SCROLL_SPEED);

        assert!(state.player.blocked);
        // Pushed out to touch the wall's left face exactly
        assert_eq!(state.player.rect.right(), state.obstacles[0].rect.left());
    }
}
