//! Player controller
//!
//! Owns velocity, the grounded/airborne state machine, input response,
//! collision resolution against the world and the scripted flagpole end
//! sequence. Inputs arrive as explicit per-tick sets; nothing in here polls
//! hardware.

use super::collision::{self, Face};
use super::scroll;
use super::state::{GameEvent, GameState, PlayerState, PolePhase};
use super::tick::TickInput;
use crate::consts::*;

/// Advance the player one tick.
///
/// Update order is a contract; interaction checks run before gravity.
/// Phases: teleport/hazard checks, jump trigger, vertical integration,
/// obstacle resolution, floor clamp, horizontal input, screen clamp,
/// animation.
pub fn update(state: &mut GameState, input: &TickInput) {
    if state.is_game_over {
        return;
    }
    if let PlayerState::OnFlagpole { phase } = state.player.state {
        update_pole_ride(state, phase);
        return;
    }

    // `blocked` only holds for the tick its side contact is detected in;
    // persisting contacts re-trigger it below
    state.player.blocked = false;
    state.player.moving = false;

    check_teleport(state, input);
    check_hazards(state);
    if state.is_game_over {
        return;
    }

    // Jump is edge-triggered and only fires from the ground
    if input.jump_pressed
        && !state.player.is_jumping
        && state.player.state == PlayerState::Grounded
    {
        state.player.vy = -JUMP_SPEED;
        state.player.is_jumping = true;
        state.player.state = PlayerState::Airborne;
        state.events.push(GameEvent::Jump);
    }

    // Integrate: move, then accelerate, so the first airborne tick travels
    // the full jump speed
    {
        let p = &mut state.player;
        p.prev_top = p.rect.top();
        p.prev_bottom = p.rect.bottom();
        p.rect.pos.y += p.vy;
        p.vy += GRAVITY;
    }

    // Resolve against every obstacle; at most one face per obstacle per tick
    let mut grounded = false;
    for i in 0..state.obstacles.len() {
        let obstacle = state.obstacles[i].rect;
        let p = &mut state.player;
        match collision::resolve(&mut p.rect, &mut p.vy, p.prev_top, p.prev_bottom, &obstacle) {
            Some(Face::Top) => grounded = true,
            Some(Face::Left) | Some(Face::Right) => p.blocked = true,
            Some(Face::Bottom) | None => {}
        }
    }

    // Floor clamp. A bottom that reached the plane this tick is a landing
    // even when one tick's delta carries the whole box past it; only a box
    // fully below the floor that never crossed the plane fell out of the
    // world.
    if state.player.rect.bottom() >= FLOOR_Y && state.player.prev_bottom <= FLOOR_Y {
        state.player.rect.pos.y = FLOOR_Y - state.player.rect.size.y;
        state.player.vy = 0.0;
        grounded = true;
    } else if state.player.rect.top() > FLOOR_Y {
        state.kill();
        return;
    }
    if grounded {
        state.player.state = PlayerState::Grounded;
        state.player.is_jumping = false;
    } else {
        state.player.state = PlayerState::Airborne;
    }

    // Horizontal input. "Left" always moves the player's own box; "right"
    // either queues a world scroll or advances the box, never both.
    if input.left {
        state.player.moving = true;
        state.player.rect.pos.x -= PLAYER_SPEED;
        push_out_sides(state, false);
    }
    if input.right {
        state.player.moving = true;
        if scroll::permitted(state, true) {
            state.scroll_pending = true;
        } else if !state.player.blocked {
            state.player.rect.pos.x += PLAYER_SPEED;
            push_out_sides(state, true);
        }
    }

    // Clamp to the screen column range
    let max_x = SCREEN_W - state.player.rect.size.x;
    state.player.rect.pos.x = state.player.rect.pos.x.clamp(0.0, max_x);

    state.player.advance_animation();
}

/// Attach to the goal pole on overlap. Gated on the pole box only, never on
/// the flag marker's descent state. Called by the tick driver after the
/// player has moved.
pub fn try_attach_flagpole(state: &mut GameState) {
    if state.is_game_over {
        return;
    }
    if matches!(state.player.state, PlayerState::OnFlagpole { .. }) {
        return;
    }
    if state.player.rect.overlaps(&state.goal.pole) {
        state.player.state = PlayerState::OnFlagpole {
            phase: PolePhase::Attached,
        };
        state.player.blocked = true;
        state.player.vy = 0.0;
        // Attachment suspends the world scroll immediately
        state.scroll_pending = false;
    }
}

/// The scripted end sequence: hold position until the marker arrives, slide
/// down the pole scoring per tick, then walk right to the finish column.
fn update_pole_ride(state: &mut GameState, phase: PolePhase) {
    state.player.blocked = true;
    state.player.moving = false;

    match phase {
        PolePhase::Attached => {
            if state.goal.lowered || state.goal.flag.top() >= state.player.rect.top() {
                state.player.state = PlayerState::OnFlagpole {
                    phase: PolePhase::Sliding,
                };
            }
        }
        PolePhase::Sliding => {
            state.player.rect.pos.y += SLIDE_SPEED;
            state.score += SLIDE_SCORE;
            state.events.push(GameEvent::GoalSlideTick);
            if state.player.rect.bottom() >= FLOOR_Y {
                state.player.rect.pos.y = FLOOR_Y - state.player.rect.size.y;
                state.player.state = PlayerState::OnFlagpole {
                    phase: PolePhase::WalkingOff,
                };
            }
        }
        PolePhase::WalkingOff => {
            state.player.rect.pos.x += WALK_SPEED;
            if state.player.rect.left() >= FINISH_X {
                state.reach_goal();
            }
        }
    }

    state.player.advance_animation();
}

/// Drop into the entry fixture while holding "down" and the player warps to
/// the exit. No cooldown: the warp re-fires every tick the conditions hold.
fn check_teleport(state: &mut GameState, input: &TickInput) {
    let (entry, exit) = match &state.teleport {
        Some(tp) => (tp.entry, tp.exit),
        None => return,
    };
    if input.down
        && state.player.rect.overlaps(&entry)
        && state.player.rect.bottom() >= entry.top()
    {
        state.player.rect.pos.x = exit.left();
        state.player.rect.pos.y = exit.top() - state.player.rect.size.y;
        // A warp is not a face crossing
        state.player.sync_prev_edges();
        state.events.push(GameEvent::Teleport);
    }
}

/// Stomp-or-die pass over the hazards. The stomp check precedes the generic
/// lethal check; a terminal transition stops the pass immediately. Removal
/// is deferred to the end of the pass.
fn check_hazards(state: &mut GameState) {
    for i in 0..state.hazards.len() {
        if !state.hazards[i].alive {
            continue;
        }
        let hazard = state.hazards[i].rect;
        if !state.player.rect.overlaps(&hazard) {
            continue;
        }
        let stomp = state.player.vy > 0.0
            && state.player.prev_bottom <= hazard.top()
            && state.player.rect.bottom() >= hazard.top();
        if stomp {
            state.hazards[i].alive = false;
            state.player.vy = -JUMP_SPEED / 2.0;
            state.score += STOMP_BONUS;
            state.events.push(GameEvent::Stomp);
        } else {
            state.kill();
            return;
        }
    }
    state.hazards.retain(|h| h.alive);
}

/// Resolve side contacts created by a horizontal displacement
fn push_out_sides(state: &mut GameState, moved_right: bool) {
    for i in 0..state.obstacles.len() {
        let obstacle = state.obstacles[i].rect;
        if collision::resolve_side(&mut state.player.rect, &obstacle, moved_right) {
            state.player.blocked = true;
        }
    }
}
