//! Flagrun entry point
//!
//! Headless demo driver: runs the bundled level at the fixed timestep with a
//! scripted input stream and reports the outcome. Rendering and audio
//! frontends drive the same `tick` loop with real input instead.

use std::path::Path;

use flagrun::Settings;
use flagrun::consts::*;
use flagrun::sim::{GameEvent, GameState, Level, Outcome, TickInput, tick};

fn main() {
    env_logger::init();
    log::info!("Flagrun starting...");

    let settings = Settings::load(Path::new("settings.json"));
    log::info!(
        "Audio: sfx {:.2}, music {:.2}",
        settings.effective_sfx_volume(),
        settings.effective_music_volume()
    );

    let level = Level::bundled();
    let mut state = match GameState::from_level(&level) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Bad level: {e}");
            std::process::exit(1);
        }
    };

    // Scripted input: hold right, jump periodically, drop through the
    // teleport when standing in it
    let max_ticks = (level.time_limit / SIM_DT).ceil() as u64 + 1;
    while state.outcome() == Outcome::Running && state.time_ticks < max_ticks {
        let input = TickInput {
            right: true,
            down: state.time_ticks % 90 < 10,
            jump_pressed: state.time_ticks % 45 == 20,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::Jump => log::debug!("jump"),
                GameEvent::Stomp => log::info!("stomped a monster"),
                GameEvent::CoinPickup => log::info!("coin collected"),
                GameEvent::Teleport => log::info!("teleported"),
                GameEvent::GoalSlideTick => log::debug!("sliding down the pole"),
                GameEvent::Death => log::info!("player died"),
            }
        }

        if settings.show_fps && state.time_ticks % 150 == 0 {
            log::info!(
                "tick {}: score {}, time left {:.1}s",
                state.time_ticks,
                state.score,
                state.time_left
            );
        }
    }

    match state.outcome() {
        Outcome::GoalReached => println!("Goal reached! Final score: {}", state.score),
        Outcome::Dead { time_expired: true } => {
            println!("Time up. Final score: {}", state.score)
        }
        Outcome::Dead { time_expired: false } => {
            println!("Died at tick {}. Final score: {}", state.time_ticks, state.score)
        }
        Outcome::Running => println!("Stopped after {} ticks. Score: {}", state.time_ticks, state.score),
    }
}
