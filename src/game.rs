//! Playing-session driver
//!
//! Bridges the platform loop and the deterministic simulation: gathers
//! keyboard input, advances fixed 60 Hz steps from accumulated frame time,
//! turns simulation events into sound cues, and renders.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::audio::AudioManager;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::settings::Settings;
use crate::sim::{tick, GamePhase, GameState, TickInput};
use crate::{render, ui};

/// Run one full session and return the final score. The session ends on
/// game over or when the player backs out with Escape.
pub async fn run_session(
    assets: &Assets,
    audio: &AudioManager,
    settings: &Settings,
    seed: u64,
) -> u32 {
    log::info!("Session starting with seed {}", seed);

    let mut state = GameState::new(seed);
    let mut accumulator: f32 = 0.0;
    let mut input = TickInput::default();

    loop {
        // Held keys are sampled fresh; one-shots latch until a step runs
        input.thrust = is_key_down(KeyCode::Up);
        input.turn_left = is_key_down(KeyCode::Left);
        input.turn_right = is_key_down(KeyCode::Right);
        input.fire |= is_key_pressed(KeyCode::Space);
        input.hyperspace |=
            is_key_pressed(KeyCode::LeftShift) || is_key_pressed(KeyCode::RightShift);
        input.pause |= is_key_pressed(KeyCode::LeftAlt) || is_key_pressed(KeyCode::RightAlt);

        let frame_dt = get_frame_time().min(0.1);
        accumulator += frame_dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input, SIM_DT);
            // Clear one-shot inputs after processing
            input.fire = false;
            input.hyperspace = false;
            input.pause = false;
            accumulator -= SIM_DT;
            substeps += 1;
        }

        for event in state.events.drain(..) {
            audio.handle_event(&event);
        }

        if state.phase == GamePhase::Paused {
            ui::draw_pause_overlay(assets);
        } else {
            render::draw_frame(&state, assets, settings);
        }

        if state.phase == GamePhase::GameOver {
            log::info!("Game over with score {}", state.score);
            return state.score;
        }

        next_frame().await;

        if is_key_pressed(KeyCode::Escape) {
            log::info!("Session abandoned with score {}", state.score);
            return state.score;
        }
    }
}
