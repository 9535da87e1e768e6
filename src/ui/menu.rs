//! Main menu screen

use macroquad::prelude::*;

use super::{draw_prompt_line, draw_text_centered, Prompt};
use crate::assets::Assets;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Where the player wants to go from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Instructions,
    Quit,
}

pub async fn run(assets: &Assets, show_intro: bool) -> MenuAction {
    if show_intro {
        play_intro(assets).await;
    }

    loop {
        clear_background(BLACK);

        draw_text_centered("ASTEROIDS", FIELD_HEIGHT / 2.0 - 100.0, 76, assets);
        draw_prompt_line(
            &[
                Prompt::Text("Press"),
                Prompt::Key("enter"),
                Prompt::Text("to Start"),
            ],
            FIELD_HEIGHT / 2.0,
            26,
            assets,
        );
        draw_prompt_line(
            &[
                Prompt::Text("Press"),
                Prompt::Key("shift"),
                Prompt::Text("for Instructions  |  Press"),
                Prompt::Key("esc"),
                Prompt::Text("to Quit"),
            ],
            FIELD_HEIGHT - 40.0,
            20,
            assets,
        );

        next_frame().await;

        if is_key_pressed(KeyCode::Enter) {
            return MenuAction::Start;
        }
        if is_key_pressed(KeyCode::LeftShift) || is_key_pressed(KeyCode::RightShift) {
            return MenuAction::Instructions;
        }
        if is_key_pressed(KeyCode::Escape) {
            return MenuAction::Quit;
        }
    }
}

/// Attract sequence shown once at startup. The arcade original played a
/// video here; this build uses the static fallback, a short fade-in that
/// any key skips.
async fn play_intro(assets: &Assets) {
    log::info!("No video playback in this build, showing static intro");
    let started = get_time();

    loop {
        let elapsed = (get_time() - started) as f32;
        if elapsed > 2.5 {
            return;
        }

        clear_background(BLACK);
        let alpha = (elapsed / 0.8).min(1.0);
        let title = "ASTEROIDS";
        let dims = measure_text(title, assets.font.as_ref(), 76, 1.0);
        draw_text_ex(
            title,
            (FIELD_WIDTH - dims.width) / 2.0,
            FIELD_HEIGHT / 2.0,
            TextParams {
                font: assets.font.as_ref(),
                font_size: 76,
                color: Color::new(1.0, 1.0, 1.0, alpha),
                ..Default::default()
            },
        );
        if elapsed > 1.0 {
            let sub = "A 1979 CLASSIC";
            let sub_dims = measure_text(sub, assets.font.as_ref(), 20, 1.0);
            draw_text_ex(
                sub,
                (FIELD_WIDTH - sub_dims.width) / 2.0,
                FIELD_HEIGHT / 2.0 + 50.0,
                TextParams {
                    font: assets.font.as_ref(),
                    font_size: 20,
                    color: Color::new(0.7, 0.7, 0.7, (elapsed - 1.0).min(1.0)),
                    ..Default::default()
                },
            );
        }

        next_frame().await;

        if get_last_key_pressed().is_some() {
            return;
        }
    }
}
