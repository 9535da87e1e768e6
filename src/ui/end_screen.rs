//! Game over screen with score saving

use macroquad::prelude::*;

use super::{draw_prompt_line, draw_text_centered, Prompt};
use crate::assets::Assets;
use crate::consts::{FIELD_HEIGHT, MAX_NAME_LEN, SCORES_PATH};
use crate::highscores::HighScores;

/// Where the player goes after the end screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndAction {
    Restart,
    ToMenu,
}

pub async fn run(score: u32, assets: &Assets, highscores: &mut HighScores) -> EndAction {
    let mut saving = false;
    let mut name = String::new();

    loop {
        clear_background(BLACK);

        draw_text_centered("GAME OVER", FIELD_HEIGHT / 2.0 - 150.0, 76, assets);
        draw_text_centered(&format!("SCORE  {}", score), FIELD_HEIGHT / 2.0 - 80.0, 36, assets);

        if saving {
            draw_text_centered(
                &format!("ENTER YOUR NAME: {}_", name),
                FIELD_HEIGHT / 2.0,
                36,
                assets,
            );
            draw_prompt_line(
                &[
                    Prompt::Text("Press"),
                    Prompt::Key("enter"),
                    Prompt::Text("to Save"),
                ],
                FIELD_HEIGHT - 30.0,
                20,
                assets,
            );
        } else {
            draw_top_scores(highscores, assets);
            draw_prompt_line(
                &[
                    Prompt::Text("Press"),
                    Prompt::Key("s"),
                    Prompt::Text("to Save Your Score"),
                ],
                FIELD_HEIGHT - 70.0,
                26,
                assets,
            );
            draw_prompt_line(
                &[
                    Prompt::Text("Press"),
                    Prompt::Key("enter"),
                    Prompt::Text("to Restart  |  Press"),
                    Prompt::Key("esc"),
                    Prompt::Text("to Menu"),
                ],
                FIELD_HEIGHT - 30.0,
                20,
                assets,
            );
        }

        next_frame().await;

        if saving {
            while let Some(c) = get_char_pressed() {
                if !c.is_control() && name.chars().count() < MAX_NAME_LEN {
                    name.push(c);
                }
            }
            if is_key_pressed(KeyCode::Backspace) {
                name.pop();
            }
            if is_key_pressed(KeyCode::Enter) {
                match highscores.append(SCORES_PATH, &name, score) {
                    Ok(()) => log::info!("Score saved: {} - {}", name.trim(), score),
                    Err(err) => log::error!("Failed to save score: {}", err),
                }
                return EndAction::ToMenu;
            }
            if is_key_pressed(KeyCode::Escape) {
                saving = false;
                name.clear();
            }
        } else {
            if is_key_pressed(KeyCode::Enter) {
                return EndAction::Restart;
            }
            if is_key_pressed(KeyCode::Escape) {
                return EndAction::ToMenu;
            }
            if is_key_pressed(KeyCode::S) {
                // Drop any buffered characters so the triggering key does
                // not end up in the name field
                while get_char_pressed().is_some() {}
                saving = true;
            }
        }
    }
}

fn draw_top_scores(highscores: &HighScores, assets: &Assets) {
    if highscores.is_empty() {
        return;
    }
    for (index, entry) in highscores.top(5).iter().enumerate() {
        draw_text_centered(
            &format!("{}. {}  {}", index + 1, entry.name, entry.score),
            FIELD_HEIGHT / 2.0 - 20.0 + index as f32 * 28.0,
            20,
            assets,
        );
    }
}
