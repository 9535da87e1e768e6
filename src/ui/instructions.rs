//! Instructions screen: the control reference

use macroquad::prelude::*;

use super::draw_text_centered;
use crate::assets::Assets;

const ROWS: &[(&str, &str)] = &[
    ("up", "MOVE FORWARD"),
    ("left", "ROTATE LEFT"),
    ("right", "ROTATE RIGHT"),
    ("space", "SHOOT"),
    ("shift", "HYPERSPACE / INSTRUCTIONS"),
    ("alt", "PAUSE / RESUME"),
    ("s", "SAVE SCORE"),
    ("esc", "GO BACK / QUIT GAME"),
];

const START_Y: f32 = 150.0;
const ROW_SPACING: f32 = 45.0;
const KEY_X: f32 = 100.0;
const ACTION_X: f32 = 350.0;
const KEY_HEIGHT: f32 = 40.0;

/// Runs until the player presses Escape.
pub async fn run(assets: &Assets) {
    loop {
        clear_background(BLACK);
        draw_text_centered("INSTRUCTIONS", 70.0, 76, assets);

        for (index, (key, action)) in ROWS.iter().enumerate() {
            let y = START_Y + index as f32 * ROW_SPACING;

            if let Some(texture) = assets.key(key) {
                let width = texture.width() / texture.height() * KEY_HEIGHT;
                draw_texture_ex(
                    texture,
                    KEY_X,
                    y - KEY_HEIGHT / 2.0,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(width, KEY_HEIGHT)),
                        ..Default::default()
                    },
                );
            } else {
                draw_text_ex(
                    &format!("[{}]", key.to_uppercase()),
                    KEY_X,
                    y + 8.0,
                    TextParams {
                        font: assets.font.as_ref(),
                        font_size: 26,
                        color: WHITE,
                        ..Default::default()
                    },
                );
            }

            draw_text_ex(
                action,
                ACTION_X,
                y + 8.0,
                TextParams {
                    font: assets.font.as_ref(),
                    font_size: 26,
                    color: WHITE,
                    ..Default::default()
                },
            );
        }

        next_frame().await;

        if is_key_pressed(KeyCode::Escape) {
            return;
        }
    }
}
