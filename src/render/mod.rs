//! Frame rendering
//!
//! Draws the playfield and HUD for one frame. Screens outside the session
//! (menu, end screen, pause overlay) render themselves in `ui`.

pub mod shapes;

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::consts::{FIELD_WIDTH, SHIP_RADIUS};
use crate::settings::Settings;
use crate::sim::GameState;
use shapes::{draw_asteroid, draw_bullet, draw_ship, draw_ship_icon, draw_ufo};

pub fn draw_frame(state: &GameState, assets: &Assets, settings: &Settings) {
    clear_background(BLACK);

    if state.ship.alive {
        draw_ship(&state.ship);
    }
    for rock in &state.asteroids {
        draw_asteroid(rock);
    }
    for bullet in &state.bullets {
        draw_bullet(bullet);
    }
    for bullet in &state.ufo_bullets {
        draw_bullet(bullet);
    }
    if let Some(ufo) = &state.ufo {
        draw_ufo(ufo);
    }

    draw_hud(state, assets, settings);
}

fn draw_hud(state: &GameState, assets: &Assets, settings: &Settings) {
    draw_text_ex(
        &state.score.to_string(),
        10.0,
        36.0,
        TextParams {
            font: assets.font.as_ref(),
            font_size: 30,
            color: WHITE,
            ..Default::default()
        },
    );

    // Remaining lives as little ships in the top-right corner
    for i in 0..state.lives {
        let x = FIELD_WIDTH - 30.0 - i as f32 * 25.0;
        draw_ship_icon(vec2(x, 30.0), -90.0, SHIP_RADIUS * 0.8);
    }

    if settings.show_fps {
        draw_text_ex(
            &format!("{} fps", get_fps()),
            10.0,
            60.0,
            TextParams {
                font: assets.font.as_ref(),
                font_size: 16,
                color: GRAY,
                ..Default::default()
            },
        );
    }
}
