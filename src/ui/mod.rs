//! Full-screen views
//!
//! Each screen owns its own input polling and render pass and returns a
//! transition for the state machine in `main`. Shared text/key-image
//! layout helpers live here.

pub mod end_screen;
pub mod instructions;
pub mod menu;

pub use end_screen::EndAction;
pub use menu::MenuAction;

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// A piece of an instruction line: literal text or a keyboard key that is
/// drawn as an image when its texture loaded and as `[NAME]` otherwise.
pub enum Prompt<'a> {
    Text(&'a str),
    Key(&'a str),
}

/// Resolved line pieces with their widths, ready to lay out.
enum Piece<'a> {
    Text(String, f32),
    Image(&'a Texture2D, f32),
}

/// Draw text horizontally centered at baseline `y`.
pub fn draw_text_centered(text: &str, y: f32, font_size: u16, assets: &Assets) {
    let dims = measure_text(text, assets.font.as_ref(), font_size, 1.0);
    draw_text_ex(
        text,
        (FIELD_WIDTH - dims.width) / 2.0,
        y,
        TextParams {
            font: assets.font.as_ref(),
            font_size,
            color: WHITE,
            ..Default::default()
        },
    );
}

/// Draw a centered line mixing text and key images, vertically aligned on
/// baseline `y`. Key images are scaled to a height matched to the font.
pub fn draw_prompt_line(parts: &[Prompt<'_>], y: f32, font_size: u16, assets: &Assets) {
    let key_height = f32::from(font_size) * 1.6;
    let gap = 6.0;

    let pieces: Vec<Piece<'_>> = parts
        .iter()
        .map(|part| match part {
            Prompt::Text(text) => {
                let width = measure_text(text, assets.font.as_ref(), font_size, 1.0).width;
                Piece::Text((*text).to_owned(), width)
            }
            Prompt::Key(name) => match assets.key(name) {
                Some(texture) => {
                    let width = texture.width() / texture.height() * key_height;
                    Piece::Image(texture, width)
                }
                None => {
                    let label = format!("[{}]", name.to_uppercase());
                    let width = measure_text(&label, assets.font.as_ref(), font_size, 1.0).width;
                    Piece::Text(label, width)
                }
            },
        })
        .collect();

    let total: f32 = pieces.iter().map(piece_width).sum::<f32>()
        + gap * pieces.len().saturating_sub(1) as f32;

    let mut x = (FIELD_WIDTH - total) / 2.0;
    for piece in &pieces {
        match piece {
            Piece::Text(text, width) => {
                draw_text_ex(
                    text,
                    x,
                    y,
                    TextParams {
                        font: assets.font.as_ref(),
                        font_size,
                        color: WHITE,
                        ..Default::default()
                    },
                );
                x += width + gap;
            }
            Piece::Image(texture, width) => {
                draw_texture_ex(
                    texture,
                    x,
                    y - key_height * 0.75,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(*width, key_height)),
                        ..Default::default()
                    },
                );
                x += width + gap;
            }
        }
    }
}

fn piece_width(piece: &Piece<'_>) -> f32 {
    match piece {
        Piece::Text(_, width) | Piece::Image(_, width) => *width,
    }
}

/// Full-screen pause view drawn over a cleared field.
pub fn draw_pause_overlay(assets: &Assets) {
    clear_background(BLACK);
    draw_text_centered("PAUSED", FIELD_HEIGHT / 2.0, 48, assets);
    draw_prompt_line(
        &[
            Prompt::Text("Press"),
            Prompt::Key("alt"),
            Prompt::Text("to Resume"),
        ],
        FIELD_HEIGHT - 40.0,
        20,
        assets,
    );
}
