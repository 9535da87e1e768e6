//! Astro Blast - a wrapping-field Asteroids arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Immediate-mode drawing of entities and HUD
//! - `ui`: Full-screen views (menu, instructions, end screen)
//! - `assets`: Best-effort resource loading
//! - `highscores`: Flat-file score persistence

pub mod assets;
pub mod audio;
pub mod game;
pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;
pub mod ui;

pub use highscores::HighScores;
pub use settings::Settings;

use macroquad::math::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (window is created at the same size)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ship handling. Values are per-second equivalents of the classic
    /// per-frame tuning (friction 0.99/frame at 60 Hz ~= 0.55/s).
    pub const SHIP_ACCELERATION: f32 = 720.0;
    pub const SHIP_FRICTION: f32 = 0.55;
    pub const SHIP_ROTATION_SPEED: f32 = 300.0;
    pub const SHIP_RADIUS: f32 = 15.0;

    pub const INITIAL_LIVES: u32 = 3;
    /// Seconds between losing the ship and it reappearing
    pub const RESPAWN_DELAY: f32 = 2.0;
    /// Post-respawn invulnerability window in seconds
    pub const INVULNERABLE_TIME: f32 = 2.0;
    pub const HYPERSPACE_COOLDOWN: f32 = 3.0;
    /// Hyperspace never drops the ship closer than this to a field edge
    pub const HYPERSPACE_MARGIN: f32 = 50.0;

    pub const BULLET_SPEED: f32 = 600.0;
    pub const BULLET_RADIUS: f32 = 3.0;
    /// Bullets expire after this long regardless of position
    pub const BULLET_TTL: f32 = 1.2;

    pub const INITIAL_ASTEROID_COUNT: usize = 5;
    /// Seconds between new edge spawns while a session runs
    pub const ASTEROID_SPAWN_INTERVAL: f32 = 3.0;
    /// Velocity components are drawn from +-this range
    pub const ASTEROID_MAX_SPEED: f32 = 120.0;
    pub const ASTEROID_MIN_VERTICES: usize = 6;
    pub const ASTEROID_MAX_VERTICES: usize = 10;

    pub const UFO_SCORE_THRESHOLD: u32 = 1000;
    pub const UFO_SPAWN_INTERVAL: f32 = 15.0;
    pub const UFO_SPAWN_CHANCE: f64 = 0.5;
    pub const UFO_SPEED: f32 = 120.0;
    pub const UFO_FIRE_INTERVAL: f32 = 2.0;
    /// UFOs bounce off a band this far from the top/bottom edges
    pub const UFO_VERTICAL_MARGIN: f32 = 30.0;
    pub const UFO_SMALL_RADIUS: f32 = 15.0;
    pub const UFO_LARGE_RADIUS: f32 = 25.0;

    /// Heartbeat pacing: interval decays from start toward min as the
    /// score climbs
    pub const BEAT_INTERVAL_START: f32 = 1.0;
    pub const BEAT_INTERVAL_MIN: f32 = 0.2;
    pub const BEAT_SPEEDUP_RATE: f32 = 0.95;

    pub const MAX_NAME_LEN: usize = 12;

    /// File and asset paths, all relative to the working directory
    pub const SCORES_PATH: &str = "scores.txt";
    pub const SETTINGS_PATH: &str = "settings.json";
    pub const FONT_PATH: &str = "assets/fonts/hyperspace.ttf";
    pub const FIRE_SOUND_PATH: &str = "assets/sounds/fire.wav";
    pub const BEAT1_SOUND_PATH: &str = "assets/sounds/beat1.wav";
    pub const BEAT2_SOUND_PATH: &str = "assets/sounds/beat2.wav";
    pub const KEYS_DIR: &str = "assets/keys";
}

/// Wrap a single coordinate into `[0, extent)`.
///
/// `rem_euclid` can round up to `extent` itself for tiny negative inputs,
/// so the result is clamped back to zero in that case.
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Wrap a position onto the toroidal playfield.
#[inline]
pub fn wrap_position(pos: Vec2) -> Vec2 {
    Vec2::new(
        wrap_coord(pos.x, consts::FIELD_WIDTH),
        wrap_coord(pos.y, consts::FIELD_HEIGHT),
    )
}

/// Unit vector for a heading given in degrees.
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wrap_keeps_in_range() {
        assert_eq!(wrap_coord(0.0, 800.0), 0.0);
        assert_eq!(wrap_coord(800.0, 800.0), 0.0);
        assert_eq!(wrap_coord(-10.0, 800.0), 790.0);
        assert_eq!(wrap_coord(810.0, 800.0), 10.0);
    }

    #[test]
    fn wrap_position_handles_both_axes() {
        let p = wrap_position(Vec2::new(-5.0, 605.0));
        assert!((p.x - 795.0).abs() < 1e-3);
        assert!((p.y - 5.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn wrap_coord_always_in_half_open_range(value in -1.0e6f32..1.0e6f32) {
            let w = wrap_coord(value, consts::FIELD_WIDTH);
            prop_assert!((0.0..consts::FIELD_WIDTH).contains(&w));
        }

        #[test]
        fn heading_is_unit_length(angle in -720.0f32..720.0f32) {
            prop_assert!((heading(angle).length() - 1.0).abs() < 1e-4);
        }
    }
}
