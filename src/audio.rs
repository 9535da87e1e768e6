//! Sound effect playback
//!
//! Wraps the platform mixer behind optional handles: a sound file that
//! fails to load simply never plays, and the game runs on in silence.

use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};

use crate::consts::{BEAT1_SOUND_PATH, BEAT2_SOUND_PATH, FIRE_SOUND_PATH};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player bullet leaving the ship
    Fire,
    /// First half of the background heartbeat
    Beat1,
    /// Second half of the background heartbeat
    Beat2,
}

/// Audio manager for the game
pub struct AudioManager {
    fire: Option<Sound>,
    beat1: Option<Sound>,
    beat2: Option<Sound>,
    sfx_volume: f32,
    beat_enabled: bool,
}

impl AudioManager {
    /// Load every effect best-effort and capture the volume preferences.
    pub async fn load(settings: &Settings) -> Self {
        Self {
            fire: load_optional(FIRE_SOUND_PATH).await,
            beat1: load_optional(BEAT1_SOUND_PATH).await,
            beat2: load_optional(BEAT2_SOUND_PATH).await,
            sfx_volume: settings.effective_sfx_volume(),
            beat_enabled: settings.beat_enabled,
        }
    }

    pub fn play(&self, effect: SoundEffect) {
        // Per-effect trim on top of the user volume; the heartbeat sits
        // under the action instead of competing with it
        let (sound, trim) = match effect {
            SoundEffect::Fire => (&self.fire, 0.5),
            SoundEffect::Beat1 => (&self.beat1, 0.3),
            SoundEffect::Beat2 => (&self.beat2, 0.3),
        };
        let volume = self.sfx_volume * trim;
        if volume <= 0.0 {
            return;
        }
        if let Some(sound) = sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume,
                },
            );
        }
    }

    /// Map a simulation event to its sound cue, if it has one.
    pub fn handle_event(&self, event: &GameEvent) {
        match event {
            GameEvent::ShotFired => self.play(SoundEffect::Fire),
            GameEvent::Beat { alternate } if self.beat_enabled => {
                if *alternate {
                    self.play(SoundEffect::Beat1);
                } else {
                    self.play(SoundEffect::Beat2);
                }
            }
            _ => {}
        }
    }
}

async fn load_optional(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            log::warn!("Sound {} unavailable: {:?}", path, err);
            None
        }
    }
}
