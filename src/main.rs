//! Astro Blast entry point
//!
//! Initializes logging and resources, then runs the screen state machine:
//! menu -> playing -> end screen, with instructions reachable from the
//! menu. Quitting from the menu (or closing the window) exits.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use astro_blast::assets::Assets;
use astro_blast::audio::AudioManager;
use astro_blast::consts::{FIELD_HEIGHT, FIELD_WIDTH, SCORES_PATH};
use astro_blast::ui::{self, EndAction, MenuAction};
use astro_blast::{game, HighScores, Settings};

fn window_conf() -> Conf {
    Conf {
        window_title: "Astro Blast".to_owned(),
        window_width: FIELD_WIDTH as i32,
        window_height: FIELD_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Wall-clock seed so every session plays out differently.
fn session_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Astro Blast starting...");

    let settings = Settings::load();
    let assets = Assets::load().await;
    let audio = AudioManager::load(&settings).await;
    let mut highscores = HighScores::load(SCORES_PATH);
    let mut show_intro = true;

    loop {
        match ui::menu::run(&assets, show_intro).await {
            MenuAction::Start => loop {
                let score = game::run_session(&assets, &audio, &settings, session_seed()).await;
                match ui::end_screen::run(score, &assets, &mut highscores).await {
                    EndAction::Restart => continue,
                    EndAction::ToMenu => break,
                }
            },
            MenuAction::Instructions => ui::instructions::run(&assets).await,
            MenuAction::Quit => break,
        }
        show_intro = false;
    }

    settings.save();
    log::info!("Astro Blast exiting");
}
