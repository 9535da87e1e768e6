//! Fixed timestep simulation tick
//!
//! Core game logic that advances a session deterministically: physics,
//! timers, spawning, collisions and scoring all happen here.

use rand::Rng;

use super::collision::Collider;
use super::state::{Asteroid, GameEvent, GamePhase, GameState, Ufo};
use crate::consts::*;
use crate::heading;

/// Input commands for a single tick. `fire`, `hyperspace` and `pause` are
/// one-shot and must be cleared by the driver after each step.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub thrust: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub fire: bool,
    pub hyperspace: bool,
    pub pause: bool,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle before anything moves
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    advance_heartbeat(state, dt);
    handle_respawn(state, dt);
    update_ship(state, input, dt);
    spawn_asteroids(state, dt);
    update_ufo(state, dt);

    for rock in &mut state.asteroids {
        rock.update(dt);
    }
    for bullet in &mut state.bullets {
        bullet.update(dt);
    }
    for bullet in &mut state.ufo_bullets {
        bullet.update(dt);
    }

    resolve_collisions(state);
    cleanup(state);
}

/// The iconic alternating heartbeat, tightening as the score climbs.
fn advance_heartbeat(state: &mut GameState, dt: f32) {
    state.beat_in -= dt;
    if state.beat_in <= 0.0 {
        state.events.push(GameEvent::Beat {
            alternate: state.beat_alternate,
        });
        state.beat_alternate = !state.beat_alternate;
        state.beat_in = state.beat_interval();
    }
}

fn handle_respawn(state: &mut GameState, dt: f32) {
    if !state.ship.alive && state.lives > 0 {
        state.respawn_in -= dt;
        if state.respawn_in <= 0.0 {
            state.ship.respawn();
        }
    }
}

fn update_ship(state: &mut GameState, input: &TickInput, dt: f32) {
    state.ship.invulnerable_for = (state.ship.invulnerable_for - dt).max(0.0);
    state.ship.hyperspace_cooldown = (state.ship.hyperspace_cooldown - dt).max(0.0);

    if !state.ship.alive {
        return;
    }

    if input.turn_left {
        state.ship.angle_deg -= SHIP_ROTATION_SPEED * dt;
    }
    if input.turn_right {
        state.ship.angle_deg += SHIP_ROTATION_SPEED * dt;
    }
    if input.thrust {
        let thrust = heading(state.ship.angle_deg) * state.ship.acceleration * dt;
        state.ship.vel += thrust;
    }
    state.ship.integrate(dt);

    if input.fire {
        let bullet = state.ship.shoot();
        state.bullets.push(bullet);
        state.events.push(GameEvent::ShotFired);
    }
    if input.hyperspace && state.ship.hyperspace(&mut state.rng) {
        state.events.push(GameEvent::Hyperspace);
    }
}

/// Fresh rocks drift in from a random edge on a fixed cadence.
fn spawn_asteroids(state: &mut GameState, dt: f32) {
    state.asteroid_spawn_in -= dt;
    if state.asteroid_spawn_in <= 0.0 {
        let rock = Asteroid::spawn_edge(&mut state.rng);
        state.asteroids.push(rock);
        state.asteroid_spawn_in = ASTEROID_SPAWN_INTERVAL;
    }
}

fn update_ufo(state: &mut GameState, dt: f32) {
    match &mut state.ufo {
        None => {
            state.ufo_spawn_in -= dt;
            if state.ufo_spawn_in <= 0.0 {
                if state.score >= UFO_SCORE_THRESHOLD
                    && state.rng.random_bool(UFO_SPAWN_CHANCE)
                {
                    state.ufo = Some(Ufo::spawn(state.score, &mut state.rng));
                }
                state.ufo_spawn_in = UFO_SPAWN_INTERVAL;
            }
        }
        Some(ufo) => {
            ufo.update(dt, &mut state.rng);
            if !ufo.is_on_field() {
                ufo.alive = false;
                return;
            }

            ufo.fire_in -= dt;
            if ufo.fire_in <= 0.0 {
                if state.ship.alive {
                    let bullet =
                        ufo.fire(Some((state.ship.pos, state.ship.vel)), &mut state.rng);
                    state.ufo_bullets.push(bullet);
                    state.events.push(GameEvent::UfoShotFired);
                }
                ufo.fire_in = UFO_FIRE_INTERVAL;
            }
        }
    }
}

/// Run every collision pair in insertion order. Dead flags make the
/// tie-break explicit: the first bullet to reach a rock wins and later
/// checks against that rock are skipped.
fn resolve_collisions(state: &mut GameState) {
    // Player bullets vs asteroids, then the ship against each rock
    let mut fragments: Vec<Asteroid> = Vec::new();
    for i in 0..state.asteroids.len() {
        if state.asteroids[i].alive {
            for j in 0..state.bullets.len() {
                if !state.bullets[j].alive {
                    continue;
                }
                if state.asteroids[i].overlaps(&state.bullets[j]) {
                    state.bullets[j].alive = false;
                    state.asteroids[i].alive = false;
                    let size = state.asteroids[i].size;
                    state.score += size.points();
                    state.events.push(GameEvent::AsteroidDestroyed { size });
                    split_asteroid(state, i, &mut fragments);
                    break;
                }
            }
        }

        if state.asteroids[i].alive
            && state.ship.alive
            && !state.ship.is_invulnerable()
            && state.ship.overlaps(&state.asteroids[i])
        {
            lose_life(state);
        }
    }
    state.asteroids.append(&mut fragments);

    // Player bullets vs UFO
    if let Some(ufo) = &mut state.ufo {
        if ufo.alive {
            for bullet in &mut state.bullets {
                if bullet.alive && ufo.overlaps(bullet) {
                    bullet.alive = false;
                    ufo.alive = false;
                    state.score += ufo.kind.points();
                    state.events.push(GameEvent::UfoDestroyed { kind: ufo.kind });
                    break;
                }
            }
        }
    }

    // Ship vs UFO: both are lost
    let rammed_ufo = state.ufo.as_ref().is_some_and(|ufo| {
        ufo.alive
            && state.ship.alive
            && !state.ship.is_invulnerable()
            && state.ship.overlaps(ufo)
    });
    if rammed_ufo {
        if let Some(ufo) = &mut state.ufo {
            ufo.alive = false;
        }
        lose_life(state);
    }

    // UFO bullets vs ship, then vs asteroids (no points for those)
    let mut fragments: Vec<Asteroid> = Vec::new();
    for j in 0..state.ufo_bullets.len() {
        if !state.ufo_bullets[j].alive {
            continue;
        }
        if state.ship.alive
            && !state.ship.is_invulnerable()
            && state.ship.overlaps(&state.ufo_bullets[j])
        {
            state.ufo_bullets[j].alive = false;
            lose_life(state);
            continue;
        }
        for i in 0..state.asteroids.len() {
            if state.asteroids[i].alive && state.asteroids[i].overlaps(&state.ufo_bullets[j]) {
                state.ufo_bullets[j].alive = false;
                state.asteroids[i].alive = false;
                split_asteroid(state, i, &mut fragments);
                break;
            }
        }
    }
    state.asteroids.append(&mut fragments);
}

/// Queue the two next-tier fragments for a destroyed rock, if any.
fn split_asteroid(state: &mut GameState, index: usize, fragments: &mut Vec<Asteroid>) {
    let size = state.asteroids[index].size;
    let pos = state.asteroids[index].pos;
    if let Some(next) = size.split() {
        fragments.push(Asteroid::new(pos, next, &mut state.rng));
        fragments.push(Asteroid::new(pos, next, &mut state.rng));
    }
}

fn lose_life(state: &mut GameState) {
    state.ship.alive = false;
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::ShipHit);
    if state.lives > 0 {
        state.respawn_in = RESPAWN_DELAY;
    } else {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
    }
}

fn cleanup(state: &mut GameState) {
    state.asteroids.retain(|a| a.alive);
    state.bullets.retain(|b| b.alive);
    state.ufo_bullets.retain(|b| b.alive);
    if state.ufo.as_ref().is_some_and(|u| !u.alive) {
        state.ufo = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::AsteroidSize;
    use macroquad::math::Vec2;

    fn quiet_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.asteroids.clear();
        state
    }

    #[test]
    fn test_pause_toggle() {
        let mut state = quiet_state(1);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_large_asteroid_scores_twenty_and_splits() {
        let mut state = quiet_state(2);
        let pos = Vec2::new(400.0, 300.0);
        state.ship.pos = Vec2::new(100.0, 100.0);
        state
            .asteroids
            .push(Asteroid::new(pos, AsteroidSize::Large, &mut state.rng));
        // Stationary rock so one step cannot carry it away from the bullet
        state.asteroids[0].vel = Vec2::ZERO;
        state.bullets.push(crate::sim::Bullet::new(pos, Vec2::X));

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.score, 20);
        assert_eq!(state.asteroids.len(), 2);
        assert!(state
            .asteroids
            .iter()
            .all(|a| a.size == AsteroidSize::Medium));
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_smallest_asteroid_leaves_no_fragments() {
        let mut state = quiet_state(3);
        let pos = Vec2::new(400.0, 300.0);
        state.ship.pos = Vec2::new(100.0, 100.0);
        state
            .asteroids
            .push(Asteroid::new(pos, AsteroidSize::Small, &mut state.rng));
        state.asteroids[0].vel = Vec2::ZERO;
        state.bullets.push(crate::sim::Bullet::new(pos, Vec2::X));

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.score, 100);
        assert!(state.asteroids.is_empty());
    }

    #[test]
    fn test_ship_hit_costs_a_life_and_respawns_invulnerable() {
        let mut state = quiet_state(4);
        let mut rock = Asteroid::new(state.ship.pos, AsteroidSize::Large, &mut state.rng);
        rock.vel = Vec2::ZERO;
        state.asteroids.push(rock);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.lives, INITIAL_LIVES - 1);
        assert!(!state.ship.alive);
        assert_eq!(state.phase, GamePhase::Playing);

        // Let the respawn timer run out
        let steps = (RESPAWN_DELAY / SIM_DT) as u32 + 2;
        for _ in 0..steps {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.ship.alive);
        assert!(state.ship.is_invulnerable());
    }

    #[test]
    fn test_last_life_ends_the_game() {
        let mut state = quiet_state(5);
        state.lives = 1;
        let mut rock = Asteroid::new(state.ship.pos, AsteroidSize::Medium, &mut state.rng);
        rock.vel = Vec2::ZERO;
        state.asteroids.push(rock);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_invulnerable_ship_ignores_rocks() {
        let mut state = quiet_state(6);
        state.ship.invulnerable_for = 5.0;
        let mut rock = Asteroid::new(state.ship.pos, AsteroidSize::Large, &mut state.rng);
        rock.vel = Vec2::ZERO;
        state.asteroids.push(rock);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.ship.alive);
        assert_eq!(state.lives, INITIAL_LIVES);
    }

    #[test]
    fn test_bullets_expire_after_ttl() {
        let mut state = quiet_state(7);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.bullets.len(), 1);

        let steps = (BULLET_TTL / SIM_DT) as u32 + 2;
        for _ in 0..steps {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_no_ufo_below_score_threshold() {
        let mut state = quiet_state(8);
        let steps = (UFO_SPAWN_INTERVAL * 4.0 / SIM_DT) as u32;
        for _ in 0..steps {
            tick(&mut state, &TickInput::default(), SIM_DT);
            state.events.clear();
        }
        assert!(state.ufo.is_none());
    }

    #[test]
    fn test_ufo_arrives_once_threshold_is_crossed() {
        let mut state = quiet_state(9);
        state.score = UFO_SCORE_THRESHOLD;
        // Keep the ship out of the running so stray rocks cannot end the
        // session before a saucer shows up
        state.ship.invulnerable_for = f32::INFINITY;
        // Each interval is a coin flip; forty tries settle it for any seed
        let steps = (UFO_SPAWN_INTERVAL * 40.0 / SIM_DT) as u32;
        for _ in 0..steps {
            tick(&mut state, &TickInput::default(), SIM_DT);
            state.events.clear();
            if state.ufo.is_some() {
                return;
            }
        }
        panic!("no UFO spawned after 40 spawn windows");
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut state = GameState::new(10);
        let mut previous = 0;
        for step in 0..1200u32 {
            let input = TickInput {
                thrust: step % 7 == 0,
                turn_left: step % 3 == 0,
                fire: step % 11 == 0,
                ..Default::default()
            };
            tick(&mut state, &input, SIM_DT);
            state.events.clear();
            assert!(state.score >= previous);
            previous = state.score;
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99_999);
        let mut b = GameState::new(99_999);

        for step in 0..600u32 {
            let input = TickInput {
                thrust: step % 5 == 0,
                turn_right: step % 4 == 0,
                fire: step % 9 == 0,
                ..Default::default()
            };
            tick(&mut a, &input, SIM_DT);
            tick(&mut b, &input, SIM_DT);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.asteroids.len(), b.asteroids.len());
        assert_eq!(a.bullets.len(), b.bullets.len());
        assert!((a.ship.pos - b.ship.pos).length() < 1e-6);
    }

    #[test]
    fn test_paused_state_is_frozen() {
        let mut state = GameState::new(11);
        let before = state.ship.pos;
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
            SIM_DT,
        );
        for _ in 0..60 {
            tick(
                &mut state,
                &TickInput {
                    thrust: true,
                    ..Default::default()
                },
                SIM_DT,
            );
        }
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.ship.pos, before);
    }
}
