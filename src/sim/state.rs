//! Game state and core simulation types
//!
//! Everything that affects gameplay lives here and is advanced only by
//! [`tick`](super::tick::tick), so two sessions with the same seed and the
//! same inputs stay identical.

use macroquad::math::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::{heading, wrap_position};

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay (including the dead-ship respawn countdown)
    Playing,
    /// Simulation frozen
    Paused,
    /// All lives spent
    GameOver,
}

/// Asteroid size tier. Smaller rocks are harder to hit and worth more,
/// matching the 1979 scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    pub fn radius(self) -> f32 {
        match self {
            AsteroidSize::Small => 10.0,
            AsteroidSize::Medium => 20.0,
            AsteroidSize::Large => 30.0,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            AsteroidSize::Small => 100,
            AsteroidSize::Medium => 50,
            AsteroidSize::Large => 20,
        }
    }

    /// Tier the two fragments take when a rock of this size is destroyed,
    /// or `None` for the smallest tier.
    pub fn split(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing in degrees; -90 points up the screen
    pub angle_deg: f32,
    pub radius: f32,
    pub alive: bool,
    pub acceleration: f32,
    /// Fraction of velocity retained per second of drift
    pub friction: f32,
    /// Remaining invulnerability window, seconds
    pub invulnerable_for: f32,
    /// Seconds until hyperspace may be used again
    pub hyperspace_cooldown: f32,
}

impl Ship {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            angle_deg: -90.0,
            radius: SHIP_RADIUS,
            alive: true,
            acceleration: SHIP_ACCELERATION,
            friction: SHIP_FRICTION,
            invulnerable_for: 0.0,
            hyperspace_cooldown: 0.0,
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_for > 0.0
    }

    /// Advance position by the current velocity, wrap, then apply drag.
    pub fn integrate(&mut self, dt: f32) {
        self.pos = wrap_position(self.pos + self.vel * dt);
        self.vel *= self.friction.powf(dt);
    }

    /// Put the ship back at the field center with a fresh
    /// invulnerability window.
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        self.vel = Vec2::ZERO;
        self.angle_deg = -90.0;
        self.alive = true;
        self.invulnerable_for = INVULNERABLE_TIME;
    }

    /// A bullet leaving the nose of the ship.
    pub fn shoot(&self) -> Bullet {
        Bullet::new(self.pos, heading(self.angle_deg))
    }

    /// Teleport to a random spot and kill all momentum. The destination is
    /// not checked for safety; relocating into a rock is the classic risk.
    pub fn hyperspace(&mut self, rng: &mut Pcg32) -> bool {
        if self.hyperspace_cooldown > 0.0 {
            return false;
        }
        self.pos = Vec2::new(
            rng.random_range(HYPERSPACE_MARGIN..FIELD_WIDTH - HYPERSPACE_MARGIN),
            rng.random_range(HYPERSPACE_MARGIN..FIELD_HEIGHT - HYPERSPACE_MARGIN),
        );
        self.vel = Vec2::ZERO;
        self.hyperspace_cooldown = HYPERSPACE_COOLDOWN;
        true
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

/// A destructible rock
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: AsteroidSize,
    /// Irregular outline as offsets from the center, fixed at spawn
    pub shape: Vec<Vec2>,
    /// Index into the render palette
    pub color_index: usize,
    pub alive: bool,
}

impl Asteroid {
    pub fn new(pos: Vec2, size: AsteroidSize, rng: &mut Pcg32) -> Self {
        let vel = Vec2::new(
            rng.random_range(-ASTEROID_MAX_SPEED..ASTEROID_MAX_SPEED),
            rng.random_range(-ASTEROID_MAX_SPEED..ASTEROID_MAX_SPEED),
        );
        let shape = Self::generate_shape(size, rng);
        let color_index = rng.random_range(0..4);
        Self {
            pos,
            vel,
            size,
            shape,
            color_index,
            alive: true,
        }
    }

    /// Spawn just outside a random field edge so rocks drift in naturally.
    pub fn spawn_edge(rng: &mut Pcg32) -> Self {
        let pos = match rng.random_range(0..4u8) {
            0 => Vec2::new(rng.random_range(0.0..FIELD_WIDTH), -10.0),
            1 => Vec2::new(rng.random_range(0.0..FIELD_WIDTH), FIELD_HEIGHT + 10.0),
            2 => Vec2::new(-10.0, rng.random_range(0.0..FIELD_HEIGHT)),
            _ => Vec2::new(FIELD_WIDTH + 10.0, rng.random_range(0.0..FIELD_HEIGHT)),
        };
        let size = match rng.random_range(0..3u8) {
            0 => AsteroidSize::Small,
            1 => AsteroidSize::Medium,
            _ => AsteroidSize::Large,
        };
        Self::new(pos, size, rng)
    }

    fn generate_shape(size: AsteroidSize, rng: &mut Pcg32) -> Vec<Vec2> {
        let vertices = rng.random_range(ASTEROID_MIN_VERTICES..=ASTEROID_MAX_VERTICES);
        let step = std::f32::consts::TAU / vertices as f32;
        (0..vertices)
            .map(|i| {
                let angle = i as f32 * step;
                let r = size.radius() * rng.random_range(0.8..1.2);
                Vec2::new(angle.cos() * r, angle.sin() * r)
            })
            .collect()
    }

    pub fn radius(&self) -> f32 {
        self.size.radius()
    }

    pub fn update(&mut self, dt: f32) {
        self.pos = wrap_position(self.pos + self.vel * dt);
    }
}

/// A projectile, fired by the ship or a UFO
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Remaining lifetime, seconds
    pub ttl: f32,
    pub alive: bool,
}

impl Bullet {
    /// `direction` must be a unit vector.
    pub fn new(pos: Vec2, direction: Vec2) -> Self {
        Self {
            pos,
            vel: direction * BULLET_SPEED,
            radius: BULLET_RADIUS,
            ttl: BULLET_TTL,
            alive: true,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos = wrap_position(self.pos + self.vel * dt);
        self.ttl -= dt;
        if self.ttl <= 0.0 {
            self.alive = false;
        }
    }
}

/// Flying saucer variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UfoKind {
    /// Fires at random headings, easy target
    Large,
    /// Aims at the ship, small target, big bonus
    Small,
}

impl UfoKind {
    pub fn radius(self) -> f32 {
        match self {
            UfoKind::Large => UFO_LARGE_RADIUS,
            UfoKind::Small => UFO_SMALL_RADIUS,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            UfoKind::Large => 200,
            UfoKind::Small => 1000,
        }
    }
}

/// Enemy saucer. Crosses the field horizontally with occasional vertical
/// wander, firing on a fixed cadence, and despawns once it has left.
#[derive(Debug, Clone)]
pub struct Ufo {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: UfoKind,
    pub alive: bool,
    /// Seconds until the next shot
    pub fire_in: f32,
    /// Seconds until the next vertical wander roll
    drift_in: f32,
}

impl Ufo {
    /// The odds of the small saucer grow with the player's score.
    pub fn spawn(score: u32, rng: &mut Pcg32) -> Self {
        let small_chance = (f64::from(score) / 40_000.0).min(0.7);
        let kind = if rng.random_bool(small_chance) {
            UfoKind::Small
        } else {
            UfoKind::Large
        };
        let direction: f32 = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let x = if direction > 0.0 {
            -kind.radius()
        } else {
            FIELD_WIDTH + kind.radius()
        };
        let y = rng.random_range(50.0..FIELD_HEIGHT - 50.0);
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(UFO_SPEED * direction, 0.0),
            kind,
            alive: true,
            fire_in: UFO_FIRE_INTERVAL,
            drift_in: 1.0,
        }
    }

    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }

    pub fn update(&mut self, dt: f32, rng: &mut Pcg32) {
        self.pos += self.vel * dt;

        // Occasionally pick a new vertical drift
        self.drift_in -= dt;
        if self.drift_in <= 0.0 {
            if rng.random_bool(0.3) {
                self.vel.y = rng.random_range(-90.0..90.0);
            }
            self.drift_in = 1.0;
        }

        // Bounce off the horizontal bands near the field edges
        if self.pos.y < UFO_VERTICAL_MARGIN {
            self.pos.y = UFO_VERTICAL_MARGIN;
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y > FIELD_HEIGHT - UFO_VERTICAL_MARGIN {
            self.pos.y = FIELD_HEIGHT - UFO_VERTICAL_MARGIN;
            self.vel.y = -self.vel.y.abs();
        }
    }

    /// Saucers do not wrap; once fully past the far edge they are gone.
    pub fn is_on_field(&self) -> bool {
        let margin = self.radius() * 2.0;
        self.pos.x >= -margin && self.pos.x <= FIELD_WIDTH + margin
    }

    /// Fire a bullet. The small saucer leads the target: it aims where the
    /// ship will be by the time the bullet covers the current distance,
    /// with a touch of jitter. The large one fires at a random heading.
    pub fn fire(&self, target: Option<(Vec2, Vec2)>, rng: &mut Pcg32) -> Bullet {
        let direction = match (self.kind, target) {
            (UfoKind::Small, Some((target_pos, target_vel))) => {
                let flight_time = self.pos.distance(target_pos) / BULLET_SPEED;
                let predicted = target_pos + target_vel * flight_time;
                let base = (predicted - self.pos).normalize_or_zero();
                let base = if base == Vec2::ZERO { Vec2::X } else { base };
                let jitter = rng.random_range(-0.1f32..0.1);
                let (s, c) = jitter.sin_cos();
                Vec2::new(base.x * c - base.y * s, base.x * s + base.y * c)
            }
            _ => {
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                Vec2::new(angle.cos(), angle.sin())
            }
        };
        Bullet::new(self.pos, direction)
    }
}

/// Discrete things that happened during a tick. Drained by the session
/// driver for sound cues; the simulation itself never touches audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    UfoShotFired,
    AsteroidDestroyed { size: AsteroidSize },
    UfoDestroyed { kind: UfoKind },
    ShipHit,
    Hyperspace,
    Beat { alternate: bool },
    GameOver,
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed, kept for diagnostics
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub ufo: Option<Ufo>,
    pub ufo_bullets: Vec<Bullet>,
    /// Seconds until the ship respawns while dead
    pub respawn_in: f32,
    /// Seconds until the next edge asteroid appears
    pub asteroid_spawn_in: f32,
    /// Seconds until the next UFO spawn roll
    pub ufo_spawn_in: f32,
    /// Seconds until the next heartbeat
    pub beat_in: f32,
    pub beat_alternate: bool,
    /// Events raised this tick, drained by the driver
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let asteroids = (0..INITIAL_ASTEROID_COUNT)
            .map(|_| Asteroid::spawn_edge(&mut rng))
            .collect();
        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            score: 0,
            lives: INITIAL_LIVES,
            ship: Ship::new(),
            asteroids,
            bullets: Vec::new(),
            ufo: None,
            ufo_bullets: Vec::new(),
            respawn_in: 0.0,
            asteroid_spawn_in: ASTEROID_SPAWN_INTERVAL,
            ufo_spawn_in: UFO_SPAWN_INTERVAL,
            beat_in: BEAT_INTERVAL_START,
            beat_alternate: true,
            events: Vec::new(),
        }
    }

    /// Heartbeat interval for the current score: starts slow and tightens
    /// every thousand points, floored at the minimum.
    pub fn beat_interval(&self) -> f32 {
        let steps = (self.score / 1000) as i32;
        (BEAT_INTERVAL_START * BEAT_SPEEDUP_RATE.powi(steps)).max(BEAT_INTERVAL_MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_split_downward() {
        assert_eq!(AsteroidSize::Large.split(), Some(AsteroidSize::Medium));
        assert_eq!(AsteroidSize::Medium.split(), Some(AsteroidSize::Small));
        assert_eq!(AsteroidSize::Small.split(), None);
    }

    #[test]
    fn score_table_matches_documentation() {
        assert_eq!(AsteroidSize::Large.points(), 20);
        assert_eq!(AsteroidSize::Medium.points(), 50);
        assert_eq!(AsteroidSize::Small.points(), 100);
        assert_eq!(UfoKind::Large.points(), 200);
        assert_eq!(UfoKind::Small.points(), 1000);
    }

    #[test]
    fn ship_respawn_grants_invulnerability() {
        let mut ship = Ship::new();
        ship.alive = false;
        ship.vel = Vec2::new(40.0, -20.0);
        ship.respawn();
        assert!(ship.alive);
        assert!(ship.is_invulnerable());
        assert_eq!(ship.vel, Vec2::ZERO);
        assert_eq!(ship.pos, Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0));
    }

    #[test]
    fn integrate_applies_motion_then_drag() {
        let mut ship = Ship::new();
        ship.pos = Vec2::ZERO;
        ship.vel = Vec2::new(5.0, 0.0);
        ship.friction = 0.99;
        ship.integrate(1.0);
        assert!((ship.pos.x - 5.0).abs() < 1e-4);
        assert!(ship.pos.y.abs() < 1e-4);
        assert!((ship.vel.x - 4.95).abs() < 1e-4);
    }

    #[test]
    fn asteroid_shape_stays_near_radius() {
        let mut rng = Pcg32::seed_from_u64(7);
        let rock = Asteroid::new(Vec2::ZERO, AsteroidSize::Large, &mut rng);
        assert!(rock.shape.len() >= ASTEROID_MIN_VERTICES);
        assert!(rock.shape.len() <= ASTEROID_MAX_VERTICES);
        for p in &rock.shape {
            let r = p.length();
            assert!(r >= 30.0 * 0.8 - 1e-3 && r <= 30.0 * 1.2 + 1e-3);
        }
    }

    #[test]
    fn hyperspace_respects_cooldown() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ship = Ship::new();
        assert!(ship.hyperspace(&mut rng));
        assert!(!ship.hyperspace(&mut rng));
        ship.hyperspace_cooldown = 0.0;
        assert!(ship.hyperspace(&mut rng));
    }

    #[test]
    fn small_ufo_leads_its_shots() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut ufo = Ufo::spawn(0, &mut rng);
        ufo.kind = UfoKind::Small;
        ufo.pos = Vec2::new(100.0, 300.0);

        // Stationary target straight to the right; jitter is under 0.1 rad
        let bullet = ufo.fire(Some((Vec2::new(500.0, 300.0), Vec2::ZERO)), &mut rng);
        let direction = bullet.vel.normalize_or_zero();
        assert!(direction.dot(Vec2::X) > 0.99);
    }

    #[test]
    fn ufo_leaves_the_field() {
        let mut ufo = Ufo::spawn(0, &mut Pcg32::seed_from_u64(3));
        assert!(ufo.is_on_field());
        ufo.pos.x = FIELD_WIDTH + ufo.radius() * 2.0 + 1.0;
        assert!(!ufo.is_on_field());
    }
}
