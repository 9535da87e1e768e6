//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{circles_collide, Collider};
pub use state::{
    Asteroid, AsteroidSize, Bullet, GameEvent, GamePhase, GameState, Ship, Ufo, UfoKind,
};
pub use tick::{tick, TickInput};
