//! Entity geometry
//!
//! All drawing is wireframe-era vector style: the ship is an outlined
//! triangle, rocks are filled irregular polygons, the saucer is the
//! classic hull-and-dome silhouette.

use macroquad::prelude::*;

use crate::heading;
use crate::sim::{Asteroid, Bullet, Ship, Ufo};

/// Rock palette, indexed by `Asteroid::color_index`
pub const ASTEROID_PALETTE: [Color; 4] = [YELLOW, PINK, ORANGE, PURPLE];

pub fn draw_ship(ship: &Ship) {
    // Blink while invulnerable
    if ship.is_invulnerable() && (ship.invulnerable_for * 6.0) as i32 % 2 == 0 {
        return;
    }
    draw_ship_icon(ship.pos, ship.angle_deg, ship.radius);
}

/// The ship triangle, reused for the lives display.
pub fn draw_ship_icon(pos: Vec2, angle_deg: f32, size: f32) {
    let nose = pos + heading(angle_deg) * size;
    let left = pos + heading(angle_deg + 140.0) * (size * 0.67);
    let right = pos + heading(angle_deg - 140.0) * (size * 0.67);
    draw_triangle_lines(nose, left, right, 2.0, WHITE);
}

pub fn draw_asteroid(rock: &Asteroid) {
    let color = ASTEROID_PALETTE[rock.color_index % ASTEROID_PALETTE.len()];
    // Fan out from the center; the outline is star-shaped around it
    let n = rock.shape.len();
    for i in 0..n {
        let a = rock.pos + rock.shape[i];
        let b = rock.pos + rock.shape[(i + 1) % n];
        draw_triangle(rock.pos, a, b, color);
    }
}

pub fn draw_bullet(bullet: &Bullet) {
    draw_circle(bullet.pos.x, bullet.pos.y, bullet.radius, WHITE);
}

pub fn draw_ufo(ufo: &Ufo) {
    let r = ufo.radius();
    let p = ufo.pos;

    // Hull: flattened hexagon
    let hull = [
        vec2(-r, 0.0),
        vec2(-r * 0.45, -r / 3.0),
        vec2(r * 0.45, -r / 3.0),
        vec2(r, 0.0),
        vec2(r * 0.45, r / 3.0),
        vec2(-r * 0.45, r / 3.0),
    ];
    for i in 0..hull.len() {
        let a = p + hull[i];
        let b = p + hull[(i + 1) % hull.len()];
        draw_line(a.x, a.y, b.x, b.y, 2.0, WHITE);
    }

    // Dome
    let dome = [
        vec2(-r * 0.45, -r / 3.0),
        vec2(-r * 0.2, -r * 0.75),
        vec2(r * 0.2, -r * 0.75),
        vec2(r * 0.45, -r / 3.0),
    ];
    for pair in dome.windows(2) {
        let a = p + pair[0];
        let b = p + pair[1];
        draw_line(a.x, a.y, b.x, b.y, 2.0, WHITE);
    }
}
