//! Circle-overlap collision detection
//!
//! Every entity is bounded by a circle, so the whole broad-and-narrow
//! phase is one Euclidean distance test per pair. Pairwise checks are fine
//! at this entity count.

use macroquad::math::Vec2;

use super::state::{Asteroid, Bullet, Ship, Ufo};

/// Two circles collide when their centers are closer than the sum of
/// their radii. Strict inequality: exactly touching is not a hit.
#[inline]
pub fn circles_collide(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Common bounding-circle capability shared by every game object.
pub trait Collider {
    fn center(&self) -> Vec2;
    fn bounding_radius(&self) -> f32;

    fn overlaps<C: Collider + ?Sized>(&self, other: &C) -> bool {
        circles_collide(
            self.center(),
            self.bounding_radius(),
            other.center(),
            other.bounding_radius(),
        )
    }
}

impl Collider for Ship {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn bounding_radius(&self) -> f32 {
        self.radius
    }
}

impl Collider for Asteroid {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn bounding_radius(&self) -> f32 {
        self.radius()
    }
}

impl Collider for Bullet {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn bounding_radius(&self) -> f32 {
        self.radius
    }
}

impl Collider for Ufo {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn bounding_radius(&self) -> f32 {
        self.radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bullet_hits_nearby_asteroid() {
        // Centers 5 apart, radii sum 12
        assert!(circles_collide(
            Vec2::new(100.0, 100.0),
            2.0,
            Vec2::new(105.0, 100.0),
            10.0
        ));
    }

    #[test]
    fn touching_circles_do_not_collide() {
        assert!(!circles_collide(
            Vec2::new(0.0, 0.0),
            5.0,
            Vec2::new(12.0, 0.0),
            7.0
        ));
    }

    #[test]
    fn far_circles_miss() {
        assert!(!circles_collide(
            Vec2::new(0.0, 0.0),
            5.0,
            Vec2::new(100.0, 100.0),
            5.0
        ));
    }

    proptest! {
        #[test]
        fn predicate_is_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
            ar in 0.0f32..100.0, br in 0.0f32..100.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(
                circles_collide(a, ar, b, br),
                circles_collide(b, br, a, ar)
            );
        }
    }
}
