//! Circle geometry shared by every entity
//!
//! Everything in the arena is a point-with-radius in world space. Entities
//! compose this value type rather than inheriting from a base object, and
//! collision code only ever talks to `Circle`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A positioned circle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center position (world units)
    pub pos: Vec2,
    /// Radius (always positive)
    pub radius: f32,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }

    /// Strict containment test: is `point` inside this circle?
    ///
    /// Used for consumption, where only the larger entity's radius counts.
    #[inline]
    pub fn contains_center(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius
    }

    /// Area of the circle (the mass a consumer gains by eating it)
    #[inline]
    pub fn area_mass(&self) -> f32 {
        self.radius * self.radius
    }
}

/// Opaque display color. Carried for the rendering sink and the describe
/// prompt; has no effect on simulation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Bright random color for pellets
    pub fn random_bright(rng: &mut impl Rng) -> Self {
        Self(
            rng.random_range(50..=255u8),
            rng.random_range(50..=255u8),
            rng.random_range(50..=255u8),
        )
    }

    /// Slightly muted random color for the cell (keeps the name readable)
    pub fn random_muted(rng: &mut impl Rng) -> Self {
        Self(
            rng.random_range(50..=200u8),
            rng.random_range(50..=200u8),
            rng.random_range(50..=200u8),
        )
    }
}
