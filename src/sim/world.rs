//! Arena bounds and the pellet population
//!
//! The world is a fixed rectangle centered at the origin. It owns a
//! constant-size collection of pellets: eaten pellets are replaced in place,
//! never removed, so the population count is invariant for the whole session.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::pellet::Pellet;

/// Rectangular world bounds, centered at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub half_width: f32,
    pub half_height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    /// Clamp `pos` so a circle of `radius` stays fully inside the bounds.
    ///
    /// Shared by entities and (indirectly) the camera. An axis too small to
    /// fit the radius pins to its center instead of producing an inverted
    /// clamp range.
    pub fn clamp_circle(&self, pos: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            clamp_axis(pos.x, self.half_width, radius),
            clamp_axis(pos.y, self.half_height, radius),
        )
    }

    /// Uniform random point within the bounds
    pub fn random_point(&self, rng: &mut Pcg32) -> Vec2 {
        use rand::Rng;
        Vec2::new(
            rng.random_range(-self.half_width..=self.half_width),
            rng.random_range(-self.half_height..=self.half_height),
        )
    }
}

fn clamp_axis(v: f32, half: f32, radius: f32) -> f32 {
    let limit = half - radius;
    if limit <= 0.0 { 0.0 } else { v.clamp(-limit, limit) }
}

/// The arena: fixed bounds plus a constant-size pellet population
#[derive(Debug, Clone)]
pub struct World {
    pub bounds: Bounds,
    pub pellets: Vec<Pellet>,
}

impl World {
    /// Create a world populated with `pellet_count` randomly placed pellets
    pub fn new(bounds: Bounds, pellet_count: usize, rng: &mut Pcg32) -> Self {
        let pellets = (0..pellet_count)
            .map(|_| Pellet::spawn(bounds, rng))
            .collect();
        Self { bounds, pellets }
    }

    /// Test every pellet against the cell; each consumed pellet is replaced
    /// in place by a fresh randomly placed one. Returns the number eaten.
    ///
    /// Pellets never interact with each other, so the outcome does not depend
    /// on iteration order.
    pub fn resolve_consumption(&mut self, cell: &mut Cell, rng: &mut Pcg32) -> u32 {
        let mut eaten = 0;
        for pellet in &mut self.pellets {
            if cell.try_consume(pellet) {
                *pellet = Pellet::spawn(self.bounds, rng);
                eaten += 1;
            }
        }
        eaten
    }
}
