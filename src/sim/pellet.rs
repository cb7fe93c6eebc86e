//! Pellets: stationary consumables scattered across the arena
//!
//! A pellet is nothing but a fixed-radius circle with a random color at a
//! random position. Consumption logic lives on the cell; pellets are passive.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::circle::{Circle, Rgb};
use super::world::Bounds;
use crate::consts::PELLET_RADIUS;

/// A stationary food pellet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pellet {
    pub circle: Circle,
    pub color: Rgb,
}

impl Pellet {
    /// Spawn at a uniform random position inside `bounds`, clamped so the
    /// full pellet radius stays in the arena
    pub fn spawn(bounds: Bounds, rng: &mut Pcg32) -> Self {
        let pos = bounds.clamp_circle(bounds.random_point(rng), PELLET_RADIUS);
        Self {
            circle: Circle::new(pos, PELLET_RADIUS),
            color: Rgb::random_bright(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_has_fixed_radius() {
        let bounds = Bounds::new(2000.0, 2000.0);
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..32 {
            let pellet = Pellet::spawn(bounds, &mut rng);
            assert_eq!(pellet.circle.radius, PELLET_RADIUS);
        }
    }

    #[test]
    fn test_spawn_positions_vary() {
        let bounds = Bounds::new(2000.0, 2000.0);
        let mut rng = Pcg32::seed_from_u64(2);
        let a = Pellet::spawn(bounds, &mut rng);
        let b = Pellet::spawn(bounds, &mut rng);
        assert_ne!(a.circle.pos, b.circle.pos);
    }
}
