//! The player-controlled cell
//!
//! Movement-target tracking, size-dependent speed, the mass-to-radius growth
//! law, pellet consumption, and the ephemeral description label.
//!
//! Mass only ever increases, and the radius is always derived from it:
//! `radius = sqrt(mass)`, floored at [`MIN_CELL_RADIUS`]. Nothing else in the
//! crate writes the radius directly.

use glam::Vec2;

use super::circle::{Circle, Rgb};
use super::pellet::Pellet;
use super::world::Bounds;
use crate::consts::{
    INITIAL_CELL_RADIUS, MIN_CELL_RADIUS, MIN_SPEED, REST_DISTANCE, SPEED_FACTOR,
};

/// Ephemeral description label with a countdown timer.
///
/// The generation counter bumps on every set or clear, letting the session
/// recognize and drop stale results from in-flight describe requests.
#[derive(Debug, Clone, Default)]
struct DescriptionLabel {
    text: String,
    remaining: f32,
    generation: u64,
}

/// The growing, player-controlled entity
#[derive(Debug, Clone)]
pub struct Cell {
    circle: Circle,
    pub color: Rgb,
    pub name: String,
    mass: f32,
    target: Vec2,
    description: DescriptionLabel,
}

impl Cell {
    /// Create the cell at the world origin with the default starting radius
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            circle: Circle::new(Vec2::ZERO, INITIAL_CELL_RADIUS),
            color,
            name: name.into(),
            mass: INITIAL_CELL_RADIUS * INITIAL_CELL_RADIUS,
            target: Vec2::ZERO,
            description: DescriptionLabel::default(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.circle.pos
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.circle.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Store the desired destination. No validation: the target may lie
    /// outside the world, movement clamps regardless.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Current movement rate in world units per tick.
    ///
    /// Inversely proportional to size: growth trades maneuverability for
    /// mass. Floored so a huge cell still crawls.
    pub fn speed(&self) -> f32 {
        (SPEED_FACTOR * INITIAL_CELL_RADIUS / self.circle.radius).max(MIN_SPEED)
    }

    /// One tick of movement toward the target.
    ///
    /// Displacement is a fixed amount per tick, not scaled by wall-clock
    /// time; the session steps the sim at a fixed rate to keep gameplay
    /// frame-rate independent. Targets within [`REST_DISTANCE`] are ignored
    /// so the cell doesn't jitter once it arrives. The post-move position is
    /// clamped so the full radius stays inside `bounds`.
    pub fn advance(&mut self, bounds: Bounds) {
        let delta = self.target - self.circle.pos;
        let distance = delta.length();
        if distance <= REST_DISTANCE {
            return;
        }
        let step = delta / distance * self.speed();
        self.circle.pos = bounds.clamp_circle(self.circle.pos + step, self.circle.radius);
    }

    /// Add mass and recompute the radius.
    ///
    /// There is no shrink path; a negative delta is a caller bug and is
    /// ignored rather than corrupting the growth invariant.
    pub fn grow(&mut self, mass_delta: f32) {
        if !(mass_delta >= 0.0) {
            log::warn!("grow called with invalid mass delta {mass_delta}, ignoring");
            return;
        }
        self.mass += mass_delta;
        self.circle.radius = self.mass.sqrt().max(MIN_CELL_RADIUS);
    }

    /// Consume the pellet if its center lies strictly inside the cell's
    /// radius. The pellet's own radius never enters the test, so small food
    /// is eaten consistently regardless of overlap; on success the cell
    /// gains the pellet's area as mass.
    pub fn try_consume(&mut self, pellet: &Pellet) -> bool {
        if self.circle.contains_center(pellet.circle.pos) {
            self.grow(pellet.circle.area_mass());
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description.text
    }

    #[inline]
    pub fn description_active(&self) -> bool {
        self.description.remaining > 0.0 && !self.description.text.is_empty()
    }

    #[inline]
    pub fn description_generation(&self) -> u64 {
        self.description.generation
    }

    /// Replace the description text and reset its timer
    pub fn set_description(&mut self, text: impl Into<String>, secs: f32) {
        self.description.text = text.into();
        self.description.remaining = secs;
        self.description.generation += 1;
    }

    /// Drop the description immediately
    pub fn clear_description(&mut self) {
        self.description.text.clear();
        self.description.remaining = 0.0;
        self.description.generation += 1;
    }

    /// Decay the description timer; clears the text once it runs out
    pub fn tick_description(&mut self, dt: f32) {
        if self.description.remaining > 0.0 {
            self.description.remaining -= dt;
            if self.description.remaining <= 0.0 {
                self.clear_description();
            }
        }
    }
}
