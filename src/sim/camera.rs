//! Camera: maps the fixed-size viewport into world space
//!
//! The offset is the world coordinate of the viewport's top-left corner. It
//! follows the cell and is clamped so the viewport never shows anything
//! beyond the world edge (when the world is at least viewport-sized).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::world::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World coordinate of the viewport's top-left corner
    pub offset: Vec2,
    /// Viewport size in world units (world is drawn 1:1)
    pub viewport: Vec2,
}

impl Camera {
    /// Camera centered on the world origin
    pub fn new(viewport: Vec2) -> Self {
        Self {
            offset: -viewport / 2.0,
            viewport,
        }
    }

    /// Recenter the viewport on `center`, then clamp to the world bounds.
    ///
    /// When the world is smaller than the viewport on an axis, the world is
    /// centered on that axis instead.
    pub fn follow(&mut self, center: Vec2, bounds: Bounds) {
        let ideal = center - self.viewport / 2.0;
        self.offset = Vec2::new(
            clamp_offset(ideal.x, bounds.half_width, self.viewport.x),
            clamp_offset(ideal.y, bounds.half_height, self.viewport.y),
        );
    }

    /// Translate a viewport-local coordinate into world space
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.offset
    }
}

fn clamp_offset(ideal: f32, half: f32, view: f32) -> f32 {
    let lo = -half;
    let hi = half - view;
    if hi < lo { -view / 2.0 } else { ideal.clamp(lo, hi) }
}
