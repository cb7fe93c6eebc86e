//! Fixed timestep simulation tick
//!
//! Per-frame order of operations. The order is load-bearing: movement must
//! precede consumption (eating uses the post-move position), and the camera
//! recenters on the post-move position so rendering and the next frame's
//! input translation stay consistent.

use glam::Vec2;

use super::state::{GameEvent, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in viewport coordinates, sampled each frame
    pub pointer: Option<Vec2>,
    /// Ask the describe capability for a fresh cell description
    pub describe: bool,
    /// Quit signal from the platform event source
    pub quit: bool,
}

/// Advance the game state by one tick.
///
/// `dt` is the tick's duration in seconds and only drives the description
/// timer; movement is a fixed amount per tick by design.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.quit {
        state.running = false;
        return;
    }
    if !state.running {
        return;
    }

    state.time_ticks += 1;

    // 1. Translate the pointer sample into a world-space movement target
    if let Some(pointer) = input.pointer {
        let target = state.camera.screen_to_world(pointer);
        state.cell.set_target(target);
    }

    // 2. Move toward the target
    let bounds = state.world.bounds;
    state.cell.advance(bounds);

    // 3. Camera follows the post-move position
    state.camera.follow(state.cell.pos(), bounds);

    // 4. Consumption against the post-move position; eaten pellets are
    //    replaced immediately
    let mass_before = state.cell.mass();
    let count = state
        .world
        .resolve_consumption(&mut state.cell, &mut state.rng);
    if count > 0 {
        let mass_gained = state.cell.mass() - mass_before;
        state.push_event(GameEvent::PelletsEaten { count, mass_gained });
    }

    // 5. Description timer decay
    state.cell.tick_description(dt);

    if input.describe {
        state.push_event(GameEvent::DescriptionRequested);
    }
}
