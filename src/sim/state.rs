//! Session-lifetime game state and the read-only render snapshot
//!
//! `GameState` owns the cell, world, and camera for the whole session, plus
//! the seeded RNG every random operation draws from. There is exactly one
//! long-lived running state; the only transition out is the quit signal.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::cell::Cell;
use super::circle::Rgb;
use super::world::{Bounds, World};
use crate::settings::Settings;

/// Events generated by a tick, drained by the session shell each frame
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Pellets were eaten this tick
    PelletsEaten { count: u32, mass_gained: f32 },
    /// The player asked for a fresh cell description
    DescriptionRequested,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; all randomness in the session flows through it
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Cleared by the quit signal; nothing else ends the session
    pub running: bool,
    pub cell: Cell,
    pub world: World,
    pub camera: Camera,
    /// Events generated this tick (cleared each tick)
    pending_events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session from a seed and settings
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = Bounds::new(settings.world_width, settings.world_height);
        let world = World::new(bounds, settings.pellet_count, &mut rng);
        let cell = Cell::new(settings.player_name.as_str(), Rgb::random_muted(&mut rng));
        let mut camera = Camera::new(Vec2::new(
            settings.viewport_width,
            settings.viewport_height,
        ));
        // Center on the cell from the very first frame so the first input
        // sample translates consistently
        camera.follow(cell.pos(), bounds);

        Self {
            seed,
            rng,
            time_ticks: 0,
            running: true,
            cell,
            world,
            camera,
            pending_events: Vec::new(),
        }
    }

    /// Take pending events (consumes them)
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Push a game event
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    /// Read-only view of everything a frontend needs to draw one frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            camera_offset: self.camera.offset,
            mass: self.cell.mass(),
            cell: CellView {
                pos: self.cell.pos(),
                radius: self.cell.radius(),
                color: self.cell.color,
                name: self.cell.name.clone(),
                description: self.cell.description().to_string(),
                description_active: self.cell.description_active(),
            },
            pellets: self
                .world
                .pellets
                .iter()
                .map(|p| PelletView {
                    pos: p.circle.pos,
                    radius: p.circle.radius,
                    color: p.color,
                })
                .collect(),
        }
    }
}

/// Per-frame drawing data for the whole scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub camera_offset: Vec2,
    /// Scalar mass for the HUD
    pub mass: f32,
    pub cell: CellView,
    pub pellets: Vec<PelletView>,
}

/// Drawing data for the cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub name: String,
    pub description: String,
    pub description_active: bool,
}

/// Drawing data for one pellet
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PelletView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
}
