//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG, owned by the state and passed explicitly
//! - No rendering, network, or platform dependencies

pub mod camera;
pub mod cell;
pub mod circle;
pub mod pellet;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::Camera;
pub use cell::Cell;
pub use circle::{Circle, Rgb};
pub use pellet::Pellet;
pub use state::{CellView, GameEvent, GameState, PelletView, Snapshot};
pub use tick::{TickInput, tick};
pub use world::{Bounds, World};
