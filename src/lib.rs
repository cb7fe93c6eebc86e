//! Petri - a grow-and-graze arena game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, growth, consumption, camera)
//! - `describe`: Optional generative cell-description capability
//! - `session`: Frame loop shell wiring sim events to background requests
//! - `settings`: Runtime configuration

pub mod describe;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (Hz)
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions (world units, centered at the origin)
    pub const WORLD_WIDTH: f32 = 2000.0;
    pub const WORLD_HEIGHT: f32 = 2000.0;

    /// Viewport dimensions (the window a frontend is expected to show)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Pellet population (constant for the whole session)
    pub const PELLET_COUNT: usize = 200;
    pub const PELLET_RADIUS: f32 = 5.0;

    /// Cell starting radius (starting mass is its square)
    pub const INITIAL_CELL_RADIUS: f32 = 20.0;
    /// Radius floor so the cell never vanishes
    pub const MIN_CELL_RADIUS: f32 = 5.0;
    /// Base movement rate (world units per tick at the initial radius)
    pub const SPEED_FACTOR: f32 = 0.1;
    /// Minimum movement rate, however large the cell grows
    pub const MIN_SPEED: f32 = 0.1;
    /// Targets closer than this don't move the cell (rest jitter guard)
    pub const REST_DISTANCE: f32 = 1.0;

    /// How long a completed cell description stays on screen (seconds)
    pub const DESCRIPTION_SECS: f32 = 5.0;
    /// Lifetime of the in-flight placeholder; matches the request timeout so
    /// the placeholder outlives any possible reply
    pub const PENDING_DESCRIPTION_SECS: f32 = 10.0;
    /// How long a failure placeholder stays on screen (seconds)
    pub const ERROR_DESCRIPTION_SECS: f32 = 2.0;
}
