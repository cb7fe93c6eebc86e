//! Petri entry point
//!
//! Rendering and real input live in an external frontend; this binary runs a
//! headless session with a scripted pointer so the whole loop (movement,
//! camera, consumption, description requests) can be observed end to end.

use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;

use petri::consts::{MAX_SUBSTEPS, SIM_DT, TICK_HZ};
use petri::describe::{Describer, GeminiDescriber};
use petri::sim::{GameState, TickInput};
use petri::{Session, Settings};

/// How long the scripted session runs
const DEMO_SECS: u64 = 10;
/// Tick at which the script asks for a cell description
const DESCRIBE_TICK: u64 = 60;

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("petri.json"));
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("starting session (seed {seed})");

    let describer: Option<Arc<dyn Describer>> = if settings.describe {
        match GeminiDescriber::from_env() {
            Ok(gemini) => Some(Arc::new(gemini)),
            Err(err) => {
                log::warn!("description service unavailable: {err}");
                None
            }
        }
    } else {
        None
    };

    let viewport = Vec2::new(settings.viewport_width, settings.viewport_height);
    let mut session = Session::new(GameState::new(seed, &settings), describer);

    // Scripted pointer: tour the viewport corners, two seconds per corner
    let waypoints = [
        Vec2::new(viewport.x, viewport.y),
        Vec2::new(0.0, viewport.y),
        Vec2::ZERO,
        Vec2::new(viewport.x, 0.0),
    ];

    let total_ticks = TICK_HZ as u64 * DEMO_SECS;
    let mut ticks = 0u64;
    let mut accumulator = 0.0f32;
    let mut last = Instant::now();

    while session.is_running() && ticks < total_ticks {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS && ticks < total_ticks {
            let waypoint = waypoints[(ticks / (2 * TICK_HZ as u64)) as usize % waypoints.len()];
            let input = TickInput {
                pointer: Some(waypoint),
                describe: ticks == DESCRIBE_TICK,
                quit: false,
            };
            session.frame(&input);

            if ticks % TICK_HZ as u64 == 0 {
                let state = session.state();
                log::info!(
                    "t={}s pos=({:.1}, {:.1}) mass={:.0} description={:?}",
                    ticks / TICK_HZ as u64,
                    state.cell.pos().x,
                    state.cell.pos().y,
                    state.cell.mass(),
                    state.cell.description(),
                );
            }

            accumulator -= SIM_DT;
            substeps += 1;
            ticks += 1;
        }

        thread::sleep(Duration::from_millis(2));
    }

    // Quit signal, then hand the final frame to stdout for inspection
    session.frame(&TickInput {
        quit: true,
        ..Default::default()
    });
    let snapshot = session.state().snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize snapshot: {err}"),
    }
}
