//! Session shell around the deterministic simulation
//!
//! Runs the sim one tick per frame and wires its events to the describe
//! capability: at most one request in flight, results polled once per frame,
//! stale results dropped via the description generation counter.

use std::sync::Arc;

use crate::consts::{
    DESCRIPTION_SECS, ERROR_DESCRIPTION_SECS, PENDING_DESCRIPTION_SECS, SIM_DT,
};
use crate::describe::{DescribeRequest, Describer, PendingDescription};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Label shown while a request is in flight
const PENDING_TEXT: &str = "Thinking...";
/// Label shown when a request fails
const ERROR_TEXT: &str = "description error";

/// One game session: simulation state plus the non-deterministic plumbing
/// the sim itself is not allowed to touch
pub struct Session {
    state: GameState,
    describer: Option<Arc<dyn Describer>>,
    pending: Option<PendingDescription>,
}

impl Session {
    /// Create a session. A missing describer degrades the describe trigger
    /// to a no-op; this is logged once here, not per request.
    pub fn new(state: GameState, describer: Option<Arc<dyn Describer>>) -> Self {
        if describer.is_none() {
            log::info!("description service not configured; describe requests are no-ops");
        }
        Self {
            state,
            describer,
            pending: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// One frame: poll the outstanding describe request, advance the sim by
    /// one tick, then react to the tick's events.
    pub fn frame(&mut self, input: &TickInput) {
        self.poll_description();
        tick(&mut self.state, input, SIM_DT);
        for event in self.state.take_events() {
            match event {
                GameEvent::DescriptionRequested => self.request_description(),
                GameEvent::PelletsEaten { count, mass_gained } => {
                    log::debug!("ate {count} pellets (+{mass_gained:.1} mass)");
                }
            }
        }
    }

    fn request_description(&mut self) {
        let Some(describer) = &self.describer else {
            log::debug!("describe request ignored: no service configured");
            return;
        };
        if self.pending.is_some() {
            log::debug!("describe request ignored: one already in flight");
            return;
        }

        let request = DescribeRequest {
            color: self.state.cell.color,
            mass: self.state.cell.mass(),
        };
        log::info!("requesting cell description (mass {:.0})", request.mass);

        // The placeholder's timer covers the request timeout, so its
        // generation stays current for any reply that can still arrive
        self.state
            .cell
            .set_description(PENDING_TEXT, PENDING_DESCRIPTION_SECS);
        let generation = self.state.cell.description_generation();
        self.pending = Some(PendingDescription::spawn(
            Arc::clone(describer),
            request,
            generation,
        ));
    }

    fn poll_description(&mut self) {
        let Some(pending) = &mut self.pending else {
            return;
        };
        let Some(result) = pending.poll() else {
            return;
        };
        let generation = pending.generation;
        self.pending = None;

        if self.state.cell.description_generation() != generation {
            log::debug!("dropping stale description result");
            return;
        }
        match result {
            Ok(text) => {
                log::info!("cell description: {text}");
                self.state.cell.set_description(text, DESCRIPTION_SECS);
            }
            Err(err) => {
                log::warn!("description request failed: {err}");
                self.state.cell.set_description(ERROR_TEXT, ERROR_DESCRIPTION_SECS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::DescribeError;
    use crate::settings::Settings;
    use std::sync::Mutex;
    use std::sync::mpsc::{Receiver, Sender, channel};
    use std::time::Duration;

    /// Describer that blocks until the test hands it a result
    struct GatedStub {
        gate: Mutex<Receiver<Result<String, DescribeError>>>,
    }

    impl GatedStub {
        fn new() -> (Sender<Result<String, DescribeError>>, Arc<dyn Describer>) {
            let (tx, rx) = channel();
            (
                tx,
                Arc::new(Self {
                    gate: Mutex::new(rx),
                }),
            )
        }
    }

    impl Describer for GatedStub {
        fn describe(&self, _request: &DescribeRequest) -> Result<String, DescribeError> {
            self.gate
                .lock()
                .unwrap()
                .recv()
                .unwrap_or_else(|_| Err(DescribeError::Transport("gate closed".to_string())))
        }
    }

    fn session_with(describer: Option<Arc<dyn Describer>>) -> Session {
        let settings = Settings {
            pellet_count: 0,
            ..Settings::default()
        };
        Session::new(GameState::new(5, &settings), describer)
    }

    fn describe_input() -> TickInput {
        TickInput {
            describe: true,
            ..Default::default()
        }
    }

    /// Run frames until `done` holds or the deadline passes
    fn run_until(session: &mut Session, done: impl Fn(&Session) -> bool) {
        for _ in 0..500 {
            session.frame(&TickInput::default());
            if done(session) {
                return;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        panic!("condition not reached");
    }

    #[test]
    fn test_request_sets_pending_placeholder() {
        let (_tx, stub) = GatedStub::new();
        let mut session = session_with(Some(stub));
        session.frame(&describe_input());
        assert!(session.pending.is_some());
        assert_eq!(session.state.cell.description(), PENDING_TEXT);
    }

    #[test]
    fn test_success_replaces_placeholder() {
        let (tx, stub) = GatedStub::new();
        let mut session = session_with(Some(stub));
        session.frame(&describe_input());

        tx.send(Ok("a dapper green dot".to_string())).unwrap();
        run_until(&mut session, |s| {
            s.state.cell.description() == "a dapper green dot"
        });
        assert!(session.pending.is_none());
        assert!(session.state.cell.description_active());
    }

    #[test]
    fn test_failure_surfaces_placeholder() {
        let (tx, stub) = GatedStub::new();
        let mut session = session_with(Some(stub));
        session.frame(&describe_input());

        tx.send(Err(DescribeError::Status(500))).unwrap();
        run_until(&mut session, |s| s.state.cell.description() == ERROR_TEXT);
        assert!(session.state.cell.description_active());
    }

    #[test]
    fn test_second_request_rejected_while_in_flight() {
        let (tx, stub) = GatedStub::new();
        let mut session = session_with(Some(stub));
        session.frame(&describe_input());
        let first_generation = session.pending.as_ref().unwrap().generation;

        // Second trigger is rejected: same pending request, placeholder
        // generation untouched
        session.frame(&describe_input());
        assert_eq!(
            session.pending.as_ref().unwrap().generation,
            first_generation
        );
        assert_eq!(
            session.state.cell.description_generation(),
            first_generation
        );

        // After completion the trigger works again
        tx.send(Ok("first".to_string())).unwrap();
        run_until(&mut session, |s| s.pending.is_none());
        session.frame(&describe_input());
        assert!(session.pending.is_some());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let (tx, stub) = GatedStub::new();
        let mut session = session_with(Some(stub));
        session.frame(&describe_input());

        // The label changes before the request completes; the reply is stale
        session.state.cell.set_description("newer label", 5.0);
        tx.send(Ok("stale reply".to_string())).unwrap();
        run_until(&mut session, |s| s.pending.is_none());

        assert_eq!(session.state.cell.description(), "newer label");
    }

    #[test]
    fn test_no_service_is_a_noop() {
        let mut session = session_with(None);
        session.frame(&describe_input());
        assert!(session.pending.is_none());
        assert!(!session.state.cell.description_active());
    }
}
