//! Generative cell-description capability
//!
//! An external text service produces short flavor descriptions of the cell.
//! Calls are slow and unreliable, so they run on a background thread and are
//! polled once per frame; the simulation loop never blocks on the network.
//! Results are purely cosmetic and never touch simulation state directly.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::sim::Rgb;

/// Request timeout; [`crate::consts::PENDING_DESCRIPTION_SECS`] matches it
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default Gemini model for descriptions
pub const GEMINI_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// What the service gets to know about the cell
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeRequest {
    pub color: Rgb,
    pub mass: f32,
}

/// Description request failures. All of them are non-fatal: the session
/// surfaces a placeholder label and moves on.
#[derive(Debug, Error)]
pub enum DescribeError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service returned status {0}")]
    Status(u16),
    #[error("malformed service response")]
    MalformedResponse,
}

/// Blocking description backend.
///
/// Implementations are executed on a dedicated worker thread, so they may
/// block, but they should honor a timeout on the order of
/// [`REQUEST_TIMEOUT`].
pub trait Describer: Send + Sync {
    fn describe(&self, request: &DescribeRequest) -> Result<String, DescribeError>;
}

/// A single in-flight description request.
///
/// The worker thread sends its result over a channel; `poll` drains it
/// without blocking. `generation` records the cell's description generation
/// at issue time so the session can recognize stale results.
pub struct PendingDescription {
    rx: Receiver<Result<String, DescribeError>>,
    pub generation: u64,
}

impl PendingDescription {
    /// Run `describer` on a background thread
    pub fn spawn(
        describer: Arc<dyn Describer>,
        request: DescribeRequest,
        generation: u64,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = describer.describe(&request);
            // The session may already be gone; a dead receiver is fine
            let _ = tx.send(result);
        });
        Self { rx, generation }
    }

    /// Non-blocking completion check. Returns `None` while the request is
    /// still in flight; a dead worker counts as a failed request.
    pub fn poll(&mut self) -> Option<Result<String, DescribeError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err(DescribeError::Transport("worker exited".to_string())))
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_channel(
        rx: Receiver<Result<String, DescribeError>>,
        generation: u64,
    ) -> Self {
        Self { rx, generation }
    }
}

/// Gemini-backed describer using the REST `generateContent` endpoint
pub struct GeminiDescriber {
    api_key: String,
    model: String,
    agent: ureq::Agent,
}

impl GeminiDescriber {
    /// Build from the `GEMINI_API_KEY` environment variable
    pub fn from_env() -> Result<Self, DescribeError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| DescribeError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            api_key,
            model: GEMINI_MODEL.to_string(),
            agent,
        }
    }

    fn prompt(request: &DescribeRequest) -> String {
        let Rgb(r, g, b) = request.color;
        format!(
            "Generate a very short, quirky, one-sentence description for a growing \
             cell that is color ({r}, {g}, {b}) and has a mass of approximately {}. \
             Keep it under 15 words.",
            request.mass as u32
        )
    }
}

impl Describer for GeminiDescriber {
    fn describe(&self, request: &DescribeRequest) -> Result<String, DescribeError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": Self::prompt(request) }] }]
        });

        let response = self.agent.post(&url).send_json(body).map_err(|err| match err {
            ureq::Error::Status(code, _) => DescribeError::Status(code),
            other => DescribeError::Transport(other.to_string()),
        })?;

        let json: serde_json::Value = response
            .into_json()
            .map_err(|_| DescribeError::MalformedResponse)?;
        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or(DescribeError::MalformedResponse)?;
        Ok(text.trim().replace('"', ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_color_and_mass() {
        let prompt = GeminiDescriber::prompt(&DescribeRequest {
            color: Rgb(10, 20, 30),
            mass: 425.7,
        });
        assert!(prompt.contains("(10, 20, 30)"));
        assert!(prompt.contains("425"));
    }

    #[test]
    fn test_pending_poll_lifecycle() {
        let (tx, rx) = mpsc::channel();
        let mut pending = PendingDescription::from_channel(rx, 3);
        assert!(pending.poll().is_none());

        tx.send(Ok("a tiny blob".to_string())).unwrap();
        match pending.poll() {
            Some(Ok(text)) => assert_eq!(text, "a tiny blob"),
            other => panic!("unexpected poll result: {other:?}"),
        }
    }

    #[test]
    fn test_dead_worker_is_a_failure() {
        let (tx, rx) = mpsc::channel::<Result<String, DescribeError>>();
        let mut pending = PendingDescription::from_channel(rx, 0);
        drop(tx);
        assert!(matches!(
            pending.poll(),
            Some(Err(DescribeError::Transport(_)))
        ));
    }

    #[test]
    fn test_spawn_delivers_result() {
        struct Fixed;
        impl Describer for Fixed {
            fn describe(&self, _request: &DescribeRequest) -> Result<String, DescribeError> {
                Ok("gleaming speck".to_string())
            }
        }

        let mut pending = PendingDescription::spawn(
            Arc::new(Fixed),
            DescribeRequest {
                color: Rgb(0, 0, 0),
                mass: 400.0,
            },
            1,
        );

        // The worker is another thread; give it a moment
        let mut result = None;
        for _ in 0..200 {
            if let Some(r) = pending.poll() {
                result = Some(r);
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(result.unwrap().unwrap(), "gleaming speck");
    }
}
