//! Session controller for the product-video flow.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use promo_client::GenerationTransport;
use promo_models::GenerationRequest;

use crate::error::SubmitError;
use crate::progress::{advance, MAX_INCREMENT, MIN_INCREMENT, TICK_INTERVAL};
use crate::state::{SessionFailure, SessionState};

/// How in-flight progress is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressStyle {
    /// No percentage; the UI shows an indeterminate spinner and progress
    /// stays at zero until the transport resolves.
    #[default]
    Indeterminate,
    /// Timer-driven advisory percentage, decoupled from real completion.
    Simulated,
}

/// Orchestrates one generation attempt at a time.
///
/// Validates input, publishes [`SessionState`] over a watch channel, invokes
/// the transport exactly once per attempt, and maps the outcome to a
/// terminal state. Each attempt carries a sequence number; a resolution from
/// a superseded attempt is discarded instead of overwriting newer state.
pub struct SessionController {
    transport: Arc<dyn GenerationTransport>,
    progress_style: ProgressStyle,
    state_tx: watch::Sender<SessionState>,
    attempt_seq: Arc<AtomicU64>,
}

impl SessionController {
    /// Create a controller over the given transport.
    pub fn new(transport: Arc<dyn GenerationTransport>, progress_style: ProgressStyle) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Idle);
        Self {
            transport,
            progress_style,
            state_tx,
            attempt_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Subscribe to state updates.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Start a generation attempt.
    ///
    /// Returns immediately once the attempt is accepted; the outcome arrives
    /// through the watch channel. Rejected with [`SubmitError::Busy`] while
    /// an attempt is outstanding, and with [`SubmitError::Validation`] when
    /// the request is not submittable (the transport is never called).
    pub fn submit(&self, request: GenerationRequest) -> Result<(), SubmitError> {
        if self.state_tx.borrow().is_in_flight() {
            return Err(SubmitError::Busy);
        }

        // An invalid submission reports inline and leaves any prior terminal
        // state on display.
        let prior = self.state_tx.borrow().clone();
        self.state_tx.send_replace(SessionState::Validating);
        if let Err(error) = request.validate() {
            self.state_tx.send_replace(prior);
            return Err(SubmitError::Validation(error));
        }

        let seq = self.attempt_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_replace(SessionState::InFlight { progress: 0 });
        info!(attempt = seq, product = %request.product_name, "Starting generation attempt");

        let ticker = match self.progress_style {
            ProgressStyle::Indeterminate => None,
            ProgressStyle::Simulated => Some(spawn_progress_ticker(
                self.state_tx.clone(),
                Arc::clone(&self.attempt_seq),
                seq,
            )),
        };

        let transport = Arc::clone(&self.transport);
        let state_tx = self.state_tx.clone();
        let attempt_seq = Arc::clone(&self.attempt_seq);

        tokio::spawn(async move {
            let result = transport.generate(&request).await;

            if let Some(ticker) = ticker {
                ticker.abort();
            }

            if attempt_seq.load(Ordering::SeqCst) != seq {
                debug!(attempt = seq, "Discarding resolution from superseded attempt");
                return;
            }

            match result {
                Ok(response) => {
                    info!(attempt = seq, id = %response.id, "Generation succeeded");
                    state_tx.send_replace(SessionState::Succeeded(response));
                }
                Err(error) => {
                    warn!(attempt = seq, code = error.code(), "Generation failed: {}", error);
                    state_tx.send_replace(SessionState::Failed(SessionFailure::from_error(&error)));
                }
            }
        });

        Ok(())
    }

    /// Abandon the current attempt (if any) and return to idle.
    ///
    /// The underlying call is not aborted; its eventual resolution is
    /// discarded by the sequence check.
    pub fn reset(&self) {
        self.attempt_seq.fetch_add(1, Ordering::SeqCst);
        self.state_tx.send_replace(SessionState::Idle);
    }

    /// Wait until the current attempt reaches a terminal state.
    pub async fn wait_for_terminal(&self) -> SessionState {
        let mut rx = self.state_tx.subscribe();
        loop {
            {
                let state = rx.borrow_and_update();
                if state.is_terminal() {
                    return state.clone();
                }
            }
            if rx.changed().await.is_err() {
                return SessionState::Idle;
            }
        }
    }
}

/// Spawn the advisory progress timer for one attempt.
///
/// Runs until the attempt is superseded or leaves the in-flight state; the
/// attempt task also aborts it on resolution so no recurring callback leaks.
fn spawn_progress_ticker(
    state_tx: watch::Sender<SessionState>,
    attempt_seq: Arc<AtomicU64>,
    seq: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        interval.tick().await;
        let mut rng = StdRng::from_entropy();

        loop {
            interval.tick().await;

            if attempt_seq.load(Ordering::SeqCst) != seq {
                break;
            }

            let increment = rng.gen_range(MIN_INCREMENT..=MAX_INCREMENT);
            let mut still_in_flight = false;
            state_tx.send_if_modified(|state| {
                if let SessionState::InFlight { progress } = state {
                    still_in_flight = true;
                    let next = advance(*progress, increment);
                    let changed = next != *progress;
                    *progress = next;
                    changed
                } else {
                    false
                }
            });

            if !still_in_flight {
                break;
            }
        }
    })
}
