//! Session for the property-tour flow.
//!
//! This flow has no live backend at all: the result is chosen
//! deterministically from a fixed per-style catalog, and the advisory
//! progress timer itself reveals it once the percentage reaches 100. The
//! session still goes through the same [`SessionState`] machine as the
//! product flow.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tracing::info;

use promo_models::{synthesize_tour, GenerationId, GenerationResponse, TourRequest, TourStyle};

use crate::error::SubmitError;
use crate::progress::{advance, MAX_INCREMENT, MIN_INCREMENT, TICK_INTERVAL};
use crate::state::SessionState;

/// Catalog entry for one tour style: asset URL, length, size.
struct TourAsset {
    video_url: &'static str,
    duration_secs: u32,
    file_size: &'static str,
}

fn catalog(style: TourStyle) -> TourAsset {
    match style {
        TourStyle::Luxury => TourAsset {
            video_url:
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
            duration_secs: 165,
            file_size: "125 MB",
        },
        TourStyle::Family => TourAsset {
            video_url:
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
            duration_secs: 150,
            file_size: "118 MB",
        },
        TourStyle::Modern => TourAsset {
            video_url:
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
            duration_secs: 135,
            file_size: "95 MB",
        },
        TourStyle::Cinematic => TourAsset {
            video_url:
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
            duration_secs: 180,
            file_size: "142 MB",
        },
    }
}

/// Build the tour result for a validated request.
fn tour_response(request: &TourRequest) -> GenerationResponse {
    let style = request.style.unwrap_or(TourStyle::Luxury);
    let asset = catalog(style);

    GenerationResponse {
        id: GenerationId::new(),
        video_url: asset.video_url.to_string(),
        thumbnail_url: Some("/placeholder.svg?height=400&width=600".to_string()),
        duration_secs: asset.duration_secs,
        resolution: "4K UHD".to_string(),
        format: "MP4".to_string(),
        file_size: asset.file_size.to_string(),
        generated_at: Utc::now(),
        prompt: synthesize_tour(request),
    }
}

/// Controller for one tour-generation attempt at a time.
pub struct TourSession {
    state_tx: watch::Sender<SessionState>,
    attempt_seq: Arc<AtomicU64>,
}

impl TourSession {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(SessionState::Idle);
        Self {
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

    /// Start a tour-generation attempt.
    ///
    /// A style must be selected and the listing must carry non-blank
    /// features; invalid input is reported synchronously and nothing starts.
    pub fn submit(&self, request: TourRequest) -> Result<(), SubmitError> {
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
        info!(attempt = seq, address = %request.listing.address, "Starting tour generation");

        let response = tour_response(&request);
        let state_tx = self.state_tx.clone();
        let attempt_seq = Arc::clone(&self.attempt_seq);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            interval.tick().await;
            let mut rng = StdRng::from_entropy();
            let mut progress = 0u8;

            while progress < 100 {
                interval.tick().await;

                if attempt_seq.load(Ordering::SeqCst) != seq {
                    return;
                }

                progress = advance(progress, rng.gen_range(MIN_INCREMENT..=MAX_INCREMENT));
                state_tx.send_replace(SessionState::InFlight { progress });
            }

            if attempt_seq.load(Ordering::SeqCst) == seq {
                info!(attempt = seq, id = %response.id, "Tour generation complete");
                state_tx.send_replace(SessionState::Succeeded(response));
            }
        });

        Ok(())
    }

    /// Abandon the current attempt (if any) and return to idle. The ticker
    /// of a superseded attempt stops at its next tick.
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

impl Default for TourSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_models::{ListingDetails, RequestValidationError};

    fn valid_request() -> TourRequest {
        TourRequest::new(ListingDetails::demo()).with_style(TourStyle::Luxury)
    }

    #[tokio::test]
    async fn test_style_is_required() {
        let session = TourSession::new();
        let result = session.submit(TourRequest::new(ListingDetails::demo()));
        assert!(matches!(
            result,
            Err(SubmitError::Validation(
                RequestValidationError::MissingTourStyle
            ))
        ));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_revealed_at_full_progress() {
        let session = TourSession::new();
        session.submit(valid_request()).unwrap();

        let terminal = session.wait_for_terminal().await;
        let response = terminal.response().expect("expected success");
        assert!(response.video_url.ends_with("BigBuckBunny.mp4"));
        assert_eq!(response.duration_secs, 165);
        assert_eq!(response.resolution, "4K UHD");
        assert!(response.prompt.contains("Beverly Hills"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_style_maps_to_its_asset() {
        for (style, marker) in [
            (TourStyle::Family, "ElephantsDream.mp4"),
            (TourStyle::Modern, "ForBiggerBlazes.mp4"),
            (TourStyle::Cinematic, "ForBiggerEscapes.mp4"),
        ] {
            let session = TourSession::new();
            session
                .submit(TourRequest::new(ListingDetails::demo()).with_style(style))
                .unwrap();
            let terminal = session.wait_for_terminal().await;
            assert!(terminal.response().unwrap().video_url.ends_with(marker));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_while_tour_in_flight() {
        let session = TourSession::new();
        session.submit(valid_request()).unwrap();
        assert!(matches!(
            session.submit(valid_request()),
            Err(SubmitError::Busy)
        ));
        session.wait_for_terminal().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_abandons_attempt() {
        let session = TourSession::new();
        session.submit(valid_request()).unwrap();
        session.reset();

        // Give the abandoned ticker time to run well past completion.
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        assert_eq!(session.state(), SessionState::Idle);
    }
}
