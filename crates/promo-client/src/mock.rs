//! Simulated generation transport.
//!
//! Used when no real backend is configured. Introduces an artificial delay
//! drawn from the configured window and fails stochastically so the UI can
//! exercise its loading and error states. Only the stochastic path ever
//! fails; any validated request otherwise produces a fabricated response.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::debug;

use promo_models::{synthesize, GenerationId, GenerationRequest, GenerationResponse};

use crate::config::ClientConfig;
use crate::error::{GenerationError, GenerationResult};
use crate::transport::GenerationTransport;

/// Sample assets served by the simulated backend.
pub const SAMPLE_VIDEOS: [&str; 3] = [
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
];

/// Thumbnails matching [`SAMPLE_VIDEOS`] by index.
pub const SAMPLE_THUMBNAILS: [&str; 3] = [
    "/placeholder.svg?height=360&width=640&text=Thumbnail+1",
    "/placeholder.svg?height=360&width=640&text=Thumbnail+2",
    "/placeholder.svg?height=360&width=640&text=Thumbnail+3",
];

/// Simulated transport strategy.
pub struct MockTransport {
    config: ClientConfig,
    rng: Mutex<StdRng>,
}

impl MockTransport {
    /// Create a mock transport with entropy-seeded randomness.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a mock transport with a fixed seed, for reproducible tests.
    pub fn with_seed(config: ClientConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    async fn simulated_delay(&self) -> Duration {
        let min = self.config.mock_delay_min.as_millis() as u64;
        let max = self.config.mock_delay_max.as_millis() as u64;
        if max <= min {
            return Duration::from_millis(min);
        }
        let mut rng = self.rng.lock().await;
        Duration::from_millis(rng.gen_range(min..=max))
    }
}

#[async_trait]
impl GenerationTransport for MockTransport {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> GenerationResult<GenerationResponse> {
        let delay = self.simulated_delay().await;
        debug!(delay_ms = delay.as_millis() as u64, "Simulating generation latency");
        tokio::time::sleep(delay).await;

        let mut rng = self.rng.lock().await;

        if rng.gen::<f64>() < self.config.mock_failure_rate {
            return Err(GenerationError::Unavailable {
                message: "Video generation service temporarily unavailable".to_string(),
            });
        }

        let index = rng.gen_range(0..SAMPLE_VIDEOS.len());
        let duration = request.duration.as_secs();
        let file_size = format!("{}MB", duration / 2 + rng.gen_range(0..3));

        Ok(GenerationResponse {
            id: GenerationId::new(),
            video_url: SAMPLE_VIDEOS[index].to_string(),
            thumbnail_url: Some(SAMPLE_THUMBNAILS[index].to_string()),
            duration_secs: duration,
            resolution: "1920x1080".to_string(),
            format: "MP4".to_string(),
            file_size,
            generated_at: Utc::now(),
            prompt: synthesize(request),
        })
    }
}
