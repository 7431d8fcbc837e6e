//! Transport configuration.
//!
//! Resolved once at startup and injected into the transport; nothing reads
//! the environment after construction.

use std::time::Duration;

/// Configuration for the generation transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the video-generation API
    pub api_base_url: String,
    /// Bearer token for the API
    pub api_key: String,
    /// Use the simulated transport instead of the real API
    pub mock_mode: bool,
    /// Lower bound of the simulated latency window
    pub mock_delay_min: Duration,
    /// Upper bound of the simulated latency window
    pub mock_delay_max: Duration,
    /// Probability in [0, 1] that a simulated call fails
    pub mock_failure_rate: f64,
    /// HTTP request timeout
    pub request_timeout: Duration,
    /// Shortest supported clip length in seconds
    pub min_duration_secs: u32,
    /// Longest supported clip length in seconds
    pub max_duration_secs: u32,
    /// Container formats the backend accepts
    pub supported_formats: Vec<String>,
    /// Frame sizes the backend accepts; the first entry is the canonical one
    pub supported_resolutions: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001".to_string(),
            api_key: String::new(),
            mock_mode: true,
            mock_delay_min: Duration::from_secs(2),
            mock_delay_max: Duration::from_secs(5),
            mock_failure_rate: 0.10,
            request_timeout: Duration::from_secs(30),
            min_duration_secs: 10,
            max_duration_secs: 120,
            supported_formats: vec!["mp4".to_string(), "webm".to_string(), "mov".to_string()],
            supported_resolutions: vec![
                "1920x1080".to_string(),
                "1280x720".to_string(),
                "854x480".to_string(),
            ],
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// When `PROMOREEL_MOCK_MODE` is unset, mock mode is enabled exactly when
    /// no API key is configured.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = std::env::var("PROMOREEL_API_KEY").unwrap_or_default();

        Self {
            api_base_url: std::env::var("PROMOREEL_API_BASE_URL")
                .unwrap_or(defaults.api_base_url),
            mock_mode: std::env::var("PROMOREEL_MOCK_MODE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(api_key.is_empty()),
            api_key,
            mock_delay_min: Duration::from_millis(
                std::env::var("PROMOREEL_MOCK_DELAY_MIN_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(2000),
            ),
            mock_delay_max: Duration::from_millis(
                std::env::var("PROMOREEL_MOCK_DELAY_MAX_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5000),
            ),
            mock_failure_rate: std::env::var("PROMOREEL_MOCK_FAILURE_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.mock_failure_rate),
            request_timeout: Duration::from_secs(
                std::env::var("PROMOREEL_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            min_duration_secs: std::env::var("PROMOREEL_MIN_DURATION_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_duration_secs),
            max_duration_secs: std::env::var("PROMOREEL_MAX_DURATION_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_duration_secs),
            supported_formats: std::env::var("PROMOREEL_SUPPORTED_FORMATS")
                .map(|s| s.split(',').map(|f| f.trim().to_lowercase()).collect())
                .unwrap_or(defaults.supported_formats),
            supported_resolutions: std::env::var("PROMOREEL_SUPPORTED_RESOLUTIONS")
                .map(|s| s.split(',').map(|r| r.trim().to_string()).collect())
                .unwrap_or(defaults.supported_resolutions),
        }
    }

    /// The canonical resolution sent with real requests.
    pub fn canonical_resolution(&self) -> &str {
        self.supported_resolutions
            .first()
            .map(String::as_str)
            .unwrap_or("1920x1080")
    }

    /// Whether a clip length falls inside the supported bounds.
    pub fn supports_duration(&self, secs: u32) -> bool {
        secs >= self.min_duration_secs && secs <= self.max_duration_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3001");
        assert!(config.mock_mode);
        assert_eq!(config.mock_delay_min, Duration::from_secs(2));
        assert_eq!(config.mock_delay_max, Duration::from_secs(5));
        assert_eq!(config.canonical_resolution(), "1920x1080");
    }

    #[test]
    fn test_duration_bounds() {
        let config = ClientConfig::default();
        assert!(config.supports_duration(15));
        assert!(config.supports_duration(120));
        assert!(!config.supports_duration(5));
        assert!(!config.supports_duration(600));
    }
}
