//! Real video-generation API client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use promo_models::{synthesize, GenerationRequest, GenerationResponse};

use crate::config::ClientConfig;
use crate::error::{GenerationError, GenerationResult};
use crate::transport::GenerationTransport;
use crate::wire::{WireErrorBody, WireGenerationRequest, WireGenerationResponse};

/// HTTP client for the video-generation API.
pub struct ApiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    resolution: String,
    min_duration_secs: u32,
    max_duration_secs: u32,
}

impl ApiClient {
    /// Create a client from configuration. Fails on an unparseable base URL.
    pub fn new(config: &ClientConfig) -> GenerationResult<Self> {
        let base = Url::parse(&config.api_base_url)
            .map_err(|e| GenerationError::Config(format!("invalid API base URL: {e}")))?;

        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(GenerationError::Network)?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/api/video-generation",
                base.as_str().trim_end_matches('/')
            ),
            api_key: config.api_key.clone(),
            resolution: config.canonical_resolution().to_string(),
            min_duration_secs: config.min_duration_secs,
            max_duration_secs: config.max_duration_secs,
        })
    }
}

#[async_trait]
impl GenerationTransport for ApiClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> GenerationResult<GenerationResponse> {
        let duration = request.duration.as_secs();
        if duration < self.min_duration_secs || duration > self.max_duration_secs {
            return Err(GenerationError::Config(format!(
                "duration {}s outside supported range {}-{}s",
                duration, self.min_duration_secs, self.max_duration_secs
            )));
        }

        let prompt = synthesize(request);
        let body = WireGenerationRequest::from_request(request, &self.resolution);

        debug!(endpoint = %self.endpoint, "Sending generation request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Generation request failed at the transport level: {}", e);
                GenerationError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body: WireErrorBody = response.json().await.unwrap_or_default();
            let error = error_body.into_error(status.as_u16());
            warn!(status = status.as_u16(), code = error.code(), "Generation request rejected");
            return Err(error);
        }

        let wire: WireGenerationResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        Ok(wire.into_response(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_models::VideoDuration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        let config = ClientConfig {
            mock_mode: false,
            api_base_url: server.uri(),
            api_key: "test-key".to_string(),
            ..ClientConfig::default()
        };
        ApiClient::new(&config).unwrap()
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("Suplimax", "Zero sugar, B-vitamins")
            .with_video_style("Motion Graphics")
            .with_duration(VideoDuration::Standard)
    }

    #[tokio::test]
    async fn test_success_body_is_translated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/video-generation"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "duration": 30,
                "style": "Motion Graphics",
                "resolution": "1920x1080",
                "format": "mp4",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "gen-42",
                "video_url": "https://cdn.example.com/gen-42.mp4",
                "thumbnail_url": "https://cdn.example.com/gen-42.jpg",
                "duration": 30,
                "resolution": "1920x1080",
                "format": "MP4",
                "file_size": "42MB",
                "created_at": "2024-05-01T12:00:00Z",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = request();
        let response = client_for(&server).generate(&request).await.unwrap();

        assert_eq!(response.id.as_str(), "gen-42");
        assert_eq!(response.video_url, "https://cdn.example.com/gen-42.mp4");
        assert_eq!(response.duration_secs, 30);
        assert_eq!(response.prompt, synthesize(&request));
    }

    #[tokio::test]
    async fn test_error_body_is_mapped() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/video-generation"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "message": "boom",
                "code": "X",
            })))
            .mount(&server)
            .await;

        let error = client_for(&server).generate(&request()).await.unwrap_err();
        match error {
            GenerationError::Api {
                status,
                message,
                code,
                ..
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
                assert_eq!(code, "X");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/video-generation"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let error = client_for(&server).generate(&request()).await.unwrap_err();
        match error {
            GenerationError::Api { message, code, .. } => {
                assert_eq!(message, "Video generation failed");
                assert_eq!(code, "GENERATION_ERROR");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_required_field_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/video-generation"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "gen-42",
                "duration": 30,
            })))
            .mount(&server)
            .await;

        let error = client_for(&server).generate(&request()).await.unwrap_err();
        assert!(matches!(error, GenerationError::InvalidResponse(_)));
        assert_eq!(error.user_message(), "Unable to generate video at this time.");
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let config = ClientConfig {
            mock_mode: false,
            api_base_url: "http://127.0.0.1:1".to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();

        let error = client.generate(&request()).await.unwrap_err();
        assert!(matches!(error, GenerationError::Network(_)));
        assert_eq!(error.code(), "NETWORK_ERROR");
    }
}
