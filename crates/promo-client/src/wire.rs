//! Wire schema for the real video-generation API.
//!
//! The backend speaks snake_case JSON; this module is the only place the
//! wire shape may diverge from the canonical model. Responses missing
//! required fields fail deserialization instead of producing half-filled
//! values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use promo_models::{synthesize, GenerationId, GenerationRequest, GenerationResponse};

use crate::error::GenerationError;

/// Request body for `POST /api/video-generation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireGenerationRequest {
    pub prompt: String,
    pub duration: u32,
    pub style: String,
    pub resolution: String,
    pub format: String,
}

impl WireGenerationRequest {
    /// Build the body for a request, embedding the synthesized prompt.
    pub fn from_request(request: &GenerationRequest, resolution: &str) -> Self {
        Self {
            prompt: synthesize(request),
            duration: request.duration.as_secs(),
            style: request.video_style.clone(),
            resolution: resolution.to_string(),
            format: "mp4".to_string(),
        }
    }
}

/// Success body returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct WireGenerationResponse {
    pub id: String,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub duration: u32,
    pub resolution: String,
    pub format: String,
    pub file_size: String,
    pub created_at: DateTime<Utc>,
}

impl WireGenerationResponse {
    /// Translate the wire shape into the canonical response, attaching the
    /// locally synthesized prompt.
    pub fn into_response(self, prompt: String) -> GenerationResponse {
        GenerationResponse {
            id: GenerationId::from_string(self.id),
            video_url: self.video_url,
            thumbnail_url: self.thumbnail_url,
            duration_secs: self.duration,
            resolution: self.resolution,
            format: self.format,
            file_size: self.file_size,
            generated_at: self.created_at,
            prompt,
        }
    }
}

/// Error body the backend may attach to non-2xx responses. All fields are
/// optional; missing ones fall back to generic values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl WireErrorBody {
    /// Map a failure status plus whatever body arrived into a typed error.
    pub fn into_error(self, status: u16) -> GenerationError {
        GenerationError::Api {
            status,
            message: self
                .message
                .unwrap_or_else(|| "Video generation failed".to_string()),
            code: self.code.unwrap_or_else(|| "GENERATION_ERROR".to_string()),
            details: self.details,
        }
    }
}
