//! Canonical generation result.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a generated video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct GenerationId(pub String);

impl GenerationId {
    /// Generate a new random identifier.
    pub fn new() -> Self {
        Self(format!("video_{}", Uuid::new_v4().simple()))
    }

    /// Create from an existing string (e.g. a backend-assigned id).
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GenerationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A successful generation result.
///
/// Created only when the transport resolves successfully, and immutable after
/// creation. Held by the session until superseded by the next attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationResponse {
    /// Opaque identifier assigned to this video
    pub id: GenerationId,

    /// URI of the playable asset
    pub video_url: String,

    /// Preview image URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Clip length in seconds (request echo or backend-reported actual)
    pub duration_secs: u32,

    /// Frame size, e.g. "1920x1080"
    pub resolution: String,

    /// Container format, e.g. "MP4"
    pub format: String,

    /// Human-readable size, e.g. "17MB"
    pub file_size: String,

    /// When the video was generated
    pub generated_at: DateTime<Utc>,

    /// The synthesized prompt that produced this video
    pub prompt: String,
}
