//! Generation request for the product-video flow.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported clip length for product videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum VideoDuration {
    /// Short teaser (15 seconds)
    Short,
    /// Standard spot (30 seconds)
    #[default]
    Standard,
    /// Extended spot (60 seconds)
    Extended,
}

impl VideoDuration {
    /// All selectable durations, in menu order.
    pub const ALL: &'static [VideoDuration] = &[
        VideoDuration::Short,
        VideoDuration::Standard,
        VideoDuration::Extended,
    ];

    /// Duration in whole seconds.
    pub fn as_secs(&self) -> u32 {
        match self {
            VideoDuration::Short => 15,
            VideoDuration::Standard => 30,
            VideoDuration::Extended => 60,
        }
    }
}

impl fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_secs())
    }
}

impl From<VideoDuration> for u32 {
    fn from(d: VideoDuration) -> Self {
        d.as_secs()
    }
}

impl TryFrom<u32> for VideoDuration {
    type Error = DurationParseError;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        match secs {
            15 => Ok(VideoDuration::Short),
            30 => Ok(VideoDuration::Standard),
            60 => Ok(VideoDuration::Extended),
            other => Err(DurationParseError(other)),
        }
    }
}

impl FromStr for VideoDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs: u32 = s.trim().parse().map_err(|_| DurationParseError(0))?;
        VideoDuration::try_from(secs)
    }
}

#[derive(Debug, Error)]
#[error("Unsupported video duration: {0} seconds (expected 15, 30 or 60)")]
pub struct DurationParseError(pub u32);

/// User-supplied description of the desired product video.
///
/// Only `key_features` is required; every other field may stay empty and is
/// simply omitted from the synthesized prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// Product or subject name
    pub product_name: String,

    /// Key features to highlight (required, non-blank)
    pub key_features: String,

    /// Target audience
    #[serde(default)]
    pub target_audience: String,

    /// Desired tone (lowercased when embedded in the prompt)
    #[serde(default)]
    pub tone: String,

    /// Visual style
    #[serde(default)]
    pub video_style: String,

    /// Clip length
    #[serde(default)]
    pub duration: VideoDuration,
}

impl GenerationRequest {
    /// Create a request with the given product name and features.
    pub fn new(product_name: impl Into<String>, key_features: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            key_features: key_features.into(),
            target_audience: String::new(),
            tone: String::new(),
            video_style: String::new(),
            duration: VideoDuration::default(),
        }
    }

    /// Demo pre-fill used by the form before the user types anything.
    pub fn demo() -> Self {
        Self::new("Suplimax", "")
    }

    /// Replace the product name, preserving the other fields.
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Replace the key features, preserving the other fields.
    pub fn with_key_features(mut self, features: impl Into<String>) -> Self {
        self.key_features = features.into();
        self
    }

    /// Replace the target audience, preserving the other fields.
    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = audience.into();
        self
    }

    /// Replace the tone, preserving the other fields.
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    /// Replace the visual style, preserving the other fields.
    pub fn with_video_style(mut self, style: impl Into<String>) -> Self {
        self.video_style = style.into();
        self
    }

    /// Replace the duration, preserving the other fields.
    pub fn with_duration(mut self, duration: VideoDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Check the request is submittable. Key features must be non-blank.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if self.key_features.trim().is_empty() {
            return Err(RequestValidationError::MissingKeyFeatures);
        }
        Ok(())
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::demo()
    }
}

/// Local, synchronous validation failures. These never reach the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    #[error("Please enter key product features")]
    MissingKeyFeatures,

    #[error("Please select a tour style")]
    MissingTourStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_round_trip() {
        assert_eq!(VideoDuration::try_from(15).unwrap(), VideoDuration::Short);
        assert_eq!(u32::from(VideoDuration::Extended), 60);
        assert!(VideoDuration::try_from(45).is_err());
    }

    #[test]
    fn test_duration_serializes_as_integer() {
        let json = serde_json::to_string(&VideoDuration::Standard).unwrap();
        assert_eq!(json, "30");
        let back: VideoDuration = serde_json::from_str("60").unwrap();
        assert_eq!(back, VideoDuration::Extended);
    }

    #[test]
    fn test_record_update_preserves_other_fields() {
        let request = GenerationRequest::demo()
            .with_key_features("Zero sugar, B-vitamins")
            .with_tone("Energetic");

        assert_eq!(request.product_name, "Suplimax");
        assert_eq!(request.key_features, "Zero sugar, B-vitamins");
        assert_eq!(request.tone, "Energetic");
        assert_eq!(request.duration, VideoDuration::Standard);
    }

    #[test]
    fn test_validate_requires_key_features() {
        let blank = GenerationRequest::demo();
        assert_eq!(
            blank.validate(),
            Err(RequestValidationError::MissingKeyFeatures)
        );

        let whitespace = blank.clone().with_key_features("   ");
        assert!(whitespace.validate().is_err());

        let filled = whitespace.with_key_features("Natural caffeine");
        assert!(filled.validate().is_ok());
    }
}
