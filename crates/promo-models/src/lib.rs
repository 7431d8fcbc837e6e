//! Shared data models for the PromoReel video generator.
//!
//! This crate provides Serde-serializable types for:
//! - Generation requests (product flow and property-tour flow)
//! - Generation responses and identifiers
//! - Prompt synthesis
//! - Filename utilities for the download action

pub mod listing;
pub mod prompt;
pub mod request;
pub mod response;
pub mod utils;

// Re-export common types
pub use listing::{ListingDetails, TourRequest, TourStyle, TourStyleParseError};
pub use prompt::{synthesize, synthesize_tour};
pub use request::{DurationParseError, GenerationRequest, RequestValidationError, VideoDuration};
pub use response::{GenerationId, GenerationResponse};
pub use utils::{download_filename, sanitize_filename_part};
