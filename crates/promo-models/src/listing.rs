//! Property-tour flow: listing details and tour styles.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::request::RequestValidationError;

/// Available tour styles for listing videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TourStyle {
    /// Elegant cinematography highlighting premium finishes
    Luxury,
    /// Warm tour focusing on livability and comfort
    Family,
    /// Clean, architectural focus on design and space
    Modern,
    /// Hollywood-style production with dramatic lighting
    Cinematic,
}

impl TourStyle {
    /// All selectable tour styles, in menu order.
    pub const ALL: &'static [TourStyle] = &[
        TourStyle::Luxury,
        TourStyle::Family,
        TourStyle::Modern,
        TourStyle::Cinematic,
    ];

    /// Human-readable style name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TourStyle::Luxury => "Luxury Showcase",
            TourStyle::Family => "Family-Friendly",
            TourStyle::Modern => "Modern Minimalist",
            TourStyle::Cinematic => "Cinematic Drama",
        }
    }

    /// Short description shown next to the style selector.
    pub fn description(&self) -> &'static str {
        match self {
            TourStyle::Luxury => {
                "Elegant cinematography highlighting premium features and finishes"
            }
            TourStyle::Family => "Warm, inviting tour focusing on livability and comfort",
            TourStyle::Modern => "Clean, architectural focus on design and space",
            TourStyle::Cinematic => "Hollywood-style production with dramatic lighting and angles",
        }
    }

    /// Returns the style name as used in identifiers and filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            TourStyle::Luxury => "luxury",
            TourStyle::Family => "family",
            TourStyle::Modern => "modern",
            TourStyle::Cinematic => "cinematic",
        }
    }
}

impl fmt::Display for TourStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TourStyle {
    type Err = TourStyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "luxury" => Ok(TourStyle::Luxury),
            "family" => Ok(TourStyle::Family),
            "modern" => Ok(TourStyle::Modern),
            "cinematic" => Ok(TourStyle::Cinematic),
            _ => Err(TourStyleParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown tour style: {0}")]
pub struct TourStyleParseError(String);

/// Property facts entered in the listing form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListingDetails {
    /// Street address
    pub address: String,

    /// Asking price, free-form ("$10,183,985")
    pub price: String,

    /// Bedroom count
    pub bedrooms: u32,

    /// Bathroom count (half baths allowed)
    pub bathrooms: f32,

    /// Interior square footage
    pub square_footage: u32,

    /// Key features to highlight (required, non-blank)
    pub features: String,

    /// Tour length in seconds (free integer in this flow)
    pub duration_secs: u32,
}

impl ListingDetails {
    /// Demo pre-fill used by the listing form.
    pub fn demo() -> Self {
        Self {
            address: "12012 Crest Ct, Beverly Hills, CA 90210".to_string(),
            price: "$10,183,985".to_string(),
            bedrooms: 5,
            bathrooms: 6.5,
            square_footage: 6100,
            features: "Luxury estate, three-car garage, landscaped grounds, \
                       elegant entrance with grand staircase, modern design, \
                       prime Beverly Hills location"
                .to_string(),
            duration_secs: 165,
        }
    }
}

/// A request for a virtual property tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TourRequest {
    pub listing: ListingDetails,

    /// Selected tour style. Submission requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TourStyle>,
}

impl TourRequest {
    /// Create a tour request with no style selected yet.
    pub fn new(listing: ListingDetails) -> Self {
        Self {
            listing,
            style: None,
        }
    }

    /// Replace the selected style, preserving the listing.
    pub fn with_style(mut self, style: TourStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Check the request is submittable: a style must be selected and the
    /// listing must carry non-blank features.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if self.style.is_none() {
            return Err(RequestValidationError::MissingTourStyle);
        }
        if self.listing.features.trim().is_empty() {
            return Err(RequestValidationError::MissingKeyFeatures);
        }
        Ok(())
    }
}
