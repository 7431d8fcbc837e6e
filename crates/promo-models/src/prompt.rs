//! Prompt synthesis.
//!
//! Both transport strategies derive the prompt the same way, so the result a
//! user sees always matches what was (or would have been) sent to the
//! backend. The clause order is fixed for reproducibility.

use crate::listing::TourRequest;
use crate::request::GenerationRequest;

/// Build the natural-language generation prompt for a product video.
///
/// Clause order: base, features, audience, style, closing. Optional fields
/// that are blank contribute no clause and no stray separators.
pub fn synthesize(request: &GenerationRequest) -> String {
    let mut clauses: Vec<String> = Vec::with_capacity(5);

    let tone = request.tone.trim();
    if tone.is_empty() {
        clauses.push(format!(
            "Create a {}-second marketing video for {}.",
            request.duration.as_secs(),
            request.product_name
        ));
    } else {
        clauses.push(format!(
            "Create a {}-second {} marketing video for {}.",
            request.duration.as_secs(),
            tone.to_lowercase(),
            request.product_name
        ));
    }

    let features = request.key_features.trim();
    if !features.is_empty() {
        clauses.push(format!("Highlight features: {}.", features));
    }

    let audience = request.target_audience.trim();
    if !audience.is_empty() {
        clauses.push(format!("Target audience: {}.", audience));
    }

    let style = request.video_style.trim();
    if !style.is_empty() {
        clauses.push(format!("Style: {}.", style));
    }

    clauses.push(
        "Include energetic music, dynamic visuals, and strong branding. \
         Emphasize the energy-boosting benefits."
            .to_string(),
    );

    clauses.join(" ")
}

/// Build the generation prompt for a property tour.
///
/// Same fixed-order clause scheme as [`synthesize`], fed from the listing
/// facts and the selected tour style.
pub fn synthesize_tour(request: &TourRequest) -> String {
    let listing = &request.listing;
    let mut clauses: Vec<String> = Vec::with_capacity(5);

    match request.style {
        Some(style) => clauses.push(format!(
            "Create a {}-second {} virtual tour video for the property at {}.",
            listing.duration_secs,
            style.display_name().to_lowercase(),
            listing.address
        )),
        None => clauses.push(format!(
            "Create a {}-second virtual tour video for the property at {}.",
            listing.duration_secs, listing.address
        )),
    }

    clauses.push(format!(
        "The home offers {} bedrooms, {} bathrooms and {} square feet, listed at {}.",
        listing.bedrooms, listing.bathrooms, listing.square_footage, listing.price
    ));

    let features = listing.features.trim();
    if !features.is_empty() {
        clauses.push(format!("Highlight features: {}.", features));
    }

    clauses.push(
        "Include smooth cinematic camera movement, warm natural lighting, \
         and a welcoming atmosphere."
            .to_string(),
    );

    clauses.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{ListingDetails, TourStyle};
    use crate::request::VideoDuration;

    fn full_request() -> GenerationRequest {
        GenerationRequest::new("Suplimax", "Natural caffeine, Zero sugar")
            .with_target_audience("Athletes & Fitness Enthusiasts")
            .with_tone("Energetic")
            .with_video_style("Motion Graphics")
            .with_duration(VideoDuration::Standard)
    }

    #[test]
    fn test_all_clauses_in_fixed_order() {
        let prompt = synthesize(&full_request());

        assert!(prompt.starts_with("Create a 30-second energetic marketing video for Suplimax."));
        let features = prompt.find("Highlight features:").unwrap();
        let audience = prompt.find("Target audience:").unwrap();
        let style = prompt.find("Style:").unwrap();
        let closing = prompt.find("Include energetic music").unwrap();
        assert!(features < audience && audience < style && style < closing);
    }

    #[test]
    fn test_tone_is_lowercased() {
        let prompt = synthesize(&full_request().with_tone("PROFESSIONAL"));
        assert!(prompt.contains("30-second professional marketing video"));
    }

    #[test]
    fn test_blank_optionals_produce_no_clause() {
        let prompt = synthesize(&GenerationRequest::new("Suplimax", "Electrolytes"));

        assert!(prompt.starts_with("Create a 30-second marketing video for Suplimax."));
        assert!(prompt.contains("Highlight features: Electrolytes."));
        assert!(!prompt.contains("Target audience:"));
        assert!(!prompt.contains("Style:"));
        // No double spaces from omitted clauses
        assert!(!prompt.contains("  "));
    }

    #[test]
    fn test_closing_clause_always_present() {
        let bare = synthesize(&GenerationRequest::new("X", ""));
        assert!(bare.ends_with("Emphasize the energy-boosting benefits."));
    }

    #[test]
    fn test_tour_prompt_mentions_style_and_address() {
        let request = TourRequest::new(ListingDetails::demo()).with_style(TourStyle::Luxury);
        let prompt = synthesize_tour(&request);

        assert!(prompt.contains("luxury showcase virtual tour"));
        assert!(prompt.contains("12012 Crest Ct, Beverly Hills, CA 90210"));
        assert!(prompt.contains("5 bedrooms, 6.5 bathrooms and 6100 square feet"));
    }
}
