//! Download-link construction.
//!
//! The library's responsibility ends at producing the URL/filename pair;
//! actually triggering a client-side save is the rendering collaborator's
//! concern.

use promo_models::{download_filename, GenerationResponse};

/// A transient link for saving a generated video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub url: String,
    pub filename: String,
}

impl DownloadLink {
    /// Build the download link for a response, deriving the filename from
    /// the subject (product name or property address).
    pub fn for_video(subject: &str, response: &GenerationResponse) -> Self {
        Self {
            url: response.video_url.clone(),
            filename: download_filename(subject, response.generated_at),
        }
    }
}
