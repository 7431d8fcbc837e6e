//! Filename utilities for the client-side download action.

use chrono::{DateTime, Utc};

/// Reduce a display name to a filename-safe form.
///
/// Every character that is not ASCII alphanumeric becomes a hyphen, so
/// addresses and product names with punctuation, spaces or unicode survive
/// as plain `[A-Za-z0-9-]` strings.
pub fn sanitize_filename_part(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Derive the download filename for a generated video.
///
/// The timestamp suffix keeps repeated downloads of the same subject from
/// colliding on disk.
pub fn download_filename(subject: &str, at: DateTime<Utc>) -> String {
    format!("{}-{}.mp4", sanitize_filename_part(subject), at.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sanitize_address() {
        let sanitized = sanitize_filename_part("12012 Crest Ct, Beverly Hills, CA 90210");
        assert_eq!(sanitized, "12012-Crest-Ct--Beverly-Hills--CA-90210");
        assert!(sanitized.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }

    #[test]
    fn test_sanitize_keeps_alphanumerics() {
        assert_eq!(sanitize_filename_part("Suplimax"), "Suplimax");
        assert_eq!(sanitize_filename_part("aب c"), "a--c");
    }

    #[test]
    fn test_download_filename() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let name = download_filename("Suplimax Energy!", at);
        assert_eq!(name, format!("Suplimax-Energy--{}.mp4", at.timestamp()));
    }
}
