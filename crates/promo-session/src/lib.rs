//! Generation session controller for PromoReel.
//!
//! A session is one generation attempt's lifecycle: validate the request,
//! publish progress, invoke the transport once, and publish the terminal
//! outcome. State is owned by a single controller and published over a
//! `tokio::sync::watch` channel for a rendering collaborator to consume.

pub mod controller;
pub mod download;
pub mod error;
pub mod progress;
pub mod state;
pub mod tour;

pub use controller::{ProgressStyle, SessionController};
pub use download::DownloadLink;
pub use error::SubmitError;
pub use state::{SessionFailure, SessionState};
pub use tour::TourSession;
