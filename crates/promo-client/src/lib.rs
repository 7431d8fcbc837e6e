//! Generation transport for PromoReel.
//!
//! Two interchangeable strategies behind one capability trait:
//! - [`MockTransport`] simulates latency and stochastic failure so the UI can
//!   exercise its loading and error states without a live backend.
//! - [`ApiClient`] talks to the real video-generation API over HTTP.
//!
//! Both derive the prompt with [`promo_models::synthesize`], resolve exactly
//! once per call, and never let a raw fault escape untyped.

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod transport;
pub mod wire;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{GenerationError, GenerationResult};
pub use mock::{MockTransport, SAMPLE_THUMBNAILS, SAMPLE_VIDEOS};
pub use transport::{transport_from_config, GenerationTransport};
