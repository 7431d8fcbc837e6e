//! The generation capability trait and strategy selection.

use std::sync::Arc;

use async_trait::async_trait;

use promo_models::{GenerationRequest, GenerationResponse};

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::GenerationResult;
use crate::mock::MockTransport;

/// Capability that executes one generation attempt.
///
/// Exactly one resolution per call: a full response or a typed error, never
/// both, never a partial result. There is no retry; the caller re-invokes
/// explicitly for another attempt.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
        -> GenerationResult<GenerationResponse>;
}

/// Build the transport the configuration asks for.
pub fn transport_from_config(
    config: &ClientConfig,
) -> GenerationResult<Arc<dyn GenerationTransport>> {
    if config.mock_mode {
        Ok(Arc::new(MockTransport::new(config.clone())))
    } else {
        Ok(Arc::new(ApiClient::new(config)?))
    }
}
