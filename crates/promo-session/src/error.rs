//! Session error types.

use thiserror::Error;

use promo_models::RequestValidationError;

/// Why a submission was not started.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// An attempt is already outstanding; the submit control is disabled
    /// while in flight.
    #[error("A generation attempt is already in flight")]
    Busy,

    /// Input failed synchronous validation; the transport was never called.
    #[error(transparent)]
    Validation(#[from] RequestValidationError),
}
