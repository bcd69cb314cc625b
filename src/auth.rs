//! Shared-secret authorization, decoupled from any request shape.

use crate::error::ApiError;

/// Check a supplied token against the configured shared secret.
///
/// Called at the boundary of every protected operation, before any store
/// access. A missing or mismatched token fails the whole request.
pub fn require_token(provided: Option<&str>, expected: &str) -> Result<(), ApiError> {
    match provided {
        Some(token) if token == expected => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}
