//! HTTP client initialization.
//!
//! This module provides the shared HTTP client used by every geocoding
//! provider adapter.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{DEFAULT_USER_AGENT, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - The service's own User-Agent header (public geocoding instances
///   require identifiable clients)
/// - A TCP connect timeout
/// - Rustls TLS backend (no native TLS)
///
/// No overall request timeout is set here: each provider applies its own
/// per-request deadline, since the primary and secondary providers are
/// allowed different response budgets.
///
/// # Returns
///
/// A configured HTTP client shared across provider adapters.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
