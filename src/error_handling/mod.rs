//! Error handling and retry configuration.
//!
//! This module provides:
//! - Error type definitions for every stage of the pipeline
//! - Categorization of raw HTTP client errors into provider failure modes
//! - Retry strategy configuration for the widget's detection runs
//!
//! Error types are split by pipeline stage:
//! - **Geolocation**: the position source failed or timed out
//! - **Provider**: a single reverse-geocoding hop failed
//! - **Resolve**: the whole chain failed or the input was invalid

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_provider_error, get_widget_retry_strategy};
pub use types::{GeolocationError, InitializationError, ProviderError, ResolveError};
