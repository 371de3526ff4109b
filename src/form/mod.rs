//! Checkout form handling: discovery and autofill.
//!
//! This module provides:
//! - The field vocabulary checkout themes use for shipping addresses
//! - One-shot form discovery over a page's HTML
//! - The fill engine that writes a resolved address through a [`FormSink`]

mod autofill;
mod discovery;
mod fields;

// Re-export public API
pub use autofill::{fill, FieldNotification, FillReport, FormSink, InMemoryForm, SinkEvent};
pub use discovery::{discover, DiscoveredForm, FieldTarget, MatchKind};
pub use fields::{LogicalField, FORM_SELECTORS, FULL_ADDRESS_SELECTORS};
