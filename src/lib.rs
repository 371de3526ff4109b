//! address_autofill library: coordinate resolution and checkout form autofill
//!
//! This library turns device coordinates into structured shipping addresses and
//! fills checkout forms with them. It provides:
//!
//! - A reverse-geocoding provider chain that queries Nominatim first and falls
//!   back to geocode.maps.co ([`geocode`])
//! - Checkout form discovery and field filling ([`form`])
//! - The embeddable widget flow tying geolocation, resolution, and filling
//!   together ([`widget`])
//! - An HTTP server exposing the resolver as `POST /resolve` ([`server`])
//!
//! # Example
//!
//! ```no_run
//! use address_autofill::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     host: "0.0.0.0".to_string(),
//!     port: 3000,
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod form;
pub mod geocode;
pub mod initialization;
pub mod server;
pub mod widget;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use geocode::{AddressComponents, AddressSource, Coordinates, ResolvedAddress, ResolverChain};
pub use server::run_server;
