//! The widget's client for the resolve API.

use std::sync::Arc;

use futures::future::BoxFuture;
use serde::Deserialize;
use url::Url;

use crate::error_handling::ResolveError;
use crate::geocode::{Coordinates, ResolvedAddress};

/// Something that can turn coordinates into a resolved address.
///
/// The widget controller only knows this trait; production wires it to
/// [`HttpResolverClient`], tests to scripted stubs.
pub trait ResolverApi: Send + Sync {
    /// Resolves `coordinates` into an address localized to `language`.
    fn resolve<'a>(
        &'a self,
        coordinates: Coordinates,
        language: &'a str,
    ) -> BoxFuture<'a, Result<ResolvedAddress, ResolveError>>;
}

/// [`ResolverApi`] implementation over the HTTP resolve endpoint.
pub struct HttpResolverClient {
    client: Arc<reqwest::Client>,
    resolve_url: String,
}

impl HttpResolverClient {
    /// Creates a client for the resolver service at `base_url`.
    pub fn new(client: Arc<reqwest::Client>, base_url: &str) -> Result<Self, url::ParseError> {
        Url::parse(base_url)?;
        Ok(Self {
            client,
            resolve_url: format!("{}/resolve", base_url.trim_end_matches('/')),
        })
    }
}

/// Success envelope of the resolve endpoint; failure bodies carry no address
/// and deserialize with `address: None`.
#[derive(Deserialize)]
struct ResolveEnvelope {
    success: bool,
    #[serde(default)]
    address: Option<ResolvedAddress>,
}

impl ResolverApi for HttpResolverClient {
    fn resolve<'a>(
        &'a self,
        coordinates: Coordinates,
        language: &'a str,
    ) -> BoxFuture<'a, Result<ResolvedAddress, ResolveError>> {
        Box::pin(async move {
            let body = serde_json::json!({
                "lat": coordinates.lat,
                "lng": coordinates.lng,
                "language": language,
            });

            let failed = || ResolveError::ResolutionFailed {
                lat: coordinates.lat,
                lng: coordinates.lng,
            };

            let response = self
                .client
                .post(&self.resolve_url)
                .json(&body)
                .send()
                .await
                .map_err(|e| {
                    log::warn!("resolve request failed: {}", e);
                    failed()
                })?;

            if response.status() == reqwest::StatusCode::BAD_REQUEST {
                return Err(ResolveError::InvalidCoordinates);
            }

            let envelope: ResolveEnvelope = response.json().await.map_err(|e| {
                log::warn!("resolve response decode failed: {}", e);
                failed()
            })?;

            match envelope.address {
                Some(address) if envelope.success => Ok(address),
                _ => Err(failed()),
            }
        })
    }
}
