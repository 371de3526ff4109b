//! Integration tests for the reverse-geocoding provider chain.
//!
//! These tests verify the resolver against mock provider instances:
//! - Component mapping from raw Nominatim responses
//! - Coordinate clamping as seen on the wire
//! - Fallback to the secondary provider when the primary fails
//! - Exhaustion behavior when every provider fails
//!
//! They do not make real network requests, ensuring tests are fast and reliable.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use address_autofill::error_handling::ResolveError;
use address_autofill::geocode::{MapsCoProvider, NominatimProvider, ResolverChain};
use address_autofill::{AddressSource, Coordinates};

/// A raw Nominatim response for a Riyadh street address.
///
/// Carries both `city` and `town` so tests can observe candidate priority.
fn riyadh_payload() -> serde_json::Value {
    json!({
        "display_name": "King Fahd Road, Al Olaya, Riyadh 12214, Saudi Arabia",
        "address": {
            "road": "King Fahd Road",
            "house_number": "7253",
            "city": "Riyadh",
            "town": "Al Olaya",
            "state": "Riyadh Province",
            "postcode": "12214",
            "country": "Saudi Arabia",
            "country_code": "sa",
            "neighbourhood": "Al Olaya"
        }
    })
}

fn shared_client() -> Arc<reqwest::Client> {
    Arc::new(reqwest::Client::new())
}

/// Builds a chain with only a Nominatim hop pointed at `server`.
fn primary_only(server: &MockServer) -> ResolverChain {
    let nominatim = NominatimProvider::new(shared_client(), &server.uri(), None)
        .expect("mock server URI should parse");
    ResolverChain::new(vec![Box::new(nominatim)])
}

/// Builds the full two-hop chain pointed at two mock servers.
fn primary_with_fallback(primary: &MockServer, secondary: &MockServer) -> ResolverChain {
    let nominatim = NominatimProvider::new(shared_client(), &primary.uri(), None)
        .expect("mock server URI should parse");
    let maps_co = MapsCoProvider::new(
        shared_client(),
        &secondary.uri(),
        "test-api-key".to_string(),
    )
    .expect("mock server URI should parse");
    ResolverChain::new(vec![Box::new(nominatim), Box::new(maps_co)])
}

/// The primary response maps onto every structured component, with the
/// documented candidate priorities.
#[tokio::test]
async fn test_primary_success_maps_all_components() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .and(query_param("zoom", "18"))
        .and(query_param("addressdetails", "1"))
        .and(query_param("accept-language", "ar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(riyadh_payload()))
        .mount(&server)
        .await;

    let chain = primary_only(&server);
    let address = chain
        .resolve(Coordinates::new(24.7136, 46.6753), "ar")
        .await
        .expect("resolve should succeed");

    assert_eq!(address.source, AddressSource::Primary);
    assert_eq!(
        address.formatted,
        "King Fahd Road, Al Olaya, Riyadh 12214, Saudi Arabia"
    );
    assert_eq!(address.components.address1, "King Fahd Road");
    assert_eq!(address.components.address2, "7253");
    // city outranks town
    assert_eq!(address.components.city, "Riyadh");
    assert_eq!(address.components.state, "Riyadh Province");
    assert_eq!(address.components.zip, "12214");
    assert_eq!(address.components.country, "Saudi Arabia");
    assert_eq!(address.components.country_code, "SA");
    assert_eq!(address.components.neighborhood, "Al Olaya");
    assert_eq!(address.coordinates, Coordinates::new(24.7136, 46.6753));
}

/// Out-of-range coordinates must be clamped before they reach the wire.
/// Only the clamped pair is mocked; an unclamped request would miss the
/// mock and fail the resolve.
#[tokio::test]
async fn test_out_of_range_coordinates_are_clamped_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "90"))
        .and(query_param("lon", "-180"))
        .respond_with(ResponseTemplate::new(200).set_body_json(riyadh_payload()))
        .mount(&server)
        .await;

    let chain = primary_only(&server);
    let address = chain
        .resolve(Coordinates::new(999.0, -400.0), "ar")
        .await
        .expect("resolve should succeed with clamped coordinates");

    assert_eq!(address.coordinates, Coordinates::new(90.0, -180.0));
}

/// A primary 5xx hands the request to the secondary provider, which
/// authenticates with its API key and answers with its narrower mapping.
#[tokio::test]
async fn test_secondary_answers_when_primary_errors() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("api_key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "display_name": "King Fahd Road, Riyadh, Saudi Arabia",
            "address": {
                "road": "King Fahd Road",
                "town": "Riyadh",
                "state": "Riyadh Province",
                "postcode": "12214",
                "country": "Saudi Arabia",
                "country_code": "sa"
            }
        })))
        .mount(&secondary)
        .await;

    let chain = primary_with_fallback(&primary, &secondary);
    let address = chain
        .resolve(Coordinates::new(24.7136, 46.6753), "ar")
        .await
        .expect("fallback should answer");

    assert_eq!(address.source, AddressSource::Secondary);
    assert_eq!(address.components.address1, "King Fahd Road");
    assert_eq!(address.components.city, "Riyadh");
    assert_eq!(address.components.country_code, "SA");
    // The fallback service carries fewer component keys; these stay empty
    assert_eq!(address.components.address2, "");
    assert_eq!(address.components.neighborhood, "");
}

/// Nominatim reports unresolvable coordinates as a 200 without a
/// display_name. That is not an address, so the chain falls through.
#[tokio::test]
async fn test_missing_display_name_triggers_fallback() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Unable to geocode"})),
        )
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "display_name": "Somewhere",
            "address": {"road": "Somewhere Road"}
        })))
        .mount(&secondary)
        .await;

    let chain = primary_with_fallback(&primary, &secondary);
    let address = chain
        .resolve(Coordinates::new(24.7136, 46.6753), "ar")
        .await
        .expect("fallback should answer");

    assert_eq!(address.source, AddressSource::Secondary);
    assert_eq!(address.formatted, "Somewhere");
    assert_eq!(address.components.address1, "Somewhere Road");
}

/// The secondary provider is never consulted while the primary answers.
#[tokio::test]
async fn test_secondary_not_consulted_when_primary_answers() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(riyadh_payload()))
        .mount(&primary)
        .await;
    // Verified on drop: zero requests may reach the secondary
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(riyadh_payload()))
        .expect(0)
        .mount(&secondary)
        .await;

    let chain = primary_with_fallback(&primary, &secondary);
    let address = chain
        .resolve(Coordinates::new(24.7136, 46.6753), "ar")
        .await
        .expect("primary should answer");

    assert_eq!(address.source, AddressSource::Primary);
}

/// When every hop fails the error echoes the coordinates exactly as the
/// caller supplied them, so manual-entry flows can report what was tried.
#[tokio::test]
async fn test_exhausted_chain_reports_original_coordinates() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&secondary)
        .await;

    let chain = primary_with_fallback(&primary, &secondary);
    let result = chain.resolve(Coordinates::new(999.0, -400.0), "ar").await;

    assert_eq!(
        result,
        Err(ResolveError::ResolutionFailed {
            lat: 999.0,
            lng: -400.0
        })
    );
}
