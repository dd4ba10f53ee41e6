use crate::models::Coordinates;
use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the geocoding service
///
/// Only transport failures surface as errors; empty result sets, non-2xx
/// statuses, and malformed payloads all settle as `NotFound`.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Outcome of a geocoding lookup
///
/// `NotFound` is an answer, not an error: the caller shows "cannot place
/// this job on the map" instead of a placeholder coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeocodeOutcome {
    Found(Coordinates),
    NotFound,
}

/// Row returned by the Nominatim search API
///
/// Coordinates arrive as JSON strings, not numbers.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Gateway to the free-text geocoding service
///
/// Settled outcomes (found and not-found) are memoized in a bounded
/// in-process cache so repeated map views of the same location string do
/// not re-hit the upstream service. Transport failures are never cached;
/// each uncached query issues exactly one request, with no retry.
pub struct GeocodeClient {
    endpoint: String,
    user_agent: String,
    client: Client,
    cache: Cache<String, GeocodeOutcome>,
}

impl GeocodeClient {
    pub fn new(endpoint: String, user_agent: String, cache_size: u64, cache_ttl_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let cache = Cache::builder()
            .max_capacity(cache_size)
            .time_to_live(Duration::from_secs(cache_ttl_secs))
            .build();

        Self {
            endpoint,
            user_agent,
            client,
            cache,
        }
    }

    /// Resolve a free-text location string to coordinates
    pub async fn geocode(&self, location: &str) -> Result<GeocodeOutcome, GeocodeError> {
        let key = location.trim().to_lowercase();

        if let Some(outcome) = self.cache.get(&key).await {
            tracing::trace!("Geocode cache hit: {}", key);
            return Ok(outcome);
        }

        let outcome = self.lookup(location).await?;
        self.cache.insert(key, outcome).await;

        Ok(outcome)
    }

    async fn lookup(&self, location: &str) -> Result<GeocodeOutcome, GeocodeError> {
        let url = format!(
            "{}/search?format=json&q={}&limit=1",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(location)
        );

        tracing::debug!("Geocoding location: {}", location);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Geocoding service returned {}", response.status());
            return Ok(GeocodeOutcome::NotFound);
        }

        let places: Vec<NominatimPlace> = match response.json().await {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!("Malformed geocoding payload: {}", e);
                return Ok(GeocodeOutcome::NotFound);
            }
        };

        let Some(place) = places.first() else {
            tracing::debug!("No results found for location: {}", location);
            return Ok(GeocodeOutcome::NotFound);
        };

        match (place.lat.parse::<f64>(), place.lon.parse::<f64>()) {
            (Ok(latitude), Ok(longitude)) => Ok(GeocodeOutcome::Found(Coordinates {
                latitude,
                longitude,
            })),
            _ => {
                tracing::warn!("Unparsable coordinates for location: {}", location);
                Ok(GeocodeOutcome::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_client(endpoint: String) -> GeocodeClient {
        GeocodeClient::new(endpoint, "JobPortalApp/1.0".to_string(), 100, 300)
    }

    #[tokio::test]
    async fn test_geocode_returns_first_match() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("format".into(), "json".into()),
                mockito::Matcher::UrlEncoded("q".into(), "Connaught Place, Delhi".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "1".into()),
            ]))
            .match_header("user-agent", "JobPortalApp/1.0")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"lat": "28.6315", "lon": "77.2167", "display_name": "Connaught Place"}]"#)
            .create_async()
            .await;

        let client = create_client(server.url());
        let outcome = client.geocode("Connaught Place, Delhi").await.unwrap();

        match outcome {
            GeocodeOutcome::Found(coords) => {
                assert!((coords.latitude - 28.6315).abs() < 1e-9);
                assert!((coords.longitude - 77.2167).abs() < 1e-9);
            }
            GeocodeOutcome::NotFound => panic!("expected a match"),
        }
    }

    #[tokio::test]
    async fn test_geocode_empty_results_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = create_client(server.url());
        assert_eq!(
            client.geocode("nowhere in particular").await.unwrap(),
            GeocodeOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_geocode_upstream_error_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .with_status(502)
            .create_async()
            .await;

        let client = create_client(server.url());
        assert_eq!(
            client.geocode("Delhi").await.unwrap(),
            GeocodeOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_geocode_malformed_payload_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"unexpected": true}"#)
            .create_async()
            .await;

        let client = create_client(server.url());
        assert_eq!(
            client.geocode("Delhi").await.unwrap(),
            GeocodeOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_geocode_unparsable_coordinates_are_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"lat": "north-ish", "lon": "77.2167"}]"#)
            .create_async()
            .await;

        let client = create_client(server.url());
        assert_eq!(
            client.geocode("Delhi").await.unwrap(),
            GeocodeOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_geocode_transport_failure_is_an_error() {
        // Nothing listens on this port
        let client = create_client("http://127.0.0.1:9".to_string());
        assert!(client.geocode("Delhi").await.is_err());
    }

    #[tokio::test]
    async fn test_geocode_caches_settled_outcomes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"lat": "28.6315", "lon": "77.2167"}]"#)
            .expect(1)
            .create_async()
            .await;

        let client = create_client(server.url());
        let first = client.geocode("Connaught Place").await.unwrap();
        // Same query normalized differently still hits the cache
        let second = client.geocode("  connaught place  ").await.unwrap();

        mock.assert_async().await;
        assert_eq!(first, second);
    }
}
