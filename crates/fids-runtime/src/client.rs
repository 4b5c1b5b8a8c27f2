//! Feed client for the board's two JSON endpoints.
//!
//! [`FeedClient`] abstracts the transport so the poller can be driven by an
//! in-memory client in tests. [`HttpFeedClient`] talks to the real server.

use std::time::Duration;

use async_trait::async_trait;
use fids_types::{FlightPayload, FlightResponse, WeatherPayload};
use tracing::debug;

use crate::{Error, Result};

const FLIGHTS_PATH: &str = "/api/flights";
const WEATHER_PATH: &str = "/api/weather";

#[async_trait]
pub trait FeedClient: Send + Sync {
    async fn fetch_flights(&self) -> Result<FlightResponse>;

    /// The payload may lack fields; the store decides whether it is usable
    async fn fetch_weather(&self) -> Result<WeatherPayload>;
}

/// HTTP client with a reusable connection pool
pub struct HttpFeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpFeedClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<(reqwest::StatusCode, String)> {
        let response = self.http.get(self.url(path)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(path, status = status.as_u16(), bytes = body.len(), "feed fetched");
        Ok((status, body))
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch_flights(&self) -> Result<FlightResponse> {
        let (status, body) = self.get(FLIGHTS_PATH).await?;
        flight_response(status.as_u16(), status.is_success(), &body)
    }

    async fn fetch_weather(&self) -> Result<WeatherPayload> {
        let (status, body) = self.get(WEATHER_PATH).await?;
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        Ok(WeatherPayload::from_json(&body)?)
    }
}

/// Interpret a flights body. Error statuses still carry an override
/// (`{"error": ...}` with a 500); anything else from them is a failure.
fn flight_response(code: u16, success: bool, body: &str) -> Result<FlightResponse> {
    if success {
        return Ok(FlightPayload::from_json(body)?.into_response());
    }

    match FlightPayload::from_json(body).map(FlightPayload::into_response) {
        Ok(response @ FlightResponse::Override(_)) => Ok(response),
        _ => Err(Error::Status(code)),
    }
}
