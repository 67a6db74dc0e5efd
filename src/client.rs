//! Blocking HTTP client for the Alpha Vantage query endpoint.
//!
//! Every operation issues a single `GET` against [`QUERY_URL`] and fully
//! decodes the response before returning; there are no retries, no caching
//! and no internal state beyond the API key. The upstream signals failure
//! both with a non-200 status and with a JSON `{"Error Message": ...}`
//! payload delivered under HTTP 200; both are checked, in that order,
//! before any tabular decoding is attempted. Decoding an error payload as
//! CSV would otherwise fail with a confusing column error instead of the
//! real message.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decode;
use crate::models::{DailyAdjustedParams, DailyParams, DataType, IntradayParams, Ohlc};
use crate::{Result, VantageError};

/// Default Alpha Vantage query endpoint.
pub const QUERY_URL: &str = "https://www.alphavantage.co/query";

/// Shape of the upstream's application-level error payload.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    #[serde(rename = "Error Message", default)]
    message: String,
}

/// Alpha Vantage API client.
///
/// Holds the API key and a reusable transport handle. Cheap to clone and
/// safe to share across threads issuing independent calls; timeouts belong
/// on the transport handle (see [`Client::with_http_client`]) and surface
/// as [`VantageError::Transport`].
#[derive(Debug, Clone)]
pub struct Client {
    api_key: String,
    query_url: String,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Creates a client with a default transport handle.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Transport`] if the underlying HTTP client
    /// cannot be constructed (e.g. the TLS backend fails to initialize).
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("vantage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(VantageError::Transport)?;
        Ok(Self::with_http_client(http, api_key))
    }

    /// Creates a client around a caller-configured transport handle
    /// (custom timeouts, proxies, TLS settings).
    pub fn with_http_client(http: reqwest::blocking::Client, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            query_url: QUERY_URL.to_string(),
            http,
        }
    }

    /// Overrides the query endpoint, e.g. to point at a stub server.
    pub fn with_query_url(mut self, query_url: impl Into<String>) -> Self {
        self.query_url = query_url.into();
        self
    }

    /// Fetches intraday OHLCV bars (`TIME_SERIES_INTRADAY`).
    ///
    /// The `time` field of returned rows is `YYYY-MM-DD HH:MM:SS`.
    pub fn time_series_intraday(&self, params: &IntradayParams) -> Result<Vec<Ohlc>> {
        let mut params = params.clone();
        params.datatype = Some(DataType::Csv);
        let body = self.get("TIME_SERIES_INTRADAY", &params)?;
        decode::decode_ohlc(&body)
    }

    /// Fetches daily OHLCV bars (`TIME_SERIES_DAILY`).
    ///
    /// The `time` field of returned rows is `YYYY-MM-DD`.
    pub fn time_series_daily(&self, params: &DailyParams) -> Result<Vec<Ohlc>> {
        let mut params = params.clone();
        params.datatype = Some(DataType::Csv);
        let body = self.get("TIME_SERIES_DAILY", &params)?;
        decode::decode_ohlc(&body)
    }

    /// Fetches daily OHLCV bars adjusted for splits and dividends
    /// (`TIME_SERIES_DAILY_ADJUSTED`).
    ///
    /// The `time` field of returned rows is `YYYY-MM-DD`.
    pub fn time_series_daily_adjusted(&self, params: &DailyAdjustedParams) -> Result<Vec<Ohlc>> {
        let mut params = params.clone();
        params.datatype = Some(DataType::Csv);
        let body = self.get("TIME_SERIES_DAILY_ADJUSTED", &params)?;
        decode::decode_ohlc(&body)
    }

    /// Builds the request for one operation: `function` and `apikey` are
    /// always present, operation parameters are appended with omit-empty
    /// semantics via serde.
    fn request<P: Serialize + ?Sized>(
        &self,
        function: &str,
        params: &P,
    ) -> Result<reqwest::blocking::Request> {
        self.http
            .get(&self.query_url)
            .query(&[("function", function), ("apikey", self.api_key.as_str())])
            .query(params)
            .build()
            .map_err(VantageError::Transport)
    }

    /// Executes one gated request and returns the raw body, presumed to be
    /// tabular data once the status and error-envelope checks have passed.
    fn get<P: Serialize + ?Sized>(&self, function: &str, params: &P) -> Result<String> {
        let request = self.request(function, params)?;
        debug!(function, "issuing query");

        let response = self.http.execute(request).map_err(VantageError::Transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            // Body kept as diagnostic text only; a failed read here loses
            // nothing the caller could act on.
            let body = response.text().unwrap_or_default();
            return Err(VantageError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().map_err(VantageError::Body)?;

        if let Some(message) = api_error_message(&body) {
            return Err(VantageError::Api(message));
        }

        Ok(body)
    }
}

/// Tolerant probe for the upstream error envelope. A body that is not the
/// envelope shape is simply not an error; only a matching envelope with a
/// non-empty message counts.
fn api_error_message(body: &str) -> Option<String> {
    let envelope: ApiErrorEnvelope = serde_json::from_str(body).ok()?;
    (!envelope.message.is_empty()).then_some(envelope.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interval, OutputSize};

    fn query_of(request: &reqwest::blocking::Request) -> String {
        request.url().query().unwrap_or_default().to_string()
    }

    #[test]
    fn request_always_carries_function_and_apikey() {
        let client = Client::new("secret-key").expect("Failed to build client");
        let request = client
            .request("TIME_SERIES_DAILY", &DailyParams::new("MSFT"))
            .expect("Failed to build request");

        let query = query_of(&request);
        assert!(query.contains("function=TIME_SERIES_DAILY"));
        assert!(query.contains("apikey=secret-key"));
        assert!(query.contains("symbol=MSFT"));
    }

    #[test]
    fn unset_optional_fields_are_omitted_from_the_query() {
        let client = Client::new("k").expect("Failed to build client");
        let request = client
            .request("TIME_SERIES_DAILY", &DailyParams::new("IBM"))
            .expect("Failed to build request");

        let query = query_of(&request);
        assert!(!query.contains("outputsize"));
        assert!(!query.contains("datatype"));
    }

    #[test]
    fn set_optional_fields_are_serialized_verbatim() {
        let client = Client::new("k").expect("Failed to build client");
        let params = IntradayParams::new("TWTR")
            .with_interval(Interval::SixtyMinutes)
            .with_outputsize(OutputSize::Full);
        let request = client
            .request("TIME_SERIES_INTRADAY", &params)
            .expect("Failed to build request");

        let query = query_of(&request);
        assert!(query.contains("interval=60min"));
        assert!(query.contains("outputsize=full"));
    }

    #[test]
    fn empty_symbol_is_omitted() {
        let client = Client::new("k").expect("Failed to build client");
        let request = client
            .request("TIME_SERIES_DAILY", &DailyParams::default())
            .expect("Failed to build request");

        assert!(!query_of(&request).contains("symbol"));
    }

    #[test]
    fn error_envelope_with_message_is_detected() {
        let body = r#"{"Error Message":"Invalid API call"}"#;
        assert_eq!(api_error_message(body).as_deref(), Some("Invalid API call"));
    }

    #[test]
    fn non_envelope_bodies_do_not_probe_as_errors() {
        assert_eq!(api_error_message("timestamp,open\n2023-01-03,1.0\n"), None);
        assert_eq!(api_error_message("{}"), None);
        assert_eq!(api_error_message(r#"{"Error Message":""}"#), None);
        assert_eq!(api_error_message(""), None);
    }
}
