//! Stock time-series request parameters and the OHLC record type.
//!
//! One parameter struct per operation. Every struct serializes with
//! omit-empty semantics: a field left at its default is not sent, so the
//! upstream applies its own defaults. Parameter values are not validated
//! locally beyond the typed vocabularies below; the server is the source
//! of truth for e.g. symbol validity.

use serde::{Deserialize, Serialize};

/// Candle width for intraday series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "60min")]
    SixtyMinutes,
}

impl Interval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1min",
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::SixtyMinutes => "60min",
        }
    }
}

/// How much history the upstream returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// Latest 100 data points (upstream default).
    Compact,
    /// Full-length history.
    Full,
}

/// Response body format requested from the upstream.
///
/// The client forces this to [`DataType::Csv`] for every data-series call
/// because the decoder is tabular-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Csv,
    Json,
}

/// Parameters for `TIME_SERIES_INTRADAY`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntradayParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputsize: Option<OutputSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<DataType>,
}

impl IntradayParams {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn with_outputsize(mut self, outputsize: OutputSize) -> Self {
        self.outputsize = Some(outputsize);
        self
    }
}

/// Parameters for `TIME_SERIES_DAILY`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputsize: Option<OutputSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<DataType>,
}

impl DailyParams {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn with_outputsize(mut self, outputsize: OutputSize) -> Self {
        self.outputsize = Some(outputsize);
        self
    }
}

/// Parameters for `TIME_SERIES_DAILY_ADJUSTED`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyAdjustedParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputsize: Option<OutputSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<DataType>,
}

impl DailyAdjustedParams {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn with_outputsize(mut self, outputsize: OutputSize) -> Self {
        self.outputsize = Some(outputsize);
        self
    }
}

/// One OHLCV bar, shared by every time-series operation.
///
/// `time` is kept verbatim as returned by the upstream: `YYYY-MM-DD` for
/// daily series and `YYYY-MM-DD HH:MM:SS` for intraday series. Interpreting
/// the format is the caller's responsibility; this crate never parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}
