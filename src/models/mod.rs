//! Typed models for Alpha Vantage requests and records.
//!
//! Request-parameter structs serialize straight into the query string via
//! serde; optional fields left unset are omitted from the request entirely.

pub mod time_series;

pub use time_series::{
    DailyAdjustedParams, DailyParams, DataType, IntradayParams, Interval, Ohlc, OutputSize,
};
