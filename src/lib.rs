//! Alpha Vantage time-series client library.
//!
//! Provides a blocking, typed client for the Alpha Vantage query endpoint
//! covering the stock time-series operations (intraday, daily and
//! daily-adjusted), decoding the upstream's CSV output into ordered OHLCV
//! records.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod models;

pub use client::Client;
pub use error::{Result, VantageError};
