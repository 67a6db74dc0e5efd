use tracing::info;

use vantage::VantageError;
use vantage::client::Client;
use vantage::config::fetch_config;
use vantage::models::{IntradayParams, Interval, OutputSize};

fn main() -> Result<(), VantageError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let app_config = fetch_config()?;
    let client = Client::new(app_config.alphavantage.api_key)?
        .with_query_url(app_config.alphavantage.query_url);

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "IBM".to_string());
    let params = IntradayParams::new(&symbol)
        .with_interval(Interval::SixtyMinutes)
        .with_outputsize(OutputSize::Full);

    let rows = client.time_series_intraday(&params)?;
    for row in &rows {
        info!(
            time = %row.time,
            open = row.open,
            high = row.high,
            low = row.low,
            close = row.close,
            volume = row.volume,
            "bar"
        );
    }

    Ok(())
}
