//! Momentrix MACD report
//!
//! Reads a price series (oldest first, separated by whitespace or commas)
//! from the file given as the first argument, or from stdin, and prints the
//! current MACD signal as JSON.

use dotenvy::dotenv;
use momentrix::config::{get_environment, MacdConfig};
use momentrix::logging;
use momentrix::signals::SignalEngine;
use std::env;
use std::fs;
use std::io::{self, Read};
use tracing::info;

fn parse_prices(input: &str) -> Result<Vec<f64>, String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| format!("Invalid price value: {}", token))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = MacdConfig::from_env()?;
    let symbol = env::var("MACD_SYMBOL").unwrap_or_else(|_| "UNKNOWN".to_string());
    info!(environment = %get_environment(), symbol = %symbol, "Starting MACD report");

    let input = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let prices = parse_prices(&input)?;
    info!(
        price_count = prices.len(),
        required = config.min_prices(),
        "Loaded price series"
    );

    let signal = SignalEngine::evaluate(&symbol, &prices, &config)?;
    println!("{}", serde_json::to_string_pretty(&signal)?);

    Ok(())
}
