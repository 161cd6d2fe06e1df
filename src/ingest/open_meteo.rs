/// Open-Meteo forecast API client.
///
/// Handles URL construction and JSON response parsing for the hourly
/// forecast endpoint:
///   https://api.open-meteo.com/v1/forecast
///
/// The API returns hourly variables as parallel arrays: `hourly.time[]`
/// holds ISO 8601 timestamps and `hourly.pressure_msl[]` holds the
/// matching mean-sea-level pressures in hectopascals. See `fixtures.rs`
/// for annotated examples of the response structure.

use crate::model::{ForecastError, RawSample};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde structures for forecast JSON deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ForecastResponse {
    hourly: HourlyBlock,
}

#[derive(Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    pressure_msl: Vec<f64>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Builds the Open-Meteo forecast URL for the given coordinates.
///
/// Coordinates are passed through as strings already formatted to 3
/// decimal places by the caller. The URL always requests the hourly
/// `pressure_msl` variable with the provider resolving the location's
/// timezone (`timezone=auto`), so timestamps land in local wall time.
pub fn build_forecast_url(lat: &str, lon: &str) -> String {
    format!(
        "{}?latitude={}&longitude={}&hourly=pressure_msl&timezone=auto",
        FORECAST_BASE_URL, lat, lon
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses an Open-Meteo forecast JSON body into `RawSample`s by zipping
/// the parallel `time` and `pressure_msl` arrays in order.
///
/// # Errors
/// - `ForecastError::ParseError` — malformed JSON, or the parallel arrays
///   disagree in length (each timestamp must have exactly one pressure).
/// - `ForecastError::NoDataAvailable` — structurally valid response with
///   an empty hourly series.
pub fn parse_forecast_response(json: &str) -> Result<Vec<RawSample>, ForecastError> {
    let response: ForecastResponse = serde_json::from_str(json)
        .map_err(|e| ForecastError::ParseError(format!("JSON deserialization failed: {}", e)))?;

    let times = response.hourly.time;
    let pressures = response.hourly.pressure_msl;

    if times.len() != pressures.len() {
        return Err(ForecastError::ParseError(format!(
            "Parallel array mismatch: {} timestamps vs {} pressures",
            times.len(),
            pressures.len()
        )));
    }

    if times.is_empty() {
        return Err(ForecastError::NoDataAvailable(
            "Hourly series is empty".to_string(),
        ));
    }

    Ok(times
        .into_iter()
        .zip(pressures)
        .map(|(timestamp, pressure_hpa)| RawSample {
            timestamp,
            pressure_hpa,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Fetches the hourly pressure forecast for the given coordinates.
///
/// This is the service's only I/O suspension point; everything downstream
/// is a pure function of the returned samples.
///
/// # Errors
/// - `ForecastError::RequestError` — the request never produced a response.
/// - `ForecastError::HttpError` — non-2xx response status.
/// - `ForecastError::ParseError` / `NoDataAvailable` — see
///   [`parse_forecast_response`].
pub fn fetch_forecast(
    client: &reqwest::blocking::Client,
    lat: &str,
    lon: &str,
) -> Result<Vec<RawSample>, ForecastError> {
    let url = build_forecast_url(lat, lon);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| ForecastError::RequestError(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ForecastError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| ForecastError::RequestError(format!("Failed to read body: {}", e)))?;

    parse_forecast_response(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
