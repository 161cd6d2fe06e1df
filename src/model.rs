/// Core data types for the barometric pressure alert service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies beyond serde —
/// only types and the fixed constants that form the observable contract.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Observable constants
// ---------------------------------------------------------------------------

/// Critical pressure floor, in inches of mercury. Any hourly sample at or
/// below this value counts as a threshold breach.
pub const DROP_THRESHOLD_IN_HG: f64 = 29.8;

/// Maximum tolerated intraday spread (max - min), in inches of mercury.
pub const RANGE_THRESHOLD_IN_HG: f64 = 0.2;

/// Number of intraday direction reversals at which the day is classified
/// as sporadic.
pub const SPORADIC_CHANGE_THRESHOLD: u32 = 4;

/// Conversion factor from hectopascals (the unit returned by the forecast
/// provider) to inches of mercury (the unit of all thresholds and display).
pub const HPA_TO_IN_HG: f64 = 0.02953;

/// Converts a mean-sea-level pressure in hectopascals to inches of mercury.
pub fn in_hg(hpa: f64) -> f64 {
    hpa * HPA_TO_IN_HG
}

// ---------------------------------------------------------------------------
// Sample types
// ---------------------------------------------------------------------------

/// A single forecast sample as delivered by the provider: an ISO 8601
/// timestamp paired with a mean-sea-level pressure in hectopascals.
///
/// The provider returns these as parallel arrays; `ingest::open_meteo`
/// zips them into this shape. Ascending time order is assumed but not
/// validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    pub timestamp: String, // ISO 8601, e.g. "2025-06-01T05:00"
    pub pressure_hpa: f64,
}

/// One forecast sample for the target day, reduced to hour granularity and
/// converted to inches of mercury.
///
/// Produced by `normalize::normalize` in input order. Duplicate `hour`
/// values are permitted and preserved; the sequence is not deduplicated or
/// gap-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct HourSample {
    /// Hour of day, 0..=23.
    pub hour: u32,
    /// "HH:MM" as it appeared in the source timestamp.
    pub time_label: String,
    pub pressure_in_hg: f64,
}

// ---------------------------------------------------------------------------
// Analysis types
// ---------------------------------------------------------------------------

/// Summary of one day's pressure behavior, computed once per invocation by
/// `analysis::trend::analyze` and immutable afterwards.
///
/// The three alert conditions (`drop_detected()`, `range_exceeded`,
/// `sporadic`) are independent; any subset may hold simultaneously.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub min_pressure: f64,
    pub max_pressure: f64,
    /// First sample (in sequence order) at or below the drop threshold.
    pub drop_entry: Option<HourSample>,
    pub range_exceeded: bool,
    pub direction_changes: u32,
    pub sporadic: bool,
}

impl AnalysisResult {
    /// True when any hourly sample breached the critical pressure floor.
    pub fn drop_detected(&self) -> bool {
        self.drop_entry.is_some()
    }

    /// True when at least one alert condition fired.
    pub fn any_condition(&self) -> bool {
        self.drop_detected() || self.range_exceeded || self.sporadic
    }
}

// ---------------------------------------------------------------------------
// Notification payload
// ---------------------------------------------------------------------------

/// Terminal artifact of a run: the notification handed to the host
/// automation shell, plus a meta block exposing which conditions fired.
///
/// Serializes with camelCase keys — the wire format the host shell consumes:
/// ```json
/// {
///   "notification": { "title": "...", "body": "...", "attachment": null },
///   "meta": { "dropDetected": true, "rangeExceeded": false, "pressureIsSporadic": false }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationPayload {
    pub notification: Notification,
    pub meta: AlertMeta,
}

/// The user-facing notification content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    /// Newline-joined message lines.
    pub body: String,
    /// `None`, a rendered chart image URL, or an external visualization link.
    pub attachment: Option<String>,
}

/// Which alert conditions fired, exposed for the host shell's own logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMeta {
    pub drop_detected: bool,
    pub range_exceeded: bool,
    pub pressure_is_sporadic: bool,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or normalizing forecast data.
///
/// The analyzer and composer assume clean input and never produce these;
/// all core failures are deterministic given identical input.
#[derive(Debug, PartialEq)]
pub enum ForecastError {
    /// Non-2xx HTTP response from the forecast API.
    HttpError(u16),
    /// The request never produced a response (DNS, connect, timeout).
    RequestError(String),
    /// The response body could not be deserialized, or the parallel
    /// time/pressure arrays disagreed in length.
    ParseError(String),
    /// The response parsed but contained no hourly series at all.
    NoDataAvailable(String),
    /// A retained sample had a malformed timestamp or a non-finite
    /// pressure value.
    MalformedSample(String),
}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::HttpError(code) => write!(f, "HTTP error: {}", code),
            ForecastError::RequestError(msg) => write!(f, "Request error: {}", msg),
            ForecastError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ForecastError::NoDataAvailable(msg) => write!(f, "No data available: {}", msg),
            ForecastError::MalformedSample(msg) => write!(f, "Malformed sample: {}", msg),
        }
    }
}

impl std::error::Error for ForecastError {}
