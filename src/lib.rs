/// baromon_service: barometric pressure alert service for
/// pressure-sensitive users.
///
/// # Module structure
///
/// ```text
/// baromon_service
/// ├── model       — shared data types (RawSample, HourSample, AnalysisResult,
/// │                 NotificationPayload, ForecastError) + observable constants
/// ├── config      — alert configuration loader (baromon.toml)
/// ├── normalize   — Series Normalizer: day filter, hour extraction, hPa→inHg
/// ├── analysis
/// │   └── trend   — Trend Analyzer: extrema, first breach, direction changes
/// ├── alert
/// │   └── compose — Alert Composer: message branching, titles, payload assembly
/// ├── ingest
/// │   ├── open_meteo — Open-Meteo forecast API: URL construction + JSON parsing
/// │   └── fixtures (test only) — representative API response payloads
/// └── chart       — attachment builders (chart image URL, visualization link)
/// ```
///
/// Data flows one-way through the core:
/// raw series → normalize → analyze → compose → notification payload.
/// Each stage produces a new immutable value; only `ingest` performs I/O.

/// Public modules
pub mod alert;
pub mod analysis;
pub mod chart;
pub mod config;
pub mod ingest;
pub mod model;
pub mod normalize;
