/// Test fixtures: representative JSON payloads from the Open-Meteo
/// forecast API.
///
/// These fixtures are structurally complete but trimmed to the minimum
/// needed to exercise the parser. They reflect the real envelope returned
/// by:
///   https://api.open-meteo.com/v1/forecast?latitude=...&longitude=...&hourly=pressure_msl&timezone=auto
///
/// Response shape:
///   response.hourly.time[]          — ISO 8601 local timestamps ("2025-06-01T05:00")
///   response.hourly.pressure_msl[]  — mean-sea-level pressure in hPa,
///                                     parallel to `time` index-by-index
///
/// Note: with `timezone=auto` the timestamps carry no offset suffix; they
/// are already in the location's wall time, which is why day filtering is
/// a plain date-prefix match.

/// A calm day: every 2025-06-01 hour at 1016.2 hPa (≈ 30.01 inHg), flanked
/// by one hour of the previous and next day. No threshold breach, no range,
/// no reversals.
pub(crate) fn fixture_calm_day_json() -> &'static str {
    r#"{
      "latitude": 40.6875,
      "longitude": -89.625,
      "generationtime_ms": 0.035,
      "utc_offset_seconds": -18000,
      "timezone": "America/Chicago",
      "timezone_abbreviation": "CDT",
      "elevation": 150.0,
      "hourly_units": { "time": "iso8601", "pressure_msl": "hPa" },
      "hourly": {
        "time": [
          "2025-05-31T23:00",
          "2025-06-01T00:00", "2025-06-01T01:00", "2025-06-01T02:00", "2025-06-01T03:00",
          "2025-06-01T04:00", "2025-06-01T05:00", "2025-06-01T06:00", "2025-06-01T07:00",
          "2025-06-01T08:00", "2025-06-01T09:00", "2025-06-01T10:00", "2025-06-01T11:00",
          "2025-06-01T12:00", "2025-06-01T13:00", "2025-06-01T14:00", "2025-06-01T15:00",
          "2025-06-01T16:00", "2025-06-01T17:00", "2025-06-01T18:00", "2025-06-01T19:00",
          "2025-06-01T20:00", "2025-06-01T21:00", "2025-06-01T22:00", "2025-06-01T23:00",
          "2025-06-02T00:00"
        ],
        "pressure_msl": [
          1016.0,
          1016.2, 1016.2, 1016.2, 1016.2,
          1016.2, 1016.2, 1016.2, 1016.2,
          1016.2, 1016.2, 1016.2, 1016.2,
          1016.2, 1016.2, 1016.2, 1016.2,
          1016.2, 1016.2, 1016.2, 1016.2,
          1016.2, 1016.2, 1016.2, 1016.2,
          1016.1
        ]
      }
    }"#
}

/// A volatile day: breaches the 29.8 inHg floor at 05:00 (1008.0 hPa ≈
/// 29.77 inHg), recovers, and reverses direction five times. Spread is
/// ≈ 0.24 inHg, so all three alert conditions fire.
pub(crate) fn fixture_volatile_day_json() -> &'static str {
    r#"{
      "latitude": 40.6875,
      "longitude": -89.625,
      "utc_offset_seconds": -18000,
      "timezone": "America/Chicago",
      "timezone_abbreviation": "CDT",
      "elevation": 150.0,
      "hourly_units": { "time": "iso8601", "pressure_msl": "hPa" },
      "hourly": {
        "time": [
          "2025-06-01T00:00", "2025-06-01T01:00", "2025-06-01T02:00", "2025-06-01T03:00",
          "2025-06-01T04:00", "2025-06-01T05:00", "2025-06-01T06:00", "2025-06-01T07:00",
          "2025-06-01T08:00", "2025-06-01T09:00", "2025-06-01T10:00", "2025-06-01T11:00",
          "2025-06-01T12:00", "2025-06-01T13:00", "2025-06-01T14:00", "2025-06-01T15:00",
          "2025-06-01T16:00", "2025-06-01T17:00", "2025-06-01T18:00", "2025-06-01T19:00",
          "2025-06-01T20:00", "2025-06-01T21:00", "2025-06-01T22:00", "2025-06-01T23:00"
        ],
        "pressure_msl": [
          1016.0, 1016.0, 1016.0, 1016.0,
          1016.0, 1008.0, 1013.0, 1010.0,
          1014.0, 1011.0, 1015.0, 1015.0,
          1015.0, 1015.0, 1015.0, 1015.0,
          1015.0, 1015.0, 1015.0, 1015.0,
          1015.0, 1015.0, 1015.0, 1015.0
        ]
      }
    }"#
}

/// Structurally valid response with empty hourly arrays — the provider's
/// shape for a location/period with no data.
pub(crate) fn fixture_empty_hourly_json() -> &'static str {
    r#"{
      "latitude": 40.6875,
      "longitude": -89.625,
      "timezone": "America/Chicago",
      "hourly_units": { "time": "iso8601", "pressure_msl": "hPa" },
      "hourly": { "time": [], "pressure_msl": [] }
    }"#
}

/// Corrupt response: three timestamps but only two pressures. The parser
/// must reject this rather than silently dropping or inventing a pairing.
pub(crate) fn fixture_mismatched_arrays_json() -> &'static str {
    r#"{
      "latitude": 40.6875,
      "longitude": -89.625,
      "timezone": "America/Chicago",
      "hourly_units": { "time": "iso8601", "pressure_msl": "hPa" },
      "hourly": {
        "time": ["2025-06-01T00:00", "2025-06-01T01:00", "2025-06-01T02:00"],
        "pressure_msl": [1016.0, 1015.8]
      }
    }"#
}
