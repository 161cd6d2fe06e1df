/// Series Normalizer: reduces the raw forecast feed to the target day.
///
/// Filters (timestamp, pressure) pairs down to entries whose timestamp
/// starts with the target ISO date, extracts hour-of-day and an "HH:MM"
/// label from the fixed ISO offsets, and converts hectopascals to inches
/// of mercury. Input order is preserved; nothing is sorted, deduplicated,
/// or gap-filled.

use crate::model::{in_hg, ForecastError, HourSample, RawSample};

/// Filters `raw` to entries on `target_date` (ISO date string prefix match,
/// e.g. `"2025-06-01"`) and converts each retained entry to an `HourSample`.
///
/// Zero matching entries is not an error: the result is simply empty, and
/// downstream analysis treats that as the "no data" state.
///
/// # Errors
/// `ForecastError::MalformedSample` when a *retained* entry has a timestamp
/// too short to carry an hour field, a non-numeric hour, an hour outside
/// 0..=23, or a non-finite pressure value. Entries outside the target date
/// are never inspected beyond the prefix match.
pub fn normalize(raw: &[RawSample], target_date: &str) -> Result<Vec<HourSample>, ForecastError> {
    let mut samples = Vec::new();

    for entry in raw {
        if !entry.timestamp.starts_with(target_date) {
            continue;
        }

        // ISO 8601 layout: "YYYY-MM-DDTHH:MM..." — hour at bytes 11..13,
        // "HH:MM" label at bytes 11..16.
        let hour_str = entry.timestamp.get(11..13).ok_or_else(|| {
            ForecastError::MalformedSample(format!(
                "Timestamp too short for hour field: '{}'",
                entry.timestamp
            ))
        })?;
        let time_label = entry.timestamp.get(11..16).ok_or_else(|| {
            ForecastError::MalformedSample(format!(
                "Timestamp too short for HH:MM label: '{}'",
                entry.timestamp
            ))
        })?;

        let hour: u32 = hour_str.parse().map_err(|_| {
            ForecastError::MalformedSample(format!(
                "Non-numeric hour '{}' in timestamp '{}'",
                hour_str, entry.timestamp
            ))
        })?;
        if hour > 23 {
            return Err(ForecastError::MalformedSample(format!(
                "Hour {} out of range in timestamp '{}'",
                hour, entry.timestamp
            )));
        }

        if !entry.pressure_hpa.is_finite() {
            return Err(ForecastError::MalformedSample(format!(
                "Non-finite pressure at '{}'",
                entry.timestamp
            )));
        }

        samples.push(HourSample {
            hour,
            time_label: time_label.to_string(),
            pressure_in_hg: in_hg(entry.pressure_hpa),
        });
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(timestamp: &str, pressure_hpa: f64) -> RawSample {
        RawSample {
            timestamp: timestamp.to_string(),
            pressure_hpa,
        }
    }

    #[test]
    fn test_filters_to_target_date_only() {
        let feed = vec![
            raw("2025-05-31T23:00", 1010.0),
            raw("2025-06-01T00:00", 1012.0),
            raw("2025-06-01T13:00", 1008.0),
            raw("2025-06-02T00:00", 1011.0),
        ];

        let samples = normalize(&feed, "2025-06-01").expect("clean feed should normalize");
        assert_eq!(samples.len(), 2, "only the two 2025-06-01 entries should survive");
        assert_eq!(samples[0].hour, 0);
        assert_eq!(samples[1].hour, 13);
        assert_eq!(samples[1].time_label, "13:00");
    }

    #[test]
    fn test_converts_hpa_to_in_hg() {
        let feed = vec![raw("2025-06-01T06:00", 1000.0)];
        let samples = normalize(&feed, "2025-06-01").expect("should normalize");
        assert!(
            (samples[0].pressure_in_hg - 29.53).abs() < 1e-9,
            "1000 hPa should be exactly 29.53 inHg, got {}",
            samples[0].pressure_in_hg
        );
    }

    #[test]
    fn test_preserves_input_order_and_duplicate_hours() {
        // Sub-hour source granularity collapses to duplicate hour values;
        // both samples must survive in order.
        let feed = vec![
            raw("2025-06-01T09:00", 1010.0),
            raw("2025-06-01T09:30", 1009.0),
            raw("2025-06-01T10:00", 1008.0),
        ];

        let samples = normalize(&feed, "2025-06-01").expect("should normalize");
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].hour, 9);
        assert_eq!(samples[1].hour, 9, "duplicate hour must be preserved");
        assert_eq!(samples[1].time_label, "09:30");
        assert_eq!(samples[2].hour, 10);
    }

    #[test]
    fn test_no_matching_date_returns_empty_not_error() {
        let feed = vec![
            raw("2025-06-01T00:00", 1010.0),
            raw("2025-06-01T01:00", 1011.0),
        ];
        let samples = normalize(&feed, "2025-07-15").expect("zero matches is not an error");
        assert!(samples.is_empty());
    }

    #[test]
    fn test_empty_feed_returns_empty() {
        let samples = normalize(&[], "2025-06-01").expect("empty feed is fine");
        assert!(samples.is_empty());
    }

    #[test]
    fn test_truncated_timestamp_is_malformed() {
        let feed = vec![raw("2025-06-01T07", 1010.0)];
        let result = normalize(&feed, "2025-06-01");
        assert!(
            matches!(result, Err(ForecastError::MalformedSample(_))),
            "timestamp without a full HH:MM must be rejected, got {:?}",
            result
        );
    }

    #[test]
    fn test_non_numeric_hour_is_malformed() {
        let feed = vec![raw("2025-06-01Txx:00", 1010.0)];
        let result = normalize(&feed, "2025-06-01");
        assert!(matches!(result, Err(ForecastError::MalformedSample(_))));
    }

    #[test]
    fn test_non_finite_pressure_is_malformed() {
        let feed = vec![raw("2025-06-01T07:00", f64::NAN)];
        let result = normalize(&feed, "2025-06-01");
        assert!(matches!(result, Err(ForecastError::MalformedSample(_))));
    }

    #[test]
    fn test_malformed_entry_outside_target_date_is_ignored() {
        // Off-day garbage never reaches the offset extraction.
        let feed = vec![
            raw("garbage", 1010.0),
            raw("2025-06-01T12:00", 1010.0),
        ];
        let samples = normalize(&feed, "2025-06-01").expect("off-day entries are skipped whole");
        assert_eq!(samples.len(), 1);
    }
}
