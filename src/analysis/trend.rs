/// Pressure trend analysis.
///
/// Walks one day's normalized hourly series once and classifies three
/// independent conditions:
///
/// 1. **Threshold breach** — any sample at or below the critical floor
///    (first breaching sample is retained for time-anchored messaging).
/// 2. **Range exceeded** — intraday spread (max - min) above the range
///    threshold.
/// 3. **Sporadic** — the series reverses direction at least N times.
///    Flat (zero-delta) runs neither count as a reversal nor reset the
///    tracked direction; only a strict sign flip counts.

use crate::model::{
    AnalysisResult, HourSample, DROP_THRESHOLD_IN_HG, RANGE_THRESHOLD_IN_HG,
    SPORADIC_CHANGE_THRESHOLD,
};

/// Trend analysis configuration.
///
/// Defaults are the fixed observable constants; overrides exist so the
/// config file can tune sensitivity without a recompile.
#[derive(Debug, Clone)]
pub struct TrendConfig {
    /// Samples at or below this pressure (inHg) count as a breach.
    pub drop_threshold_in_hg: f64,

    /// Intraday spreads strictly above this (inHg) flag the range condition.
    pub range_threshold_in_hg: f64,

    /// Direction reversals at or above this count flag the day as sporadic.
    pub sporadic_change_threshold: u32,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            drop_threshold_in_hg: DROP_THRESHOLD_IN_HG,
            range_threshold_in_hg: RANGE_THRESHOLD_IN_HG,
            sporadic_change_threshold: SPORADIC_CHANGE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Analyzes one day's hourly series against `config`.
///
/// Returns `None` for an empty series — the explicit "no data" state.
/// Extrema over an empty set are undefined, so the caller short-circuits
/// to "no alert" instead of comparing against NaN sentinels.
pub fn analyze(samples: &[HourSample], config: &TrendConfig) -> Option<AnalysisResult> {
    if samples.is_empty() {
        return None;
    }

    let mut min_pressure = f64::INFINITY;
    let mut max_pressure = f64::NEG_INFINITY;
    for sample in samples {
        min_pressure = min_pressure.min(sample.pressure_in_hg);
        max_pressure = max_pressure.max(sample.pressure_in_hg);
    }

    let drop_entry = samples
        .iter()
        .find(|s| s.pressure_in_hg <= config.drop_threshold_in_hg)
        .cloned();

    let range_exceeded = (max_pressure - min_pressure) > config.range_threshold_in_hg;

    let direction_changes = count_direction_changes(samples);
    let sporadic = direction_changes >= config.sporadic_change_threshold;

    Some(AnalysisResult {
        min_pressure,
        max_pressure,
        drop_entry,
        range_exceeded,
        direction_changes,
        sporadic,
    })
}

/// Counts strict sign flips in the consecutive-delta sequence.
///
/// A flat delta carries the previously recorded direction forward: it never
/// increments the counter and never resets the tracked direction, so
/// `30.0 → 30.0 → 29.9 → 29.9 → 30.1` counts exactly one reversal.
fn count_direction_changes(samples: &[HourSample]) -> u32 {
    let mut changes = 0;
    let mut last_direction: Option<Direction> = None;

    for pair in samples.windows(2) {
        let delta = pair[1].pressure_in_hg - pair[0].pressure_in_hg;
        let direction = if delta > 0.0 {
            Some(Direction::Up)
        } else if delta < 0.0 {
            Some(Direction::Down)
        } else {
            last_direction
        };

        if let (Some(current), Some(last)) = (direction, last_direction) {
            if current != last {
                changes += 1;
            }
        }

        if direction.is_some() {
            last_direction = direction;
        }
    }

    changes
}
