/// Alert Composer: assembles the notification payload.
///
/// Given the analyzer's findings plus the current hour, produces an ordered
/// set of explanatory message lines with correctly chosen time anchors
/// ("already happened" vs "will happen" vs "happened earlier but recovered"),
/// then a title keyed on the sporadic classification.
///
/// Line order when triggered: threshold line, range line, sporadic line,
/// then trailing informational lines (current reading, visualization link,
/// data source note). The trailing lines are gated only by `ComposeOptions`
/// flags, never by which condition fired.

use crate::analysis::trend::TrendConfig;
use crate::chart;
use crate::ingest::open_meteo;
use crate::model::{AlertMeta, AnalysisResult, HourSample, Notification, NotificationPayload};

/// Attachment carried by the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentStyle {
    /// No attachment (`null` on the wire).
    None,
    /// Rendered line-chart image URL (pressure vs. hour).
    ChartImage,
    /// External visualization link (windy.com pressure layer).
    VisualizationLink,
}

/// Output shaping. The historical script variants (with/without chart,
/// with/without sporadic detection, trailing-line differences) collapse
/// into these flags instead of forked code paths.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    pub attachment: AttachmentStyle,
    pub include_current_reading: bool,
    pub include_reference_link: bool,
    pub include_source_note: bool,
    /// When false, the sporadic condition neither triggers an alert nor
    /// contributes a line, and the title is always the non-sporadic variant.
    pub detect_sporadic: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            attachment: AttachmentStyle::None,
            include_current_reading: true,
            include_reference_link: true,
            include_source_note: true,
            detect_sporadic: true,
        }
    }
}

/// Converts an "HH:MM" label to compact 12-hour form: no leading zero on
/// the hour, zero-padded minutes, lowercase meridiem. Hour 0 displays as
/// 12a, hour 12 as 12p.
///
/// A label that does not parse is returned unchanged rather than panicking;
/// the normalizer should never produce one.
pub fn format_compact_time(time_label: &str) -> String {
    let mut parts = time_label.splitn(2, ':');
    let hour: u32 = match parts.next().and_then(|h| h.parse().ok()) {
        Some(h) => h,
        None => return time_label.to_string(),
    };
    let minute: u32 = match parts.next().and_then(|m| m.parse().ok()) {
        Some(m) => m,
        None => return time_label.to_string(),
    };

    let meridiem = if hour >= 12 { 'p' } else { 'a' };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!("{}:{:02}{}", display_hour, minute, meridiem)
}

/// Composes the notification payload, or `None` when no alert condition
/// fired (with sporadic subject to `options.detect_sporadic`).
///
/// `config` supplies the threshold values both for the recovery scan and
/// for the human-readable line text, so overridden thresholds stay
/// consistent between detection and wording.
pub fn compose(
    result: &AnalysisResult,
    samples: &[HourSample],
    current_hour: u32,
    lat: &str,
    lon: &str,
    config: &TrendConfig,
    options: &ComposeOptions,
) -> Option<NotificationPayload> {
    let sporadic = options.detect_sporadic && result.sporadic;

    if !result.drop_detected() && !result.range_exceeded && !sporadic {
        return None;
    }

    let threshold = config.drop_threshold_in_hg;
    let current_entry = samples.iter().find(|s| s.hour == current_hour);
    let mut body: Vec<String> = Vec::new();

    if let Some(drop_entry) = &result.drop_entry {
        if drop_entry.hour >= current_hour {
            // Breach still ahead of (or at) the present hour.
            let drop_time = format_compact_time(&drop_entry.time_label);
            body.push(format!(
                "Pressure will drop ≤ {} inHg around {}.",
                threshold, drop_time
            ));
        } else {
            // Breach began before the present hour; decide between
            // "currently low", "recovered", and the plain prediction.
            let first_low_time = format_compact_time(&drop_entry.time_label);

            let currently_low = current_entry
                .map(|e| e.pressure_in_hg <= threshold)
                .unwrap_or(false);

            // Most recent breaching sample at or before now.
            let last_low = samples
                .iter()
                .rev()
                .find(|s| s.hour <= current_hour && s.pressure_in_hg <= threshold);

            if currently_low {
                let anchor = last_low
                    .map(|s| format_compact_time(&s.time_label))
                    .unwrap_or(first_low_time);
                body.push(format!(
                    "Pressure is currently ≤ {} inHg (a/o {}).",
                    threshold, anchor
                ));
            } else if let Some(last_low) = last_low {
                // Recovered above the floor. Anchor the recovery to the
                // present-hour sample when one exists; with a gap at the
                // current hour, fall back to the last breaching time.
                let anchor = current_entry
                    .map(|e| format_compact_time(&e.time_label))
                    .unwrap_or_else(|| format_compact_time(&last_low.time_label));
                body.push(format!(
                    "Pressure dropped ≤ {} inHg earlier (a/o {}), but is now above that (a/o {}).",
                    threshold, first_low_time, anchor
                ));
            } else {
                body.push(format!(
                    "Pressure will drop ≤ {} inHg around {}.",
                    threshold, first_low_time
                ));
            }
        }
    }

    if result.range_exceeded {
        body.push(format!(
            "Expect changes ≥ {} inHg (H: {:.2}, L: {:.2}).",
            config.range_threshold_in_hg, result.max_pressure, result.min_pressure
        ));
    }

    if sporadic {
        body.push(format!(
            "Pressure will change direction {} times today.",
            result.direction_changes
        ));
    }

    if options.include_current_reading {
        // Skipped when the series has a gap at the current hour.
        if let Some(entry) = current_entry {
            body.push(format!(
                "\nCurrent pressure is {:.2} inHg.",
                entry.pressure_in_hg
            ));
        }
    }

    if options.include_reference_link {
        body.push(format!(
            "\nSee more at {}.",
            chart::build_visualization_url(lat, lon)
        ));
    }

    if options.include_source_note {
        body.push(format!(
            "\nData retrieved from {}. Current hour is {}.",
            open_meteo::build_forecast_url(lat, lon),
            current_hour
        ));
    }

    let title = if sporadic {
        "😵‍💫 Pressure is All Over the Place Today"
    } else {
        "📉 Pressure Dropping Critically Today"
    };

    let attachment = match options.attachment {
        AttachmentStyle::None => None,
        AttachmentStyle::ChartImage => chart::build_chart_url(samples),
        AttachmentStyle::VisualizationLink => Some(chart::build_visualization_url(lat, lon)),
    };

    Some(NotificationPayload {
        notification: Notification {
            title: title.to_string(),
            body: body.join("\n"),
            attachment,
        },
        meta: AlertMeta {
            drop_detected: result.drop_detected(),
            range_exceeded: result.range_exceeded,
            pressure_is_sporadic: sporadic,
        },
    })
}
