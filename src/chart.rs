/// Attachment builders for the notification payload.
///
/// Rendering is a presentation concern kept outside the decision engine:
/// both builders produce URLs from the same `HourSample` sequence the
/// analyzer consumed, so no drawing happens in-process.
///
/// - QuickChart (https://quickchart.io/chart) renders a Chart.js config
///   passed in the `c` query parameter into a PNG.
/// - windy.com serves an interactive pressure layer centered on a
///   lat/lon at a fixed zoom.

use crate::model::HourSample;

const QUICKCHART_BASE_URL: &str = "https://quickchart.io/chart";
const WINDY_BASE_URL: &str = "https://www.windy.com/-Pressure-pressure";

/// Builds the windy.com pressure-layer link for the given coordinates
/// (already formatted to 3 decimals). Zoom level 6 shows the regional
/// pressure system around the user.
pub fn build_visualization_url(lat: &str, lon: &str) -> String {
    format!("{}?pressure,{},{},6", WINDY_BASE_URL, lat, lon)
}

/// Builds a QuickChart URL rendering pressure (inHg) against the day's
/// time labels as a line chart. Returns `None` for an empty series.
///
/// Values are rounded to two decimals before serialization to keep the
/// URL short; the chart is illustrative, not a data export.
pub fn build_chart_url(samples: &[HourSample]) -> Option<String> {
    if samples.is_empty() {
        return None;
    }

    let labels: Vec<&str> = samples.iter().map(|s| s.time_label.as_str()).collect();
    let values: Vec<f64> = samples
        .iter()
        .map(|s| (s.pressure_in_hg * 100.0).round() / 100.0)
        .collect();

    let chart_config = serde_json::json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Pressure (inHg)",
                "data": values,
                "fill": false
            }]
        }
    });

    Some(format!(
        "{}?c={}",
        QUICKCHART_BASE_URL,
        urlencoding::encode(&chart_config.to_string())
    ))
}
