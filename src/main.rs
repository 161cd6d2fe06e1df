//! Pressure Alert Service - Main Driver
//!
//! A one-shot pipeline that:
//! 1. Loads the monitored location and tuning knobs from baromon.toml
//! 2. Fetches today's hourly pressure forecast from Open-Meteo
//! 3. Normalizes the series to the target day and converts to inHg
//! 4. Analyzes the trend (threshold breach, intraday range, sporadic reversals)
//! 5. Composes a notification payload and prints it as the final stdout line
//!    for the host automation shell to deliver
//!
//! Scheduling is external: run it once per invocation (cron, shortcut, etc.).
//!
//! Usage:
//!   cargo run --release                          # Analyze today at the current hour
//!   cargo run --release -- --date 2025-06-01     # Analyze a specific forecast day
//!   cargo run --release -- --hour 14             # Override the "current hour" anchor

use baromon_service::alert::compose::{compose, ComposeOptions};
use baromon_service::analysis::trend::{analyze, TrendConfig};
use baromon_service::config;
use baromon_service::ingest::open_meteo;
use baromon_service::normalize::normalize;
use chrono::{Local, Timelike};
use std::env;

fn main() {
    println!("🌤  Barometric Pressure Alert Service");
    println!("=====================================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut date_override: Option<String> = None;
    let mut hour_override: Option<u32> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--date" => {
                if i + 1 < args.len() {
                    date_override = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --date requires a YYYY-MM-DD value");
                    std::process::exit(1);
                }
            }
            "--hour" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<u32>() {
                        Ok(h) if h <= 23 => hour_override = Some(h),
                        _ => {
                            eprintln!("Error: --hour requires a value in 0..=23");
                            std::process::exit(1);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --hour requires a value in 0..=23");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--date YYYY-MM-DD] [--hour H]", args[0]);
                std::process::exit(1);
            }
        }
    }

    // Load configuration (panics with a clear message if baromon.toml is bad)
    let config = config::load_config();
    let lat = config.location.lat_string();
    let lon = config.location.lon_string();

    let now = Local::now();
    let target_date = date_override.unwrap_or_else(|| now.format("%Y-%m-%d").to_string());
    let current_hour = hour_override.unwrap_or_else(|| now.hour());

    // Fetch the forecast
    println!("📡 Fetching hourly forecast for ({}, {})...", lat, lon);
    let client = reqwest::blocking::Client::new();
    let raw = match open_meteo::fetch_forecast(&client, &lat, &lon) {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("\n❌ Forecast fetch failed: {}\n", e);
            std::process::exit(1);
        }
    };
    println!("   ✓ {} forecast samples received", raw.len());

    // Normalize to the target day
    let samples = match normalize(&raw, &target_date) {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("\n❌ Forecast data malformed: {}\n", e);
            std::process::exit(1);
        }
    };
    println!("   ✓ {} samples on {}", samples.len(), target_date);

    // Analyze the day's trend
    let trend_config = TrendConfig::from(&config.thresholds);
    let result = match analyze(&samples, &trend_config) {
        Some(result) => result,
        None => {
            println!("\n✓ No forecast data for {} — nothing to alert on", target_date);
            return;
        }
    };
    println!(
        "📊 Range {:.2}–{:.2} inHg, {} direction changes (hour anchor: {})",
        result.min_pressure, result.max_pressure, result.direction_changes, current_hour
    );

    // Compose and deliver
    let options = ComposeOptions::from(&config.output);
    match compose(
        &result,
        &samples,
        current_hour,
        &lat,
        &lon,
        &trend_config,
        &options,
    ) {
        None => {
            println!("\n✓ Pressure looks stable today — no alert");
        }
        Some(payload) => {
            println!("\n🔔 {}", payload.notification.title);

            // The final stdout line is the machine-readable payload the
            // host automation shell turns into a push notification.
            match serde_json::to_string(&payload) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("\n❌ Failed to serialize payload: {}\n", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
