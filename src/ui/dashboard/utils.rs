//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use ratatui::prelude::Color;

/// Format a currency amount with a dollar prefix, e.g. "$1000.50"
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a position quantity to four decimal places
pub fn format_qty(value: f64) -> String {
    format!("{:.4}", value)
}

/// Format a price level to two decimal places
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a fractional return estimate as a percentage, e.g. "3.21%"
pub fn format_expected_return(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::StatusFetcher => Color::Cyan,
        Worker::SignalsFetcher => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("ConnectTimeout") {
        return "Connection timeout - retrying next cycle".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("TimedOut") {
        return "Request timed out - retrying next cycle".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error - retrying next cycle".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_two_decimals_with_prefix() {
        assert_eq!(format_currency(1000.5), "$1000.50");
        assert_eq!(format_currency(400.0), "$400.00");
        assert_eq!(format_currency(600.5), "$600.50");
    }

    #[test]
    fn test_format_qty_four_decimals() {
        assert_eq!(format_qty(0.12345), "0.1235");
        assert_eq!(format_qty(2.0), "2.0000");
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(60000.0), "60000.00");
        assert_eq!(format_price(65000.0), "65000.00");
    }

    #[test]
    fn test_format_expected_return_scales_to_percent() {
        assert_eq!(format_expected_return(0.0321), "3.21%");
        assert_eq!(format_expected_return(0.0), "0.00%");
        assert_eq!(format_expected_return(-0.015), "-1.50%");
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2025-06-01 13:45:21"),
            "06-01 13:45"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }
}
