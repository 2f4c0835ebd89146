use anyhow::{Context, Result};
use chrono::Duration;
use serde::Deserialize;
use std::path::Path;

use crate::schedule::{sample_bookings, Bookings};

// --- Buffer Configuration ---
// Warm-up / cool-down minutes around each booking. A partial config file
// overrides only the fields it names.

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    pub pre_minutes: i64,
    pub post_minutes: i64,
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig {
            pre_minutes: 30,
            post_minutes: 30,
        }
    }
}

impl BufferConfig {
    /// Load from a JSON file; a missing file means defaults, a malformed
    /// one is an error.
    pub fn load(path: &str) -> Result<BufferConfig> {
        if !Path::new(path).exists() {
            return Ok(BufferConfig::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path))?;
        Self::from_json(&content).with_context(|| format!("malformed config {}", path))
    }

    pub fn from_json(content: &str) -> Result<BufferConfig> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn pre(&self) -> Duration {
        Duration::minutes(self.pre_minutes)
    }

    pub fn post(&self) -> Duration {
        Duration::minutes(self.post_minutes)
    }
}

// --- Booking Input ---
// JSON shape: {"Room A": [["2023-10-03 09:00", "2023-10-03 11:00"], ...]}

pub fn load_bookings(path: &str) -> Result<Bookings> {
    if !Path::new(path).exists() {
        return Ok(sample_bookings());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read bookings {}", path))?;
    bookings_from_json(&content).with_context(|| format!("malformed bookings {}", path))
}

pub fn bookings_from_json(content: &str) -> Result<Bookings> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_half_hour_buffers() {
        let config = BufferConfig::default();
        assert_eq!(config.pre_minutes, 30);
        assert_eq!(config.post_minutes, 30);
        assert_eq!(config.pre(), Duration::minutes(30));
        assert_eq!(config.post(), Duration::minutes(30));
    }

    #[test]
    fn partial_config_keeps_defaults() -> Result<()> {
        let config = BufferConfig::from_json(r#"{"pre_minutes": 10}"#)?;
        assert_eq!(config.pre_minutes, 10);
        assert_eq!(config.post_minutes, 30);
        Ok(())
    }

    #[test]
    fn full_config_overrides_both() -> Result<()> {
        let config = BufferConfig::from_json(r#"{"pre_minutes": 5, "post_minutes": 45}"#)?;
        assert_eq!(config.pre_minutes, 5);
        assert_eq!(config.post_minutes, 45);
        Ok(())
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(BufferConfig::from_json("{pre_minutes").is_err());
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() -> Result<()> {
        let config = BufferConfig::load("does-not-exist.json")?;
        assert_eq!(config, BufferConfig::default());
        Ok(())
    }

    #[test]
    fn parses_booking_json() -> Result<()> {
        let bookings = bookings_from_json(
            r#"{"Room A": [["2023-10-03 09:00", "2023-10-03 11:00"],
                           ["2023-10-03 14:00", "2023-10-03 16:00"]]}"#,
        )?;
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings["Room A"].len(), 2);
        assert_eq!(bookings["Room A"][0].0, "2023-10-03 09:00");
        Ok(())
    }

    #[test]
    fn missing_bookings_file_falls_back_to_sample() -> Result<()> {
        let bookings = load_bookings("does-not-exist.json")?;
        assert_eq!(bookings, sample_bookings());
        Ok(())
    }
}
