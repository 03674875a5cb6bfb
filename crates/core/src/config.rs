//! Configuration structures for the volume-profile system.
//!
//! Everything the original process read from the environment is an explicit
//! value here, resolved once at startup by the configuration-loading
//! collaborator and passed in.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Display timezone for trade timestamps, `GMT+n` / `GMT-n`.
    pub timezone: String,
    /// Number of top levels to report.
    pub significant_levels: usize,
    /// Maximum trades per analysis batch.
    pub trades_to_fetch: usize,
    /// Page size used by the trade-source collaborator.
    pub page_size: usize,
    /// Lookback window in days for the trade-source collaborator.
    pub days_to_fetch: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            timezone: "GMT+7".to_string(),
            significant_levels: 5,
            trades_to_fetch: 10_000,
            page_size: 50,
            days_to_fetch: 1,
        }
    }
}

impl AnalysisConfig {
    /// Resolve the configured timezone string to a fixed UTC offset.
    pub fn tz_offset(&self) -> Result<FixedOffset> {
        parse_timezone(&self.timezone)
    }
}

/// Parse a `GMT+n` / `GMT-n` timezone string into a fixed UTC offset.
///
/// Only whole-hour offsets are supported. A malformed string is a
/// configuration-time error, never an analysis-time one.
pub fn parse_timezone(tz_str: &str) -> Result<FixedOffset> {
    let rest = tz_str
        .strip_prefix("GMT")
        .ok_or_else(|| Error::config(format!("Invalid timezone format: {tz_str}")))?;

    if !rest.starts_with('+') && !rest.starts_with('-') {
        return Err(Error::config(format!(
            "Timezone must be in format 'GMT+n' or 'GMT-n', got: {tz_str}"
        )));
    }

    let hours: i32 = rest
        .parse()
        .map_err(|e| Error::config(format!("Invalid timezone format: {tz_str}. Error: {e}")))?;

    FixedOffset::east_opt(hours * 3600)
        .ok_or_else(|| Error::config(format!("Timezone offset out of range: {tz_str}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.timezone, "GMT+7");
        assert_eq!(config.significant_levels, 5);
        assert_eq!(config.trades_to_fetch, 10_000);
    }

    #[test]
    fn test_parse_timezone_east() {
        let tz = parse_timezone("GMT+7").unwrap();
        assert_eq!(tz.local_minus_utc(), 7 * 3600);
    }

    #[test]
    fn test_parse_timezone_west() {
        let tz = parse_timezone("GMT-5").unwrap();
        assert_eq!(tz.local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_parse_timezone_rejects_bad_format() {
        assert!(parse_timezone("UTC+7").is_err());
        assert!(parse_timezone("GMT7").is_err());
        assert!(parse_timezone("GMT+").is_err());
        assert!(parse_timezone("GMT+abc").is_err());
        assert!(parse_timezone("GMT+99").is_err());
    }
}
