//! Configuration management and validation.
//!
//! Provides the reader configuration: how sentinel-flagged values are
//! handled, which derived fields are computed after a read, and where the
//! optional station information table lives.

use crate::constants::{SENTINEL_VALUE, remote};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How sentinel-flagged values are handled once the grid is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingDataPolicy {
    /// Replace sentinel values with NaN and leave them missing
    #[default]
    Mask,
    /// Mask, then fill missing values by linear interpolation in time,
    /// extrapolating past the ends of the present data
    Interpolate,
}

/// Derived per-station fields computed after parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DerivedFields {
    /// sqrt(bx² + by²)
    pub horizontal_magnitude: bool,

    /// |dB/dt| of the horizontal components
    pub horizontal_rate: bool,

    /// sqrt(bx² + by² + bz²)
    pub total_magnitude: bool,
}

impl DerivedFields {
    /// All derived fields enabled
    pub fn all() -> Self {
        Self {
            horizontal_magnitude: true,
            horizontal_rate: true,
            total_magnitude: true,
        }
    }

    /// True if any derived field is requested
    pub fn any(&self) -> bool {
        self.horizontal_magnitude || self.horizontal_rate || self.total_magnitude
    }
}

/// Configuration for reading magnetometer files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Handling of sentinel-flagged values
    pub missing_data: MissingDataPolicy,

    /// Values at or above this are treated as missing
    pub sentinel: f64,

    /// Derived fields to compute after the read
    pub derived: DerivedFields,

    /// Station information table used to attach coordinates and local time
    pub station_info_path: Option<PathBuf>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            missing_data: MissingDataPolicy::Mask,
            sentinel: SENTINEL_VALUE,
            derived: DerivedFields::default(),
            station_info_path: None,
        }
    }
}

impl ReaderConfig {
    /// Interpolate over missing values instead of leaving them as NaN
    pub fn with_interpolation(mut self) -> Self {
        self.missing_data = MissingDataPolicy::Interpolate;
        self
    }

    /// Set the missing data policy
    pub fn with_missing_data(mut self, policy: MissingDataPolicy) -> Self {
        self.missing_data = policy;
        self
    }

    /// Set a custom sentinel threshold
    pub fn with_sentinel(mut self, sentinel: f64) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Select derived fields
    pub fn with_derived(mut self, derived: DerivedFields) -> Self {
        self.derived = derived;
        self
    }

    /// Attach station metadata from a SuperMAG station information table
    pub fn with_station_info(mut self, path: impl Into<PathBuf>) -> Self {
        self.station_info_path = Some(path.into());
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.sentinel.is_finite() || self.sentinel <= 0.0 {
            return Err(Error::configuration(format!(
                "sentinel must be a positive finite number, got {}",
                self.sentinel
            )));
        }
        if let Some(path) = &self.station_info_path {
            if path.as_os_str().is_empty() {
                return Err(Error::configuration("station_info_path is empty"));
            }
        }
        Ok(())
    }
}

/// Configuration for the SuperMAG web service client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Service base URL, ending with `/`
    pub base_url: String,

    /// SuperMAG user name used as the `logon` parameter
    pub logon: String,
}

impl RemoteConfig {
    /// Create a configuration for the public SuperMAG service
    pub fn new(logon: impl Into<String>) -> Self {
        Self {
            base_url: remote::BASE_URL.to_string(),
            logon: logon.into(),
        }
    }

    /// Point the client at another base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.logon.trim().is_empty() {
            return Err(Error::configuration("logon must not be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::configuration(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.missing_data, MissingDataPolicy::Mask);
        assert_eq!(config.sentinel, 999999.0);
        assert!(!config.derived.any());
        assert!(config.station_info_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ReaderConfig::default()
            .with_interpolation()
            .with_derived(DerivedFields::all())
            .with_station_info("/tmp/station_info.txt");

        assert_eq!(config.missing_data, MissingDataPolicy::Interpolate);
        assert!(config.derived.horizontal_rate);
        assert_eq!(
            config.station_info_path,
            Some(PathBuf::from("/tmp/station_info.txt"))
        );
    }

    #[test]
    fn test_invalid_sentinel() {
        assert!(ReaderConfig::default().with_sentinel(f64::NAN).validate().is_err());
        assert!(ReaderConfig::default().with_sentinel(-1.0).validate().is_err());
    }

    #[test]
    fn test_remote_config() {
        let config = RemoteConfig::new("user").with_base_url("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert!(config.validate().is_ok());

        assert!(RemoteConfig::new("  ").validate().is_err());
        assert!(
            RemoteConfig::new("user")
                .with_base_url("ftp://example.org")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ReaderConfig::default().with_interpolation();
        let json = serde_json::to_string(&config).unwrap();
        let back: ReaderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.missing_data, MissingDataPolicy::Interpolate);
    }
}
