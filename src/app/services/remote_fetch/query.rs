//! Request URL construction

use chrono::{DateTime, Utc};

use crate::config::RemoteConfig;
use crate::constants::remote;
use crate::{Error, Result};

/// What a query asks the service for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The SuperMAG index products
    Indices,
    /// Magnetometer data for one station
    Station(String),
}

/// A time window plus a selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub selector: Selector,
}

impl RemoteQuery {
    pub fn indices(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            selector: Selector::Indices,
        }
    }

    pub fn station(code: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            selector: Selector::Station(code.into().to_uppercase()),
        }
    }

    /// Window length in whole seconds
    pub fn extent_seconds(&self) -> Result<i64> {
        let extent = (self.end - self.start).num_seconds();
        if extent <= 0 {
            return Err(Error::configuration(format!(
                "query end {} is not after start {}",
                self.end, self.start
            )));
        }
        Ok(extent)
    }

    /// Variables extracted from the response, `None` meaning every numeric field
    pub fn variables(&self) -> Option<&'static [&'static str]> {
        match self.selector {
            Selector::Indices => Some(remote::INDEX_VARIABLES),
            Selector::Station(_) => None,
        }
    }

    /// Full request URL for this query
    pub fn url(&self, config: &RemoteConfig) -> Result<String> {
        let extent = self.extent_seconds()?;
        let start = self.start.format(remote::START_FORMAT);

        let url = match &self.selector {
            Selector::Indices => format!(
                "{}{}?fmt=json&python&nohead&start={}&extent={:012}&logon={}&indices={}",
                config.base_url,
                remote::INDICES_ENDPOINT,
                start,
                extent,
                config.logon,
                remote::INDEX_REQUEST_KEYS.join(",")
            ),
            Selector::Station(code) => format!(
                "{}{}?fmt=json&nohead&start={}&extent={:012}&logon={}&station={}",
                config.base_url,
                remote::DATA_ENDPOINT,
                start,
                extent,
                config.logon,
                code
            ),
        };
        Ok(url)
    }
}
