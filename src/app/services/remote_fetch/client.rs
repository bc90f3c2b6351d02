//! Blocking HTTP client for the SuperMAG service

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use tracing::{debug, info};

use super::query::RemoteQuery;
use super::records::{Record, flatten_records};
use crate::app::services::index_parser::IndexDataset;
use crate::config::RemoteConfig;
use crate::{Error, Result};

/// Client issuing one blocking request per query, without retries
#[derive(Debug, Clone)]
pub struct RemoteClient {
    config: RemoteConfig,
    http: Client,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        config.validate()?;
        let http = Client::builder().build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Fetch the SuperMAG indices between `start` and `end`
    pub fn fetch_index(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<IndexDataset> {
        self.fetch(&RemoteQuery::indices(start, end))
    }

    /// Fetch magnetometer data for one station between `start` and `end`
    pub fn fetch_station(
        &self,
        code: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<IndexDataset> {
        self.fetch(&RemoteQuery::station(code, start, end))
    }

    /// Run a query and flatten the response
    pub fn fetch(&self, query: &RemoteQuery) -> Result<IndexDataset> {
        let url = query.url(&self.config)?;
        info!("Fetching {:?} from {}", query.selector, self.config.base_url);

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::remote_fetch(format!(
                "service returned HTTP {}",
                status
            )));
        }

        let body = response.text()?;
        let records = decode_body(&body)?;
        debug!("Received {} records", records.len());

        flatten_records(&records, query.variables(), &self.config.base_url)
    }
}

/// Decode a response body, surfacing service error text when it is not JSON
pub fn decode_body(body: &str) -> Result<Vec<Record>> {
    serde_json::from_str::<Vec<Record>>(body).map_err(|e| {
        let excerpt: String = body.trim().chars().take(120).collect();
        Error::RemoteFetch {
            message: format!("unexpected response: {}", excerpt),
            source: Some(Box::new(e)),
        }
    })
}
