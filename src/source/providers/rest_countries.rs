//! REST Countries (https://restcountries.com) data source.
//!
//! Two endpoints are used:
//! - `GET {base}/all?fields=name,cca2` for the country list
//! - `GET {base}/alpha/{code}` for a single country's detail

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::source::{CountryDetailRecord, CountrySource, CountrySummaryRecord, SourceError};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// REST Countries v3.1 source
pub struct RestCountriesSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesSource {
    /// Creates a new source with no transport timeout.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public v3.1 API)
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a new source whose requests give up after `timeout`.
    pub fn with_timeout(base_url: Option<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Config(e.to_string()))?;
        Ok(Self {
            base_url: normalize_base_url(base_url),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a GET request and decodes the JSON array it returns.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, SourceError> {
        let response = request
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("REST Countries response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("REST Countries error: HTTP {} for {}", status, response.url());
            return Err(SourceError::Status(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

fn normalize_base_url(base_url: Option<String>) -> String {
    base_url
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn list_countries(&self) -> Result<Vec<CountrySummaryRecord>, SourceError> {
        info!("Requesting country list from {}", self.base_url);
        let request = self
            .client
            .get(format!("{}/all", self.base_url))
            .query(&[("fields", "name,cca2")]);
        self.get_json(request).await
    }

    async fn country_by_code(&self, code: &str) -> Result<Vec<CountryDetailRecord>, SourceError> {
        info!("Requesting country detail for {}", code);
        let request = self
            .client
            .get(format!("{}/alpha/{}", self.base_url, code.trim()));
        self.get_json(request).await
    }
}
