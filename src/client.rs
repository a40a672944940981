use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::config::Config;
use crate::models::DeviceRecord;

const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// ===== FETCHING =====

/// Retrieves the raw body behind a URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher. One GET per call, no retries, client default timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching device list from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .context("Device list request returned an error status")?;

        let body = response.bytes().context("Failed to read device list body")?;
        debug!("Received {} bytes", body.len());

        Ok(body.to_vec())
    }
}

// ===== PARSING =====

/// Decodes a device list. The top level must be a JSON array of device records.
pub fn parse_devices(body: &[u8]) -> Result<Vec<DeviceRecord>> {
    let records: Vec<DeviceRecord> =
        serde_json::from_slice(body).context("Failed to parse device list")?;
    debug!("Parsed {} device records", records.len());
    Ok(records)
}

// ===== CLIENT IMPLEMENTATION =====

#[derive(Debug)]
pub struct DevicesClient<F = HttpFetcher> {
    fetcher: F,
    config: Config,
}

impl DevicesClient<HttpFetcher> {
    /// Creates a client that fetches over HTTP.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new()?, config))
    }
}

impl<F: Fetch> DevicesClient<F> {
    pub fn with_fetcher(fetcher: F, config: Config) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches and decodes the device list in one step.
    pub fn fetch_devices(&self) -> Result<Vec<DeviceRecord>> {
        let body = self.fetcher.fetch(self.config.get_source_url())?;
        parse_devices(&body)
    }
}
