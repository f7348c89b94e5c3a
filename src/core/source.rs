use crate::core::{ConfigProvider, Result, Vendor, VendorSource};
use crate::utils::error::FinderError;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches vendor records from the dataset endpoint with a single GET.
pub struct HttpVendorSource {
    client: Client,
    endpoint: String,
}

impl HttpVendorSource {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(config.user_agent()).map_err(|e| {
            FinderError::ConfigError {
                message: format!("Invalid user agent '{}': {}", config.user_agent(), e),
            }
        })?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint().to_string(),
        })
    }
}

#[async_trait::async_trait]
impl VendorSource for HttpVendorSource {
    async fn fetch(&self) -> Result<Vec<Vendor>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;

        // The endpoint answers 2xx with an empty body on occasion; that is
        // an empty dataset, not a decode failure.
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let vendors: Vec<Vendor> = serde_json::from_str(&body)?;
        Ok(vendors)
    }
}
