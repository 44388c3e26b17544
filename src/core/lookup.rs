use crate::core::{AreaLookup, ConfigProvider, ServiceArea};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Area lookup backed by the storefront REST API. No timeout or retry here;
/// callers impose their own if they need one.
pub struct HttpAreaLookup {
    client: Client,
    base_url: String,
}

impl HttpAreaLookup {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.lookup_endpoint().to_string())
    }
}

#[async_trait]
impl AreaLookup for HttpAreaLookup {
    async fn areas_by_pincode(&self, pincode: &str) -> Result<Vec<ServiceArea>> {
        let url = format!("{}/areas", self.base_url.trim_end_matches('/'));
        tracing::debug!("Looking up service areas at {} for pincode {}", url, pincode);

        let response = self
            .client
            .get(&url)
            .query(&[("pincode", pincode)])
            .send()
            .await?;

        tracing::debug!("Area lookup response status: {}", response.status());

        let areas: Vec<ServiceArea> = response.error_for_status()?.json().await?;
        Ok(areas)
    }
}
