//! Polymart API implementation

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::{first_line, http_client, send};
use crate::version::endpoint::{Endpoint, VersionSource};
use crate::version::error::EndpointError;

/// Queries `getResourceInfoSimple` with `key=version`, which answers in plain text
pub struct PolymartEndpoint {
    client: Client,
    base_url: String,
}

impl PolymartEndpoint {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.polymart.org";

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl VersionSource for PolymartEndpoint {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Polymart
    }

    async fn fetch_latest_version(&self, resource: &str) -> Result<String, EndpointError> {
        let url = format!(
            "{}/v1/getResourceInfoSimple/?resource_id={}&key=version",
            self.base_url, resource
        );
        debug!("Fetching Polymart resource: {}", url);

        let response = send(self.client.get(&url), resource).await?;
        first_line(response).await
    }
}
