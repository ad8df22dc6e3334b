//! SpigotMC legacy update API implementation

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::{first_line, http_client, send};
use crate::version::endpoint::{Endpoint, VersionSource};
use crate::version::error::EndpointError;

/// Queries `update.php`, which answers with the bare version string
pub struct SpigotEndpoint {
    client: Client,
    base_url: String,
}

impl SpigotEndpoint {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.spigotmc.org";

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl VersionSource for SpigotEndpoint {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Spigot
    }

    async fn fetch_latest_version(&self, resource: &str) -> Result<String, EndpointError> {
        let url = format!(
            "{}/legacy/update.php?resource={}",
            self.base_url, resource
        );
        debug!("Fetching Spigot resource: {}", url);

        let response = send(self.client.get(&url), resource).await?;
        first_line(response).await
    }
}
