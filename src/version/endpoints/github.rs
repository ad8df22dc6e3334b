//! GitHub Releases API implementation

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{http_client, send};
use crate::version::endpoint::{Endpoint, VersionSource};
use crate::version::error::EndpointError;

/// Response from the latest release API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Queries the latest (non-draft, non-prerelease) release of a repository
pub struct GitHubEndpoint {
    client: Client,
    base_url: String,
}

impl GitHubEndpoint {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.github.com";

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl VersionSource for GitHubEndpoint {
    fn endpoint(&self) -> Endpoint {
        Endpoint::GitHub
    }

    async fn fetch_latest_version(&self, resource: &str) -> Result<String, EndpointError> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, resource);
        debug!("Fetching GitHub latest release: {}", url);

        let request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        let response = send(request, resource).await?;

        let release: Release = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub release response: {}", e);
            EndpointError::Format(e.to_string())
        })?;

        Ok(release.tag_name)
    }
}
