//! Modrinth API implementation

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{http_client, send};
use crate::version::endpoint::{Endpoint, VersionSource};
use crate::version::error::EndpointError;

/// Version type marking a stable release
const RELEASE_VERSION_TYPE: &str = "release";

/// Entry of the project version list (newest first)
#[derive(Debug, Deserialize)]
struct ProjectVersion {
    version_number: Option<String>,
    version_type: Option<String>,
}

/// Queries the project version list and picks the first release
pub struct ModrinthEndpoint {
    client: Client,
    base_url: String,
}

impl ModrinthEndpoint {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.modrinth.com";

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl VersionSource for ModrinthEndpoint {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Modrinth
    }

    async fn fetch_latest_version(&self, resource: &str) -> Result<String, EndpointError> {
        let url = format!("{}/v2/project/{}/version", self.base_url, resource);
        debug!("Fetching Modrinth project versions: {}", url);

        let response = send(self.client.get(&url), resource).await?;

        let versions: Vec<ProjectVersion> = response.json().await.map_err(|e| {
            warn!("Failed to parse Modrinth versions response: {}", e);
            EndpointError::Format(e.to_string())
        })?;

        versions
            .into_iter()
            .filter(|v| v.version_type.as_deref() == Some(RELEASE_VERSION_TYPE))
            .find_map(|v| v.version_number)
            .ok_or_else(|| {
                EndpointError::Format(format!("No release versions found for {}", resource))
            })
    }
}
