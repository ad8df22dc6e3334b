//! Remote services that report the latest published version of a resource

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;

use crate::version::endpoints::{
    GitHubEndpoint, ModrinthEndpoint, PolymartEndpoint, SpigotEndpoint,
};
use crate::version::error::{EndpointError, ParseEndpointError};

/// Known endpoints from which the latest version can be queried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// SpigotMC legacy update API, keyed by numeric resource ID
    #[default]
    Spigot,
    /// Polymart simple resource info API, keyed by numeric resource ID
    Polymart,
    /// Modrinth project versions, keyed by project ID or slug
    Modrinth,
    /// GitHub latest release, keyed by "owner/repo"
    GitHub,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Spigot,
        Endpoint::Polymart,
        Endpoint::Modrinth,
        Endpoint::GitHub,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Spigot => "spigot",
            Endpoint::Polymart => "polymart",
            Endpoint::Modrinth => "modrinth",
            Endpoint::GitHub => "github",
        }
    }

    /// Base URL of the public API behind this endpoint
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Endpoint::Spigot => SpigotEndpoint::DEFAULT_BASE_URL,
            Endpoint::Polymart => PolymartEndpoint::DEFAULT_BASE_URL,
            Endpoint::Modrinth => ModrinthEndpoint::DEFAULT_BASE_URL,
            Endpoint::GitHub => GitHubEndpoint::DEFAULT_BASE_URL,
        }
    }

    /// Creates the query implementation for this endpoint
    ///
    /// `base_url` falls back to [`Endpoint::default_base_url`] when `None`.
    pub fn source(
        self,
        base_url: Option<&str>,
        timeout: Duration,
    ) -> Result<Arc<dyn VersionSource>, reqwest::Error> {
        let base_url = base_url.unwrap_or_else(|| self.default_base_url());
        let source: Arc<dyn VersionSource> = match self {
            Endpoint::Spigot => Arc::new(SpigotEndpoint::new(base_url, timeout)?),
            Endpoint::Polymart => Arc::new(PolymartEndpoint::new(base_url, timeout)?),
            Endpoint::Modrinth => Arc::new(ModrinthEndpoint::new(base_url, timeout)?),
            Endpoint::GitHub => Arc::new(GitHubEndpoint::new(base_url, timeout)?),
        };
        Ok(source)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = ParseEndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEndpointError(s.to_string()))
    }
}

/// Trait for querying the latest published version of a resource
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Returns the endpoint this implementation queries
    fn endpoint(&self) -> Endpoint;

    /// Fetches the raw latest version string for a resource
    ///
    /// # Arguments
    /// * `resource` - Endpoint-specific identifier (e.g., "97144" for Spigot,
    ///   "owner/repo" for GitHub)
    ///
    /// # Returns
    /// * `Ok(String)` - The version string exactly as published
    /// * `Err(EndpointError)` - If the request fails or the response has an unexpected shape
    async fn fetch_latest_version(&self, resource: &str) -> Result<String, EndpointError>;
}
