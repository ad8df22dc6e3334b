//! Update checking against a remote endpoint

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::{CheckerConfig, DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_META_DELIMITER};
use crate::version::endpoint::{Endpoint, VersionSource};
use crate::version::error::{BuildError, CheckError};
use crate::version::types::Version;

/// Compares a known current [`Version`] against the latest version
/// published on an [`Endpoint`]
///
/// Immutable once built; cloning is cheap and clones share the HTTP client.
#[derive(Clone)]
pub struct UpdateChecker {
    source: Arc<dyn VersionSource>,
    current_version: Version,
    version_meta_delimiter: String,
    resource: String,
}

impl UpdateChecker {
    pub fn builder() -> UpdateCheckerBuilder {
        UpdateCheckerBuilder::default()
    }

    /// Build a checker from deserialized configuration
    ///
    /// `current_version` is parsed with the configured metadata delimiter.
    pub fn from_config(config: &CheckerConfig) -> Result<Self, BuildError> {
        let current_version = config
            .current_version
            .as_deref()
            .ok_or(BuildError::MissingCurrentVersion)?;
        let current_version =
            Version::parse_with_delimiter(current_version, &config.version_meta_delimiter)?;

        let mut builder = Self::builder()
            .endpoint(config.endpoint)
            .current_version(current_version)
            .version_meta_delimiter(config.version_meta_delimiter.as_str())
            .timeout(Duration::from_millis(config.timeout));
        if let Some(resource) = &config.resource {
            builder = builder.resource(resource.as_str());
        }
        if let Some(base_url) = &config.base_url {
            builder = builder.base_url(base_url.as_str());
        }
        builder.build()
    }

    pub fn endpoint(&self) -> Endpoint {
        self.source.endpoint()
    }

    pub fn current_version(&self) -> &Version {
        &self.current_version
    }

    pub fn version_meta_delimiter(&self) -> &str {
        &self.version_meta_delimiter
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Query the endpoint and parse the latest version, surfacing any failure
    pub async fn latest_version(&self) -> Result<Version, CheckError> {
        let raw = self.source.fetch_latest_version(&self.resource).await?;
        Ok(Version::parse_with_delimiter(&raw, &self.version_meta_delimiter)?)
    }

    /// Query the endpoint for the latest version
    ///
    /// Never fails: if the query or the parse fails, the latest version falls
    /// back to the current version, which reads as up to date.
    pub async fn check(&self) -> Completed {
        let latest_version = match self.latest_version().await {
            Ok(latest) => {
                debug!(
                    "Checked {}/{}: current {}, latest {}",
                    self.endpoint(),
                    self.resource,
                    self.current_version,
                    latest
                );
                latest
            }
            Err(e) => {
                warn!(
                    "Failed to check {}/{} for updates: {}",
                    self.endpoint(),
                    self.resource,
                    e
                );
                self.current_version.clone()
            }
        };

        Completed {
            current_version: self.current_version.clone(),
            latest_version,
        }
    }

    /// Run [`UpdateChecker::check`] as a task on the current tokio runtime
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn_check(&self) -> JoinHandle<Completed> {
        let checker = self.clone();
        tokio::spawn(async move { checker.check().await })
    }
}

impl fmt::Debug for UpdateChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateChecker")
            .field("endpoint", &self.endpoint())
            .field("current_version", &self.current_version)
            .field("version_meta_delimiter", &self.version_meta_delimiter)
            .field("resource", &self.resource)
            .finish()
    }
}

/// Builder for [`UpdateChecker`]
///
/// `current_version` and `resource` are required. The endpoint defaults to
/// [`Endpoint::Spigot`] and the metadata delimiter to [`DEFAULT_META_DELIMITER`].
#[derive(Default)]
pub struct UpdateCheckerBuilder {
    endpoint: Endpoint,
    current_version: Option<Version>,
    version_meta_delimiter: Option<String>,
    resource: Option<String>,
    timeout: Option<Duration>,
    base_url: Option<String>,
    source: Option<Arc<dyn VersionSource>>,
}

impl UpdateCheckerBuilder {
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn current_version(mut self, current_version: Version) -> Self {
        self.current_version = Some(current_version);
        self
    }

    /// Delimiter used to split metadata off the fetched latest version
    pub fn version_meta_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.version_meta_delimiter = Some(delimiter.into());
        self
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Request timeout, defaults to [`DEFAULT_FETCH_TIMEOUT_MS`]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the endpoint's API base URL (e.g., a mirror)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Query a custom source instead of a built-in endpoint
    ///
    /// Takes precedence over [`UpdateCheckerBuilder::endpoint`].
    pub fn source(mut self, source: Arc<dyn VersionSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn build(self) -> Result<UpdateChecker, BuildError> {
        let current_version = self
            .current_version
            .ok_or(BuildError::MissingCurrentVersion)?;
        let resource = self.resource.ok_or(BuildError::MissingResource)?;

        let source = match self.source {
            Some(source) => source,
            None => self.endpoint.source(
                self.base_url.as_deref(),
                self.timeout
                    .unwrap_or(Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS)),
            )?,
        };

        Ok(UpdateChecker {
            source,
            current_version,
            version_meta_delimiter: self
                .version_meta_delimiter
                .unwrap_or_else(|| DEFAULT_META_DELIMITER.to_string()),
            resource,
        })
    }
}

/// Result of a single [`UpdateChecker::check`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    current_version: Version,
    latest_version: Version,
}

impl Completed {
    pub fn current_version(&self) -> &Version {
        &self.current_version
    }

    pub fn latest_version(&self) -> &Version {
        &self.latest_version
    }

    /// Whether the current version is at least the latest version
    pub fn is_up_to_date(&self) -> bool {
        self.current_version >= self.latest_version
    }

    pub fn is_update_available(&self) -> bool {
        !self.is_up_to_date()
    }
}
