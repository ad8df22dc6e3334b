use serde::Deserialize;

use crate::version::endpoint::Endpoint;

// =============================================================================
// Version-related constants
// =============================================================================

/// Delimiter separating version numbers from metadata when none is configured
/// (e.g. "1.2.3-SNAPSHOT")
pub const DEFAULT_META_DELIMITER: &str = "-";

/// Delimiter conventionally used by plugin builds (e.g. "1.2.3+dev")
pub const PLUGIN_META_DELIMITER: &str = "+";

// =============================================================================
// HTTP-related constants
// =============================================================================

/// Timeout for a single endpoint query in milliseconds (30 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30_000;

/// User-Agent sent with every endpoint query
pub const USER_AGENT: &str = concat!("plugin-update-check/", env!("CARGO_PKG_VERSION"));

/// Update checker configuration structure
///
/// Mirrors the builder: `resource` and `currentVersion` are required and are
/// validated by [`crate::version::checker::UpdateChecker::from_config`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    pub endpoint: Endpoint,
    pub resource: Option<String>,
    pub current_version: Option<String>,
    pub version_meta_delimiter: String,
    /// Request timeout in milliseconds
    pub timeout: u64,
    /// Overrides the endpoint's public API base URL
    pub base_url: Option<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            resource: None,
            current_version: None,
            version_meta_delimiter: DEFAULT_META_DELIMITER.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT_MS,
            base_url: None,
        }
    }
}
