//! Version source test utilities

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use plugin_update_check::{Endpoint, EndpointError, VersionSource};

/// Source that always answers with the same version string
pub struct StaticSource {
    version: String,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VersionSource for StaticSource {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Spigot
    }

    async fn fetch_latest_version(&self, _resource: &str) -> Result<String, EndpointError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.version.clone())
    }
}

/// Source whose every query fails with a not-found error
pub struct FailingSource;

#[async_trait]
impl VersionSource for FailingSource {
    fn endpoint(&self) -> Endpoint {
        Endpoint::GitHub
    }

    async fn fetch_latest_version(&self, resource: &str) -> Result<String, EndpointError> {
        Err(EndpointError::NotFound(resource.to_string()))
    }
}

/// Base URL of a local port with nothing listening on it
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
