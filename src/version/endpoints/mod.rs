//! Endpoint implementations for querying the latest version of a resource

pub mod github;
pub mod modrinth;
pub mod polymart;
pub mod spigot;

pub use github::GitHubEndpoint;
pub use modrinth::ModrinthEndpoint;
pub use polymart::PolymartEndpoint;
pub use spigot::SpigotEndpoint;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::warn;

use crate::config::USER_AGENT;
use crate::version::error::EndpointError;

/// Builds the HTTP client shared by every request of one endpoint
fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Sends a request and maps non-success statuses to [`EndpointError`]
async fn send(request: RequestBuilder, resource: &str) -> Result<Response, EndpointError> {
    let response = request.send().await?;
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(EndpointError::NotFound(resource.to_string()));
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        return Err(EndpointError::RateLimited {
            retry_after_secs: retry_after,
        });
    }

    if !status.is_success() {
        warn!("Endpoint returned status {}: {}", status, response.url());
        return Err(EndpointError::Status(status));
    }

    Ok(response)
}

/// Reads a plain-text body and returns its first line
async fn first_line(response: Response) -> Result<String, EndpointError> {
    let body = response.text().await?;
    match body.lines().next() {
        Some(line) if !line.is_empty() => Ok(line.to_string()),
        _ => Err(EndpointError::Format("Empty response body".to_string())),
    }
}
