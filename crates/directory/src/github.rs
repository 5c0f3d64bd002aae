//! GitHub REST API implementation
//!
//! Calls the GitHub organizations API (https://api.github.com/orgs/{org})
//! using reqwest HTTP client.

use reqwest::Client;
use serde::Deserialize;

use crate::{DirectoryError, DirectoryService, Organization, Repository};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github+json";
const USER_AGENT: &str = "courier-directory";

/// GitHub API error response
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// GitHub-backed directory service implementation
pub struct GithubDirectoryService {
    client: Client,
    base_url: String,
}

impl GithubDirectoryService {
    /// Create a new GitHub directory service
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        not_found: String,
    ) -> Result<T, DirectoryError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_HEADER)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| DirectoryError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound(not_found));
        }

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            // Try to parse as API error
            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&error_body) {
                return Err(DirectoryError::Response(format!(
                    "Directory API error ({}): {}",
                    status, error_response.message
                )));
            }

            return Err(DirectoryError::Response(format!(
                "Directory API returned {}: {}",
                status, error_body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DirectoryError::Response(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait::async_trait]
impl DirectoryService for GithubDirectoryService {
    async fn fetch_organization(&self, name: &str) -> Result<Organization, DirectoryError> {
        let url = format!("{}/orgs/{}", self.base_url, name);

        tracing::debug!(org = %name, "Fetching organization metadata");

        self.get_json(&url, format!("Organization '{}' not found", name))
            .await
    }

    async fn fetch_repositories(&self, repos_url: &str) -> Result<Vec<Repository>, DirectoryError> {
        tracing::debug!(url = %repos_url, "Fetching repository list");

        self.get_json(repos_url, format!("Repository list '{}' not found", repos_url))
            .await
    }
}
