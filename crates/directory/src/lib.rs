//! Courier Remote Directory Client
//!
//! Thin client for a public repository-hosting directory:
//! - GitHub REST API implementation for production
//! - Programmable mock for testing and development
//! - High-level `DirectoryClient` with license-based repository filtering
//!
//! Deliberately minimal: one lookup per call, no retries, no pagination,
//! no caching.

pub mod github;
pub mod mock;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Directory configuration error: {0}")]
    Configuration(String),

    #[error("Directory request error: {0}")]
    Request(String),

    #[error("Directory response error: {0}")]
    Response(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Organization metadata returned by the directory service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub login: String,
    pub repos_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public_repos: Option<i64>,
}

/// License attached to a repository record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A single repository record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub license: Option<License>,
}

/// True iff the repository carries a license whose key equals `license_key`.
///
/// Repositories without a license never match.
pub fn has_license(repo: &Repository, license_key: &str) -> bool {
    repo.license
        .as_ref()
        .map(|l| l.key == license_key)
        .unwrap_or(false)
}

/// Directory service configuration
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub provider: String,
    pub base_url: Option<String>,
}

impl DirectoryConfig {
    /// Create directory config from environment variables
    pub fn from_env() -> Result<Self, DirectoryError> {
        let provider =
            std::env::var("DIRECTORY_PROVIDER").unwrap_or_else(|_| "github".to_string());
        let base_url = std::env::var("DIRECTORY_BASE_URL").ok();

        Ok(Self { provider, base_url })
    }
}

/// Directory service trait for different directory backends
#[async_trait::async_trait]
pub trait DirectoryService: Send + Sync {
    /// Look up organization metadata by name. One outbound lookup, no retries.
    async fn fetch_organization(&self, name: &str) -> Result<Organization, DirectoryError>;

    /// Fetch the repository list behind an organization's `repos_url`.
    async fn fetch_repositories(&self, repos_url: &str) -> Result<Vec<Repository>, DirectoryError>;
}

/// Factory for creating DirectoryService implementations
pub struct DirectoryServiceFactory;

impl DirectoryServiceFactory {
    pub fn create(config: DirectoryConfig) -> Result<Box<dyn DirectoryService>, DirectoryError> {
        match config.provider.as_str() {
            "github" => {
                tracing::info!("Creating GitHub directory service");
                Ok(Box::new(github::GithubDirectoryService::new(
                    config.base_url,
                )))
            }
            "mock" => {
                tracing::info!("Creating mock directory service");
                Ok(Box::new(mock::MockDirectoryService::new()))
            }
            provider => Err(DirectoryError::Configuration(format!(
                "Unknown directory provider: {}. Supported providers: github, mock",
                provider
            ))),
        }
    }
}

/// High-level directory client composed over any `DirectoryService`
#[derive(Clone)]
pub struct DirectoryClient {
    service: Arc<dyn DirectoryService>,
}

impl DirectoryClient {
    pub fn new(service: Arc<dyn DirectoryService>) -> Self {
        Self { service }
    }

    /// Look up organization metadata by name
    pub async fn fetch_organization(&self, name: &str) -> Result<Organization, DirectoryError> {
        self.service.fetch_organization(name).await
    }

    /// List the organization's public repository names.
    ///
    /// With `license_key`, only names of repositories carrying that exact
    /// license key are returned; otherwise all names are returned.
    pub async fn list_public_repositories(
        &self,
        org: &str,
        license_key: Option<&str>,
    ) -> Result<Vec<String>, DirectoryError> {
        let organization = self.service.fetch_organization(org).await?;
        let repos = self
            .service
            .fetch_repositories(&organization.repos_url)
            .await?;

        let names = repos
            .into_iter()
            .filter(|repo| match license_key {
                Some(key) => has_license(repo, key),
                None => true,
            })
            .map(|repo| repo.name)
            .collect();

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockDirectoryService;

    fn repo(name: &str, license_key: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            license: license_key.map(|key| License {
                key: key.to_string(),
                name: None,
            }),
        }
    }

    fn org(login: &str, repos_url: &str) -> Organization {
        Organization {
            login: login.to_string(),
            repos_url: repos_url.to_string(),
            name: None,
            description: None,
            public_repos: None,
        }
    }

    #[test]
    fn test_has_license_matching_key() {
        let r = repo("r1", Some("mit"));
        assert!(has_license(&r, "mit"));
    }

    #[test]
    fn test_has_license_mismatched_key() {
        let r = repo("r1", Some("apache-2.0"));
        assert!(!has_license(&r, "mit"));
    }

    #[test]
    fn test_has_license_absent_license() {
        let r = repo("r1", None);
        assert!(!has_license(&r, "mit"));
    }

    #[tokio::test]
    async fn test_fetch_organization_single_lookup_identity() {
        let mock = MockDirectoryService::new();
        let expected = org("octocat", "https://api.example.com/orgs/octocat/repos");
        mock.insert_organization(expected.clone());

        let client = DirectoryClient::new(Arc::new(mock.clone()));
        let fetched = client.fetch_organization("octocat").await.unwrap();

        // Payload comes back unchanged and exactly one lookup went out
        assert_eq!(fetched, expected);
        assert_eq!(mock.recorded_lookups(), vec!["octocat".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_organization_unknown_name() {
        let mock = MockDirectoryService::new();
        let client = DirectoryClient::new(Arc::new(mock));

        let result = client.fetch_organization("nope").await;
        assert!(matches!(result, Err(DirectoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_public_repositories_no_filter_returns_all_names() {
        let mock = MockDirectoryService::new();
        let repos_url = "https://api.example.com/orgs/octocat/repos";
        mock.insert_organization(org("octocat", repos_url));
        mock.set_repositories(repos_url, vec![repo("r1", None), repo("r2", None)]);

        let client = DirectoryClient::new(Arc::new(mock));
        let names = client
            .list_public_repositories("octocat", None)
            .await
            .unwrap();

        assert_eq!(names, vec!["r1".to_string(), "r2".to_string()]);
    }

    #[tokio::test]
    async fn test_list_public_repositories_filters_by_license() {
        let mock = MockDirectoryService::new();
        let repos_url = "https://api.example.com/orgs/octocat/repos";
        mock.insert_organization(org("octocat", repos_url));
        mock.set_repositories(
            repos_url,
            vec![
                repo("licensed", Some("apache-2.0")),
                repo("other-license", Some("mit")),
                repo("unlicensed", None),
            ],
        );

        let client = DirectoryClient::new(Arc::new(mock));
        let names = client
            .list_public_repositories("octocat", Some("apache-2.0"))
            .await
            .unwrap();

        assert_eq!(names, vec!["licensed".to_string()]);
    }

    #[test]
    fn test_factory_mock_succeeds() {
        let config = DirectoryConfig {
            provider: "mock".to_string(),
            base_url: None,
        };
        assert!(DirectoryServiceFactory::create(config).is_ok());
    }

    #[test]
    fn test_factory_github_succeeds() {
        let config = DirectoryConfig {
            provider: "github".to_string(),
            base_url: Some("https://github.example.com".to_string()),
        };
        assert!(DirectoryServiceFactory::create(config).is_ok());
    }

    #[test]
    fn test_factory_unknown_provider() {
        let config = DirectoryConfig {
            provider: "gitlab".to_string(),
            base_url: None,
        };
        let result = DirectoryServiceFactory::create(config);
        let err = match result {
            Err(e) => e,
            Ok(_) => panic!("Expected error"),
        };
        assert!(err
            .to_string()
            .contains("Unknown directory provider: gitlab"));
    }

    #[test]
    fn test_repository_deserializes_without_license() {
        let json = r#"{"name": "r1"}"#;
        let r: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(r.name, "r1");
        assert!(r.license.is_none());
    }

    #[test]
    fn test_organization_deserializes_minimal_payload() {
        let json = r#"{"login": "octocat", "repos_url": "https://api.example.com/orgs/octocat/repos"}"#;
        let o: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(o.login, "octocat");
        assert!(o.name.is_none());
        assert!(o.public_repos.is_none());
    }
}
