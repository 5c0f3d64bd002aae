//! Mock Directory Service Implementation
//!
//! Programmable mock for dependency-substitution tests:
//! - `MockDirectoryService`: seeded organization/repository payloads
//! - Records every organization lookup for test assertions

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::{DirectoryError, DirectoryService, Organization, Repository};

/// Mock directory service with seeded payloads and lookup recording
#[derive(Debug, Clone, Default)]
pub struct MockDirectoryService {
    organizations: Arc<RwLock<HashMap<String, Organization>>>,
    repositories: Arc<RwLock<HashMap<String, Vec<Repository>>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockDirectoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an organization payload, keyed by its login
    pub fn insert_organization(&self, organization: Organization) {
        self.organizations
            .write()
            .unwrap()
            .insert(organization.login.clone(), organization);
    }

    /// Seed the repository list served for a `repos_url`
    pub fn set_repositories(&self, repos_url: &str, repos: Vec<Repository>) {
        self.repositories
            .write()
            .unwrap()
            .insert(repos_url.to_string(), repos);
    }

    /// Organization names looked up so far, in call order
    pub fn recorded_lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    /// Clear seeded payloads and recorded lookups
    pub fn reset(&self) {
        self.organizations.write().unwrap().clear();
        self.repositories.write().unwrap().clear();
        self.lookups.lock().unwrap().clear();
    }
}

#[async_trait::async_trait]
impl DirectoryService for MockDirectoryService {
    async fn fetch_organization(&self, name: &str) -> Result<Organization, DirectoryError> {
        tracing::info!(org = %name, "Mock directory: organization lookup");

        self.lookups.lock().unwrap().push(name.to_string());

        self.organizations
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(format!("Organization '{}' not found", name)))
    }

    async fn fetch_repositories(&self, repos_url: &str) -> Result<Vec<Repository>, DirectoryError> {
        tracing::info!(url = %repos_url, "Mock directory: repository list lookup");

        self.repositories
            .read()
            .unwrap()
            .get(repos_url)
            .cloned()
            .ok_or_else(|| {
                DirectoryError::NotFound(format!("Repository list '{}' not found", repos_url))
            })
    }
}
