//! GitHub listing client
//!
//! Speaks the GitHub REST API v3. Public listings need no credential;
//! the authenticated endpoint returns every repository the token's user
//! owns, private included.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;

use super::engine::{ImportError, RepoHost};
use super::types::RepoCandidate;

const GITHUB_API_BASE: &str = "https://api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// GitHub implementation of [`RepoHost`].
pub struct GitHubHost {
    client: Client,
    api_base: String,
}

impl GitHubHost {
    /// Create a client against the public GitHub API.
    pub fn new() -> Result<Self, ImportError> {
        Self::with_api_base(GITHUB_API_BASE)
    }

    /// Create a client against a custom API base (GitHub Enterprise, tests).
    pub fn with_api_base(api_base: impl Into<String>) -> Result<Self, ImportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!(
                "Folio/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.into(),
        })
    }

    async fn list(
        &self,
        url: String,
        token: Option<&str>,
    ) -> Result<Vec<RepoCandidate>, ImportError> {
        let mut request = self.client.get(&url).header(ACCEPT, ACCEPT_HEADER);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ImportError::Http(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

impl RepoHost for GitHubHost {
    async fn list_public(&self, username: &str) -> Result<Vec<RepoCandidate>, ImportError> {
        let url = format!(
            "{}/users/{}/repos?per_page=100&sort=updated",
            self.api_base, username
        );
        self.list(url, None).await
    }

    async fn list_owned(&self, token: &str) -> Result<Vec<RepoCandidate>, ImportError> {
        let url = format!(
            "{}/user/repos?per_page=100&sort=updated&affiliation=owner",
            self.api_base
        );
        self.list(url, Some(token)).await
    }
}
