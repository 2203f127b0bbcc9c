//! Repository Import Engine
//!
//! Produces a ranked, filtered, deduplicated list of import candidates
//! from a configured account, and maps a candidate to a project record on
//! adoption. Transport failures propagate unmodified; retry policy, if
//! any, belongs to the caller.

use std::cmp::Ordering;
use std::collections::HashSet;
use thiserror::Error;

use super::types::RepoCandidate;
use crate::content::{GitHubConfig, Project, ProjectSource};

/// Listing capability of a repository-hosting service.
///
/// Two endpoints: public repositories by account, and all repositories
/// owned by the authenticated user (public and private).
#[allow(async_fn_in_trait)]
pub trait RepoHost {
    /// List public repositories of the given account.
    async fn list_public(&self, username: &str) -> Result<Vec<RepoCandidate>, ImportError>;

    /// List all repositories owned by the token's user, private included.
    async fn list_owned(&self, token: &str) -> Result<Vec<RepoCandidate>, ImportError>;
}

/// Which listing endpoint to use, resolved once per call.
enum ListingStrategy<'a> {
    /// Token present and private repos requested
    Authenticated { token: &'a str },
    /// Public listing; private repos are unreachable without a token
    Public { username: &'a str },
}

impl<'a> ListingStrategy<'a> {
    fn resolve(config: &'a GitHubConfig) -> Self {
        let token = config.token.as_deref().filter(|t| !t.is_empty());
        match token {
            Some(token) if config.include_private => ListingStrategy::Authenticated { token },
            _ => ListingStrategy::Public {
                username: &config.username,
            },
        }
    }
}

/// Import engine over a repository host.
pub struct ImportEngine<H> {
    host: H,
}

impl<H: RepoHost> ImportEngine<H> {
    /// Create an engine backed by the given host.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Access to the backing host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// List import candidates for the configured account.
    ///
    /// An empty username is a no-op returning an empty list, not an error.
    /// Filtering order: exclusion set, private-unless-allowed,
    /// fork-unless-allowed. Pinned repositories come first in pin-list
    /// order; the rest follow by most recent push, descending. Candidates
    /// whose derived id is already in `adopted_ids` are dropped.
    pub async fn list_candidates(
        &self,
        config: &GitHubConfig,
        adopted_ids: &HashSet<String>,
    ) -> Result<Vec<RepoCandidate>, ImportError> {
        if config.username.is_empty() {
            return Ok(Vec::new());
        }

        let mut repos = match ListingStrategy::resolve(config) {
            ListingStrategy::Authenticated { token } => self.host.list_owned(token).await?,
            ListingStrategy::Public { username } => self.host.list_public(username).await?,
        };

        repos.retain(|repo| {
            !config.exclude_repos.contains(&repo.name)
                && (config.include_private || !repo.private)
                && (config.include_forks || !repo.fork)
                && !adopted_ids.contains(&derived_project_id(repo.id))
        });

        sort_candidates(&mut repos, &config.pinned_repos);
        Ok(repos)
    }
}

/// Pinned first in pin-list order, then by most recent push descending.
fn sort_candidates(repos: &mut [RepoCandidate], pinned: &[String]) {
    let pin_index = |name: &str| pinned.iter().position(|p| p == name);
    repos.sort_by(|a, b| match (pin_index(&a.name), pin_index(&b.name)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        // Fixed-format ISO 8601 UTC, so lexicographic == chronological
        (None, None) => b.pushed_at.cmp(&a.pushed_at),
    });
}

/// Derived project id for an external repository.
///
/// Deterministic in the external numeric id, so repeated imports of the
/// same repository are detectable.
pub fn derived_project_id(external_id: u64) -> String {
    format!("github-{external_id}")
}

/// Map a candidate to a project record. Pure; never touches the store.
pub fn adopt(candidate: &RepoCandidate) -> Project {
    let mut skills = Vec::new();
    if let Some(language) = &candidate.language {
        skills.push(language.clone());
    }
    skills.extend(candidate.topics.iter().take(5).cloned());

    Project {
        id: derived_project_id(candidate.id),
        name: display_name(&candidate.name),
        description: candidate
            .description
            .clone()
            .unwrap_or_else(|| "No description available".to_string()),
        date: candidate.created_at.get(..4).unwrap_or_default().to_string(),
        skills,
        github_link: candidate.html_url.clone(),
        live_link: candidate.homepage.clone().unwrap_or_default(),
        image: String::new(),
        is_private: candidate.private,
        stars: Some(candidate.stargazers_count),
        forks: Some(candidate.forks_count),
        source: ProjectSource::GitHub,
    }
}

/// Human-readable name from a repository slug: hyphens become spaces,
/// each word capitalized.
fn display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Errors that can occur fetching a repository listing
#[derive(Debug, Error)]
pub enum ImportError {
    /// HTTP error with status code
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Network/request error
    #[cfg(feature = "remote-sync")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
