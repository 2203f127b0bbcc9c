// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for ImportEngine
//!
//! Filter order, pinning, deduplication, listing-strategy selection, and
//! the pure candidate-to-project mapping.

use std::cell::RefCell;
use std::collections::HashSet;

use folio_core::content::{GitHubConfig, ProjectSource};
use folio_core::import::{adopt, derived_project_id, ImportEngine, ImportError, RepoCandidate, RepoHost};

/// Scriptable host that records which listing endpoint was used.
#[derive(Default)]
struct MockHost {
    public: Vec<RepoCandidate>,
    owned: Vec<RepoCandidate>,
    fail: Option<u16>,
    calls: RefCell<Vec<&'static str>>,
}

impl RepoHost for MockHost {
    async fn list_public(&self, _username: &str) -> Result<Vec<RepoCandidate>, ImportError> {
        self.calls.borrow_mut().push("public");
        if let Some(status) = self.fail {
            return Err(ImportError::Http(status));
        }
        Ok(self.public.clone())
    }

    async fn list_owned(&self, _token: &str) -> Result<Vec<RepoCandidate>, ImportError> {
        self.calls.borrow_mut().push("owned");
        if let Some(status) = self.fail {
            return Err(ImportError::Http(status));
        }
        Ok(self.owned.clone())
    }
}

fn repo(id: u64, name: &str) -> RepoCandidate {
    RepoCandidate {
        id,
        name: name.to_string(),
        ..Default::default()
    }
}

fn config(username: &str) -> GitHubConfig {
    GitHubConfig {
        username: username.to_string(),
        ..Default::default()
    }
}

fn no_adopted() -> HashSet<String> {
    HashSet::new()
}

#[tokio::test]
async fn test_empty_username_is_a_noop() {
    let host = MockHost {
        public: vec![repo(1, "a")],
        ..Default::default()
    };
    let engine = ImportEngine::new(host);

    let candidates = engine
        .list_candidates(&config(""), &no_adopted())
        .await
        .unwrap();

    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_filters_private_and_fork_items() {
    let host = MockHost {
        public: vec![
            RepoCandidate {
                private: true,
                ..repo(1, "a")
            },
            RepoCandidate {
                fork: true,
                ..repo(2, "b")
            },
            repo(3, "c"),
        ],
        ..Default::default()
    };
    let engine = ImportEngine::new(host);

    let candidates = engine
        .list_candidates(&config("octo"), &no_adopted())
        .await
        .unwrap();

    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["c"]);
}

#[tokio::test]
async fn test_include_flags_keep_private_and_forks() {
    let host = MockHost {
        public: vec![
            RepoCandidate {
                private: true,
                ..repo(1, "a")
            },
            RepoCandidate {
                fork: true,
                ..repo(2, "b")
            },
        ],
        ..Default::default()
    };
    let engine = ImportEngine::new(host);
    let config = GitHubConfig {
        username: "octo".to_string(),
        include_private: true,
        include_forks: true,
        ..Default::default()
    };

    let candidates = engine.list_candidates(&config, &no_adopted()).await.unwrap();
    assert_eq!(candidates.len(), 2);
}

#[tokio::test]
async fn test_exclusion_wins_over_pinning() {
    let host = MockHost {
        public: vec![repo(1, "keep"), repo(2, "drop")],
        ..Default::default()
    };
    let engine = ImportEngine::new(host);
    let config = GitHubConfig {
        username: "octo".to_string(),
        exclude_repos: vec!["drop".to_string()],
        pinned_repos: vec!["drop".to_string(), "keep".to_string()],
        ..Default::default()
    };

    let candidates = engine.list_candidates(&config, &no_adopted()).await.unwrap();

    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["keep"]);
}

#[tokio::test]
async fn test_pinned_come_first_regardless_of_timestamp() {
    let host = MockHost {
        public: vec![
            RepoCandidate {
                pushed_at: "2024-06-01T00:00:00Z".to_string(),
                ..repo(1, "x")
            },
            RepoCandidate {
                pushed_at: "2020-01-01T00:00:00Z".to_string(),
                ..repo(2, "y")
            },
        ],
        ..Default::default()
    };
    let engine = ImportEngine::new(host);
    let config = GitHubConfig {
        username: "octo".to_string(),
        pinned_repos: vec!["y".to_string()],
        ..Default::default()
    };

    let candidates = engine.list_candidates(&config, &no_adopted()).await.unwrap();

    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["y", "x"]);
}

#[tokio::test]
async fn test_pinned_order_follows_pin_list_not_fetch_order() {
    let host = MockHost {
        public: vec![repo(1, "a"), repo(2, "b"), repo(3, "c")],
        ..Default::default()
    };
    let engine = ImportEngine::new(host);
    let config = GitHubConfig {
        username: "octo".to_string(),
        pinned_repos: vec!["c".to_string(), "a".to_string()],
        ..Default::default()
    };

    let candidates = engine.list_candidates(&config, &no_adopted()).await.unwrap();

    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[tokio::test]
async fn test_unpinned_ordered_by_recent_push() {
    let host = MockHost {
        public: vec![
            RepoCandidate {
                pushed_at: "2021-01-01T00:00:00Z".to_string(),
                ..repo(1, "old")
            },
            RepoCandidate {
                pushed_at: "2024-01-01T00:00:00Z".to_string(),
                ..repo(2, "new")
            },
            RepoCandidate {
                pushed_at: "2022-01-01T00:00:00Z".to_string(),
                ..repo(3, "mid")
            },
        ],
        ..Default::default()
    };
    let engine = ImportEngine::new(host);

    let candidates = engine
        .list_candidates(&config("octo"), &no_adopted())
        .await
        .unwrap();

    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["new", "mid", "old"]);
}

#[tokio::test]
async fn test_dedup_on_reimport() {
    let host = MockHost {
        public: vec![repo(7, "done"), repo(8, "fresh")],
        ..Default::default()
    };
    let engine = ImportEngine::new(host);

    // First import adopted repo 7; its derived id is now taken
    let adopted: HashSet<String> = [derived_project_id(7)].into_iter().collect();
    let candidates = engine
        .list_candidates(&config("octo"), &adopted)
        .await
        .unwrap();

    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["fresh"]);
}

#[tokio::test]
async fn test_authenticated_listing_needs_token_and_flag() {
    let cases = [
        (Some("tok"), true, "owned"),
        (Some("tok"), false, "public"),
        (None, true, "public"),
        (Some(""), true, "public"),
    ];

    for (token, include_private, expected) in cases {
        let host = MockHost::default();
        let engine = ImportEngine::new(host);
        let config = GitHubConfig {
            username: "octo".to_string(),
            token: token.map(String::from),
            include_private,
            ..Default::default()
        };

        engine.list_candidates(&config, &no_adopted()).await.unwrap();
        assert_eq!(engine.host().calls.borrow().as_slice(), [expected]);
    }
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let host = MockHost {
        fail: Some(502),
        ..Default::default()
    };
    let engine = ImportEngine::new(host);

    let result = engine.list_candidates(&config("octo"), &no_adopted()).await;

    assert!(matches!(result, Err(ImportError::Http(502))));
}

#[test]
fn test_adopt_maps_candidate_to_project() {
    let candidate = RepoCandidate {
        id: 42,
        name: "my-cool-repo".to_string(),
        description: Some("Does things".to_string()),
        html_url: "https://github.com/octo/my-cool-repo".to_string(),
        homepage: Some("https://example.com".to_string()),
        language: Some("Rust".to_string()),
        topics: vec!["cli".to_string(), "tools".to_string()],
        stargazers_count: 12,
        forks_count: 3,
        created_at: "2023-05-01T12:00:00Z".to_string(),
        private: true,
        ..Default::default()
    };

    let project = adopt(&candidate);

    assert_eq!(project.id, "github-42");
    assert_eq!(project.name, "My Cool Repo");
    assert_eq!(project.description, "Does things");
    assert_eq!(project.date, "2023");
    assert_eq!(project.skills, ["Rust", "cli", "tools"]);
    assert_eq!(project.github_link, "https://github.com/octo/my-cool-repo");
    assert_eq!(project.live_link, "https://example.com");
    assert!(project.is_private);
    assert_eq!(project.stars, Some(12));
    assert_eq!(project.forks, Some(3));
    assert_eq!(project.source, ProjectSource::GitHub);
}

#[test]
fn test_adopt_caps_topics_at_five() {
    let candidate = RepoCandidate {
        id: 1,
        name: "tagged".to_string(),
        topics: (1..=8).map(|n| format!("t{n}")).collect(),
        ..Default::default()
    };

    let project = adopt(&candidate);

    // No language, so all skills come from topics
    assert_eq!(project.skills.len(), 5);
    assert_eq!(project.skills[0], "t1");
}

#[test]
fn test_adopt_falls_back_on_missing_fields() {
    let candidate = repo(9, "bare");

    let project = adopt(&candidate);

    assert_eq!(project.description, "No description available");
    assert_eq!(project.live_link, "");
    assert_eq!(project.date, "");
    assert!(project.skills.is_empty());
}

#[test]
fn test_adopt_is_idempotent_per_external_id() {
    let candidate = repo(5, "thing");
    assert_eq!(adopt(&candidate).id, adopt(&candidate).id);
}
