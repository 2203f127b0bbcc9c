// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Store - single authoritative in-memory view of the snapshot
//!
//! The store mediates between three parties:
//! - The durable local cache (hydration source, write-through target)
//! - The remote content service (authoritative when reachable)
//! - The presentation layer (reads state, invokes mutators)
//!
//! Failures are never fatal: a failed remote write still applies the
//! client value locally and persists it, then re-raises the error so the
//! caller can report "saved locally only". The last good snapshot keeps
//! serving throughout.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use super::cache::{CacheError, KeyValueStore};
use super::defaults::bundled_content;
use super::gateway::{ContentGateway, GatewayError};
use super::types::{Experience, GitHubConfig, Photo, Profile, Project, SiteContent, Skills};

/// Cache key holding the whole serialized snapshot.
pub const CACHE_KEY: &str = "site-content";

/// Lifecycle state of the store.
///
/// There is no error state: failures degrade to the last good snapshot
/// plus a recorded error, and the store keeps serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Created but not yet hydrated from the cache
    Hydrating,
    /// Serving the current snapshot
    Ready,
    /// A remote refresh is in flight; reads are not blocked
    Refreshing,
}

/// In-memory content store with durable fallback and best-effort remote
/// synchronization.
pub struct ContentStore<G, C> {
    gateway: G,
    cache: C,
    snapshot: SiteContent,
    state: StoreState,
    last_error: Option<String>,
}

impl<G: ContentGateway, C: KeyValueStore> ContentStore<G, C> {
    /// Create a new store. Call [`hydrate`](Self::hydrate) before first use.
    pub fn new(gateway: G, cache: C) -> Self {
        Self {
            gateway,
            cache,
            snapshot: SiteContent::default(),
            state: StoreState::Hydrating,
            last_error: None,
        }
    }

    /// Load the snapshot from the cache, falling back to bundled defaults.
    ///
    /// Never fails: an absent or unparseable cache entry means defaults.
    /// A parseable entry from an older format back-fills missing sections
    /// via serde defaults. Idempotent.
    pub fn hydrate(&mut self) {
        self.snapshot = match self.cache.read(CACHE_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    log::warn!("cached snapshot unreadable, using bundled defaults: {err}");
                    bundled_content()
                }
            },
            None => bundled_content(),
        };
        self.state = StoreState::Ready;
    }

    /// Current snapshot.
    pub fn content(&self) -> &SiteContent {
        &self.snapshot
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StoreState {
        self.state
    }

    /// True while a remote refresh is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.state == StoreState::Refreshing
    }

    /// Reason for the most recent failure, if the last operation failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Access to the cache (for advanced operations)
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Pull the full snapshot from the remote content service.
    ///
    /// A payload without a profile is discarded as malformed; any failure
    /// leaves the in-memory snapshot and cache untouched. Re-entrant calls
    /// are allowed; the last completed call wins.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        self.state = StoreState::Refreshing;
        let fetched = self.gateway.fetch_content().await;
        self.state = StoreState::Ready;

        let remote = match fetched {
            Ok(remote) => remote,
            Err(err) => {
                self.last_error = Some(err.to_string());
                return Err(StoreError::Remote(err));
            }
        };

        let Some(snapshot) = remote.into_snapshot() else {
            let err = GatewayError::MissingProfile;
            self.last_error = Some(err.to_string());
            return Err(StoreError::Remote(err));
        };

        log::debug!("adopted remote snapshot");
        self.snapshot = snapshot;
        self.commit()
    }

    /// Replace the profile, remote-first with local fallback.
    pub async fn update_profile(&mut self, profile: Profile) -> Result<(), StoreError> {
        match self.gateway.put_profile(&profile).await {
            Ok(server) => {
                self.snapshot.profile = server;
                self.commit()
            }
            Err(err) => {
                self.snapshot.profile = profile;
                self.fall_back(err)
            }
        }
    }

    /// Replace the experience list, remote-first with local fallback.
    pub async fn update_experience(&mut self, items: Vec<Experience>) -> Result<(), StoreError> {
        match self.gateway.put_experience(&items).await {
            Ok(server) => {
                self.snapshot.experience = server;
                self.commit()
            }
            Err(err) => {
                self.snapshot.experience = items;
                self.fall_back(err)
            }
        }
    }

    /// Replace the project list, remote-first with local fallback.
    pub async fn update_projects(&mut self, items: Vec<Project>) -> Result<(), StoreError> {
        match self.gateway.put_projects(&items).await {
            Ok(server) => {
                self.snapshot.projects = server;
                self.commit()
            }
            Err(err) => {
                self.snapshot.projects = items;
                self.fall_back(err)
            }
        }
    }

    /// Replace the skills, remote-first with local fallback.
    pub async fn update_skills(&mut self, skills: Skills) -> Result<(), StoreError> {
        match self.gateway.put_skills(&skills).await {
            Ok(server) => {
                self.snapshot.skills = server;
                self.commit()
            }
            Err(err) => {
                self.snapshot.skills = skills;
                self.fall_back(err)
            }
        }
    }

    /// Replace the repository import config, remote-first with local fallback.
    pub async fn update_github_config(&mut self, config: GitHubConfig) -> Result<(), StoreError> {
        match self.gateway.put_github_config(&config).await {
            Ok(server) => {
                self.snapshot.github_config = server;
                self.commit()
            }
            Err(err) => {
                self.snapshot.github_config = config;
                self.fall_back(err)
            }
        }
    }

    /// Replace the photo list, remote-first with local fallback.
    pub async fn update_photos(&mut self, items: Vec<Photo>) -> Result<(), StoreError> {
        match self.gateway.put_photos(&items).await {
            Ok(server) => {
                self.snapshot.photos = server;
                self.commit()
            }
            Err(err) => {
                self.snapshot.photos = items;
                self.fall_back(err)
            }
        }
    }

    /// Create one experience entry, appended at the end.
    ///
    /// On remote failure the entry is kept locally with a synthesized id.
    pub async fn add_experience(&mut self, item: Experience) -> Result<(), StoreError> {
        match self.gateway.post_experience(&item).await {
            Ok(created) => {
                self.snapshot.experience.push(created);
                self.commit()
            }
            Err(err) => {
                let mut item = item;
                if item.id.is_empty() {
                    item.id = local_id();
                }
                self.snapshot.experience.push(item);
                self.fall_back(err)
            }
        }
    }

    /// Create one project entry, appended at the end.
    pub async fn add_project(&mut self, item: Project) -> Result<(), StoreError> {
        match self.gateway.post_project(&item).await {
            Ok(created) => {
                self.snapshot.projects.push(created);
                self.commit()
            }
            Err(err) => {
                let mut item = item;
                if item.id.is_empty() {
                    item.id = local_id();
                }
                self.snapshot.projects.push(item);
                self.fall_back(err)
            }
        }
    }

    /// Create one photo entry, appended at the end.
    pub async fn add_photo(&mut self, item: Photo) -> Result<(), StoreError> {
        match self.gateway.post_photo(&item).await {
            Ok(created) => {
                self.snapshot.photos.push(created);
                self.commit()
            }
            Err(err) => {
                let mut item = item;
                if item.id.is_empty() {
                    item.id = local_id();
                }
                self.snapshot.photos.push(item);
                self.fall_back(err)
            }
        }
    }

    /// Delete one experience entry. Local removal happens on either path.
    pub async fn remove_experience(&mut self, id: &str) -> Result<(), StoreError> {
        let result = self.gateway.delete_experience(id).await;
        self.snapshot.experience.retain(|item| item.id != id);
        match result {
            Ok(()) => self.commit(),
            Err(err) => self.fall_back(err),
        }
    }

    /// Delete one project entry. Local removal happens on either path.
    pub async fn remove_project(&mut self, id: &str) -> Result<(), StoreError> {
        let result = self.gateway.delete_project(id).await;
        self.snapshot.projects.retain(|item| item.id != id);
        match result {
            Ok(()) => self.commit(),
            Err(err) => self.fall_back(err),
        }
    }

    /// Delete one photo entry. Local removal happens on either path.
    pub async fn remove_photo(&mut self, id: &str) -> Result<(), StoreError> {
        let result = self.gateway.delete_photo(id).await;
        self.snapshot.photos.retain(|item| item.id != id);
        match result {
            Ok(()) => self.commit(),
            Err(err) => self.fall_back(err),
        }
    }

    /// Replace the snapshot with bundled defaults and rewrite the cache.
    /// No remote call is made.
    pub fn reset_to_defaults(&mut self) -> Result<(), StoreError> {
        self.snapshot = bundled_content();
        self.commit()
    }

    /// Serialize the current snapshot as pretty-printed JSON.
    pub fn export_snapshot(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.snapshot)?)
    }

    /// Persist and clear the error flag after a successful operation.
    fn commit(&mut self) -> Result<(), StoreError> {
        self.persist()?;
        self.last_error = None;
        Ok(())
    }

    /// Persist the locally-applied value after a remote failure, then
    /// re-raise the error so the caller can signal degraded state.
    fn fall_back(&mut self, err: GatewayError) -> Result<(), StoreError> {
        log::warn!("remote write failed, value kept locally: {err}");
        self.persist()?;
        self.last_error = Some(err.to_string());
        Err(StoreError::Remote(err))
    }

    /// Write the full snapshot to the cache, wholesale.
    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.snapshot)?;
        self.cache.write(CACHE_KEY, &raw)?;
        Ok(())
    }
}

/// Synthesize an id for an entry created while the service is unreachable.
///
/// Time-based with a process-wide counter so two creates in the same
/// clock tick still get distinct ids. Disjoint by prefix from
/// server-assigned and derived ids.
fn local_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("local-{nanos}-{seq}")
}

/// Errors that can occur in the content store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Remote service failure; the local value was kept and persisted
    #[error("Remote sync failed: {0}")]
    Remote(GatewayError),

    /// Cache write failure
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Snapshot serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
