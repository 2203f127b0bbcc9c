// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Folio Core Library
//!
//! Client-side core for a personal portfolio site: an in-memory content
//! store with durable local caching and best-effort remote synchronization,
//! plus an import engine that turns GitHub repository listings into
//! adoptable project records.

pub mod content;
pub mod import;

#[cfg(feature = "remote-sync")]
pub use content::HttpGateway;
pub use content::{
    CacheError, ContentGateway, ContentStore, Experience, FileStore, GatewayError, GitHubConfig,
    KeyValueStore, MemoryStore, Photo, Profile, Project, ProjectSource, RemoteContent,
    SiteContent, Skills, SocialLinks, StoreError, StoreState, SyncConfig,
};
#[cfg(feature = "remote-sync")]
pub use import::GitHubHost;
pub use import::{adopt, derived_project_id, ImportEngine, ImportError, RepoCandidate, RepoHost};
