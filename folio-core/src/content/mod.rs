// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content synchronization module
//!
//! Holds the single in-memory view of the site content snapshot and keeps
//! it consistent with two collaborators:
//! - A durable local cache (single key, whole-snapshot writes)
//! - The remote content service (authoritative when reachable)
//!
//! Resolution order on startup is cache → bundled defaults. Remote writes
//! are best-effort: a failed write still applies the client value locally
//! so an edit is never lost.

mod cache;
mod config;
mod defaults;
mod gateway;
mod store;
mod types;

pub use cache::{CacheError, FileStore, KeyValueStore, MemoryStore};
pub use config::SyncConfig;
pub use defaults::bundled_content;
#[cfg(feature = "remote-sync")]
pub use gateway::HttpGateway;
pub use gateway::{ContentGateway, GatewayError, RemoteContent};
pub use store::{ContentStore, StoreError, StoreState, CACHE_KEY};
pub use types::{
    Experience, GitHubConfig, Photo, Profile, Project, ProjectSource, SiteContent, Skills,
    SocialLinks,
};
