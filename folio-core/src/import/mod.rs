// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository import module
//!
//! Reconciles a GitHub repository listing with locally stored project
//! records: fetch (public or authenticated, chosen by capability), filter
//! by the configured policy, order (pinned first, then recent activity),
//! and deduplicate against projects already adopted.
//!
//! Candidates are ephemeral; they become [`Project`](crate::content::Project)
//! records only through explicit adoption, and adoption never mutates the
//! content store itself.

mod engine;
#[cfg(feature = "remote-sync")]
mod github;
mod types;

pub use engine::{adopt, derived_project_id, ImportEngine, ImportError, RepoHost};
#[cfg(feature = "remote-sync")]
pub use github::GitHubHost;
pub use types::RepoCandidate;
