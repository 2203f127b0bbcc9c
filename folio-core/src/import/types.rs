// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository listing types
//!
//! Field names follow the GitHub REST API v3 wire format (snake_case),
//! so candidates deserialize straight from a listing response.

use serde::{Deserialize, Serialize};

/// One item of a repository listing - not yet a project.
///
/// Everything except `id` and `name` is defaulted so partial listing
/// payloads still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoCandidate {
    /// Numeric id assigned by the hosting service
    pub id: u64,
    /// Repository slug (e.g., "my-cool-repo")
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    /// ISO 8601 timestamp
    #[serde(default)]
    pub created_at: String,
    /// ISO 8601 timestamp
    #[serde(default)]
    pub updated_at: String,
    /// ISO 8601 timestamp of the most recent push
    #[serde(default)]
    pub pushed_at: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
}
