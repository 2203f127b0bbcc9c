// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content type definitions
//!
//! These types mirror the JSON the content service speaks (camelCase
//! fields). Every section of [`SiteContent`] carries a serde default so a
//! snapshot cached by an older client version back-fills fields added
//! later with the type's identity value (empty list, empty object) instead
//! of failing to parse.

use serde::{Deserialize, Serialize};

/// The full site content snapshot.
///
/// Exactly one profile and one skills object exist at any time; the list
/// sections preserve their display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    /// Owner profile (singleton)
    pub profile: Profile,
    /// Work experience entries, in display order
    pub experience: Vec<Experience>,
    /// Project entries, in display order
    pub projects: Vec<Project>,
    /// Skill tag groupings (singleton)
    pub skills: Skills,
    /// Repository import configuration (singleton)
    pub github_config: GitHubConfig,
    /// Photo gallery entries, in display order
    pub photos: Vec<Photo>,
}

/// Profile of the site owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    /// ISO date string (YYYY-MM-DD)
    pub birth_date: String,
    pub major: String,
    pub education: String,
    pub current_employment: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub notable_projects: Vec<String>,
    pub resume_link: String,
    pub school_link: String,
    pub social_links: SocialLinks,
}

/// Contact/social links shown in the header and footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

/// A single work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    /// Stable opaque id, server-assigned or locally synthesized
    pub id: String,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub skills: Vec<String>,
    pub logo: String,
    pub website: String,
}

/// A project entry, either manually created or adopted from a repository
/// import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    /// Stable opaque id; imported projects use the derived `github-<id>`
    /// form so re-imports are detectable
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: String,
    pub skills: Vec<String>,
    pub github_link: String,
    pub live_link: String,
    pub image: String,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks: Option<u32>,
    pub source: ProjectSource,
}

/// Where a project record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSource {
    /// Created by hand in the admin UI
    #[default]
    Manual,
    /// Adopted from a repository import
    GitHub,
}

/// Skill tags grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub languages: Vec<String>,
    pub tools: Vec<String>,
    pub coursework: Vec<String>,
}

/// Configuration for the repository import engine.
///
/// Pinned and excluded names may overlap; exclusion always wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GitHubConfig {
    /// Account whose repositories are listed
    pub username: String,
    /// Personal access token, required to list private repositories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub include_private: bool,
    pub include_forks: bool,
    /// Repository names never offered as candidates
    pub exclude_repos: Vec<String>,
    /// Repository names shown first, in this order
    pub pinned_repos: Vec<String>,
}

/// A photo gallery entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Photo {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
