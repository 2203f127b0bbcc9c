//! Remote content service gateway
//!
//! This module abstracts the HTTP resource server behind the
//! [`ContentGateway`] trait so the content store can be tested against
//! mocks. The HTTP implementation speaks the service's JSON API:
//! - `GET /content` - full snapshot
//! - `PUT /{section}` - replace a singleton or a whole ordered list
//! - `POST /{section}` - create one item, appended at the end
//! - `DELETE /{section}/{id}` - remove one item

use serde::Deserialize;
use thiserror::Error;

#[cfg(feature = "remote-sync")]
use super::config::SyncConfig;
use super::types::{Experience, GitHubConfig, Photo, Profile, Project, SiteContent, Skills};

#[cfg(feature = "remote-sync")]
use reqwest::Client;

/// A full-snapshot response from the content service.
///
/// The profile is the validity marker: a payload without one is treated
/// as malformed and must not overwrite good local state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteContent {
    pub profile: Option<Profile>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub github_config: GitHubConfig,
    pub photos: Vec<Photo>,
}

impl RemoteContent {
    /// Convert into a snapshot, or `None` if the payload has no profile.
    pub fn into_snapshot(self) -> Option<SiteContent> {
        Some(SiteContent {
            profile: self.profile?,
            experience: self.experience,
            projects: self.projects,
            skills: self.skills,
            github_config: self.github_config,
            photos: self.photos,
        })
    }
}

/// Gateway to the remote content service.
///
/// One method per endpoint the service exposes. Replace (`put_*`) methods
/// echo the server-normalized value back; create (`post_*`) methods echo
/// the stored record including its assigned id.
#[allow(async_fn_in_trait)]
pub trait ContentGateway {
    /// Fetch the full content snapshot.
    async fn fetch_content(&self) -> Result<RemoteContent, GatewayError>;

    /// Replace the profile singleton.
    async fn put_profile(&self, profile: &Profile) -> Result<Profile, GatewayError>;

    /// Replace the skills singleton.
    async fn put_skills(&self, skills: &Skills) -> Result<Skills, GatewayError>;

    /// Replace the repository import configuration.
    async fn put_github_config(&self, config: &GitHubConfig) -> Result<GitHubConfig, GatewayError>;

    /// Replace the experience list, order included.
    async fn put_experience(&self, items: &[Experience]) -> Result<Vec<Experience>, GatewayError>;

    /// Replace the project list, order included.
    async fn put_projects(&self, items: &[Project]) -> Result<Vec<Project>, GatewayError>;

    /// Replace the photo list, order included.
    async fn put_photos(&self, items: &[Photo]) -> Result<Vec<Photo>, GatewayError>;

    /// Create one experience entry, appended at the end.
    async fn post_experience(&self, item: &Experience) -> Result<Experience, GatewayError>;

    /// Create one project entry, appended at the end.
    async fn post_project(&self, item: &Project) -> Result<Project, GatewayError>;

    /// Create one photo entry, appended at the end.
    async fn post_photo(&self, item: &Photo) -> Result<Photo, GatewayError>;

    /// Delete one experience entry by id.
    async fn delete_experience(&self, id: &str) -> Result<(), GatewayError>;

    /// Delete one project entry by id.
    async fn delete_project(&self, id: &str) -> Result<(), GatewayError>;

    /// Delete one photo entry by id.
    async fn delete_photo(&self, id: &str) -> Result<(), GatewayError>;
}

/// HTTP implementation of the content gateway
#[cfg(feature = "remote-sync")]
pub struct HttpGateway {
    client: Client,
    api_base: String,
}

#[cfg(feature = "remote-sync")]
impl HttpGateway {
    /// Create a new HTTP gateway from config
    pub fn new(config: &SyncConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "Folio/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, GatewayError> {
        let response = self.client.get(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::Http(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::Http(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::Http(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let response = self.client.delete(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::Http(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(feature = "remote-sync")]
impl ContentGateway for HttpGateway {
    async fn fetch_content(&self) -> Result<RemoteContent, GatewayError> {
        self.get_json("content").await
    }

    async fn put_profile(&self, profile: &Profile) -> Result<Profile, GatewayError> {
        self.put_json("profile", profile).await
    }

    async fn put_skills(&self, skills: &Skills) -> Result<Skills, GatewayError> {
        self.put_json("skills", skills).await
    }

    async fn put_github_config(&self, config: &GitHubConfig) -> Result<GitHubConfig, GatewayError> {
        self.put_json("github/config", config).await
    }

    async fn put_experience(&self, items: &[Experience]) -> Result<Vec<Experience>, GatewayError> {
        self.put_json("experience", items).await
    }

    async fn put_projects(&self, items: &[Project]) -> Result<Vec<Project>, GatewayError> {
        self.put_json("projects", items).await
    }

    async fn put_photos(&self, items: &[Photo]) -> Result<Vec<Photo>, GatewayError> {
        self.put_json("photos", items).await
    }

    async fn post_experience(&self, item: &Experience) -> Result<Experience, GatewayError> {
        self.post_json("experience", item).await
    }

    async fn post_project(&self, item: &Project) -> Result<Project, GatewayError> {
        self.post_json("projects", item).await
    }

    async fn post_photo(&self, item: &Photo) -> Result<Photo, GatewayError> {
        self.post_json("photos", item).await
    }

    async fn delete_experience(&self, id: &str) -> Result<(), GatewayError> {
        self.delete(&format!("experience/{id}")).await
    }

    async fn delete_project(&self, id: &str) -> Result<(), GatewayError> {
        self.delete(&format!("projects/{id}")).await
    }

    async fn delete_photo(&self, id: &str) -> Result<(), GatewayError> {
        self.delete(&format!("photos/{id}")).await
    }
}

/// Errors that can occur talking to the content service
#[derive(Debug, Error)]
pub enum GatewayError {
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

    /// Full-snapshot payload without a profile section
    #[error("Remote payload has no profile")]
    MissingProfile,
}
