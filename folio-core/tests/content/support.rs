//! Shared test support: a scriptable in-memory content gateway

use folio_core::content::{
    ContentGateway, Experience, GatewayError, GitHubConfig, Photo, Profile, Project,
    RemoteContent, Skills,
};

/// Mock gateway. Echoes writes back by default; `reject` makes every
/// call fail with HTTP 500 (the always-offline service).
#[derive(Default)]
pub struct MockGateway {
    pub reject: bool,
    /// Response for `fetch_content`; `None` answers HTTP 503
    pub fetch_payload: Option<RemoteContent>,
    /// Overrides the echo of `put_profile` (server-side normalization)
    pub profile_echo: Option<Profile>,
    /// Id assigned to id-less records on `post_*`
    pub minted_id: Option<String>,
}

impl MockGateway {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    fn gate(&self) -> Result<(), GatewayError> {
        if self.reject {
            Err(GatewayError::Http(500))
        } else {
            Ok(())
        }
    }

    fn mint(&self, id: &str) -> String {
        if id.is_empty() {
            self.minted_id.clone().unwrap_or_else(|| "srv-1".to_string())
        } else {
            id.to_string()
        }
    }
}

impl ContentGateway for MockGateway {
    async fn fetch_content(&self) -> Result<RemoteContent, GatewayError> {
        self.gate()?;
        self.fetch_payload.clone().ok_or(GatewayError::Http(503))
    }

    async fn put_profile(&self, profile: &Profile) -> Result<Profile, GatewayError> {
        self.gate()?;
        Ok(self.profile_echo.clone().unwrap_or_else(|| profile.clone()))
    }

    async fn put_skills(&self, skills: &Skills) -> Result<Skills, GatewayError> {
        self.gate()?;
        Ok(skills.clone())
    }

    async fn put_github_config(&self, config: &GitHubConfig) -> Result<GitHubConfig, GatewayError> {
        self.gate()?;
        Ok(config.clone())
    }

    async fn put_experience(&self, items: &[Experience]) -> Result<Vec<Experience>, GatewayError> {
        self.gate()?;
        Ok(items.to_vec())
    }

    async fn put_projects(&self, items: &[Project]) -> Result<Vec<Project>, GatewayError> {
        self.gate()?;
        Ok(items.to_vec())
    }

    async fn put_photos(&self, items: &[Photo]) -> Result<Vec<Photo>, GatewayError> {
        self.gate()?;
        Ok(items.to_vec())
    }

    async fn post_experience(&self, item: &Experience) -> Result<Experience, GatewayError> {
        self.gate()?;
        let mut item = item.clone();
        item.id = self.mint(&item.id);
        Ok(item)
    }

    async fn post_project(&self, item: &Project) -> Result<Project, GatewayError> {
        self.gate()?;
        let mut item = item.clone();
        item.id = self.mint(&item.id);
        Ok(item)
    }

    async fn post_photo(&self, item: &Photo) -> Result<Photo, GatewayError> {
        self.gate()?;
        let mut item = item.clone();
        item.id = self.mint(&item.id);
        Ok(item)
    }

    async fn delete_experience(&self, _id: &str) -> Result<(), GatewayError> {
        self.gate()
    }

    async fn delete_project(&self, _id: &str) -> Result<(), GatewayError> {
        self.gate()
    }

    async fn delete_photo(&self, _id: &str) -> Result<(), GatewayError> {
        self.gate()
    }
}
