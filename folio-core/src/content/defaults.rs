//! Bundled default content - compiled into the binary
//!
//! Used when the local cache is empty or unreadable, so the site always
//! has something to render before the first successful sync.

use super::types::{GitHubConfig, Profile, Project, SiteContent, Skills, SocialLinks};

/// Build the bundled default content snapshot.
pub fn bundled_content() -> SiteContent {
    SiteContent {
        profile: bundled_profile(),
        experience: Vec::new(),
        projects: bundled_projects(),
        skills: bundled_skills(),
        github_config: GitHubConfig::default(),
        photos: Vec::new(),
    }
}

fn bundled_profile() -> Profile {
    Profile {
        name: "Your Name".to_string(),
        title: "Software Engineer".to_string(),
        birth_date: String::new(),
        major: "Computer Science".to_string(),
        education: "Your University".to_string(),
        current_employment: String::new(),
        bio: "Welcome to my portfolio. Edit this profile from the admin page."
            .to_string(),
        interests: vec!["Programming".to_string(), "Open Source".to_string()],
        notable_projects: Vec::new(),
        resume_link: String::new(),
        school_link: String::new(),
        social_links: SocialLinks {
            email: String::new(),
            github: String::new(),
            linkedin: String::new(),
        },
    }
}

fn bundled_projects() -> Vec<Project> {
    vec![Project {
        id: "sample-project".to_string(),
        name: "Sample Project".to_string(),
        description: "An example project entry. Replace it with your own work."
            .to_string(),
        date: "2024".to_string(),
        skills: vec!["Rust".to_string()],
        ..Default::default()
    }]
}

fn bundled_skills() -> Skills {
    Skills {
        languages: vec!["Rust".to_string(), "TypeScript".to_string()],
        tools: vec!["Git".to_string(), "Linux".to_string()],
        coursework: Vec::new(),
    }
}
