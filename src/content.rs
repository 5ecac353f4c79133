use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Portfolio content not found")]
    NotFound,
    #[error("Couldn't parse portfolio content: {0}")]
    ParseError(String),
    #[error("Skill {name} has level {level}, expected 0-100")]
    InvalidSkillLevel { name: String, level: u8 },
    #[error("Portfolio has no projects")]
    NoProjects,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: SkillSet,
    pub experience: Vec<ExperienceEntry>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: Vec<String>,
    pub bio: String,
    pub photo: String,
    pub resume: String,
    pub availability: String,
    pub splash_greeting: String,
    pub splash_subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub role: String,
    pub date: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<Skill>,
    pub certifications: Vec<String>,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
}

impl Portfolio {
    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_slice(data).map_err(|e| ContentError::ParseError(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        if let Some(skill) = self.skills.technical.iter().find(|s| s.level > 100) {
            return Err(ContentError::InvalidSkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        Ok(())
    }
}

fn load() -> Result<Portfolio, ContentError> {
    let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::NotFound)?;
    Portfolio::from_json(&file.data)
}

/// The embedded portfolio, parsed once and shared for the life of the program.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "profile": {
            "name": "Test", "greeting": ["Hi"], "bio": "bio", "photo": "me.jpg",
            "resume": "cv.pdf", "availability": "open", "splash_greeting": "Hello",
            "splash_subtitle": "welcome"
        },
        "projects": [{
            "title": "P", "description": "d", "role": "r", "date": "2024", "tags": ["t"]
        }],
        "skills": {
            "technical": [{ "name": "Rust", "level": 80 }],
            "certifications": [],
            "achievements": []
        },
        "experience": [],
        "contact": {
            "email": "a@b.c", "phone": "1", "location": "x",
            "github": "https://github.com/x", "linkedin": "https://linkedin.com/in/x"
        }
    }"#;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = portfolio().expect("embedded portfolio should parse");
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.profile.greeting.is_empty());
        assert!(portfolio.skills.technical.iter().all(|s| s.level <= 100));
        assert!(portfolio.projects.iter().any(|p| p.images.len() >= 3));
    }

    #[test]
    fn test_optional_project_fields_default() {
        let portfolio = Portfolio::from_json(MINIMAL.as_bytes()).unwrap();
        let project = &portfolio.projects[0];
        assert!(project.images.is_empty());
        assert!(project.highlights.is_empty());
        assert_eq!(project.repository, None);
        assert_eq!(project.demo, None);
    }

    #[test]
    fn test_skill_level_over_100_rejected() {
        let json = MINIMAL.replace(r#""level": 80"#, r#""level": 101"#);
        let err = Portfolio::from_json(json.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            ContentError::InvalidSkillLevel {
                name: "Rust".to_string(),
                level: 101
            }
        );
    }

    #[test]
    fn test_empty_projects_rejected() {
        let start = MINIMAL.find(r#""projects""#).unwrap();
        let end = MINIMAL.find(r#""skills""#).unwrap();
        let json = format!("{}\"projects\": [],\n        {}", &MINIMAL[..start], &MINIMAL[end..]);
        assert_eq!(
            Portfolio::from_json(json.as_bytes()).unwrap_err(),
            ContentError::NoProjects
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Portfolio::from_json(b"{ not json"),
            Err(ContentError::ParseError(_))
        ));
    }
}
