use chrono::DateTime;
use thiserror::Error;

/// Asset prefix baked in by `build.rs` from `SITE_BASE_PATH` (or `PUBLIC_URL`).
pub const BASE_PATH: &str = env!("SITE_BASE_PATH");
pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base path must not contain whitespace: {0:?}")]
    Whitespace(String),
    #[error("base path must start with '/' or be an absolute http(s) URL: {0:?}")]
    NotRooted(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteConfig {
    base_path: String,
}

impl SiteConfig {
    /// Normalizes a raw base path. Empty and `/` both mean the site root.
    pub fn from_base_path(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ConfigError::Whitespace(raw.to_string()));
        }
        let base_path = trimmed.trim_end_matches('/');
        let rooted = base_path.is_empty()
            || base_path.starts_with('/')
            || base_path.starts_with("http://")
            || base_path.starts_with("https://");
        if !rooted {
            return Err(ConfigError::NotRooted(raw.to_string()));
        }
        Ok(Self {
            base_path: base_path.to_string(),
        })
    }

    /// Config for the compiled-in base path, falling back to the site root.
    pub fn current() -> Self {
        Self::from_base_path(BASE_PATH).unwrap_or_else(|e| {
            log::warn!("ignoring configured base path: {e}");
            Self::default()
        })
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Prefixes a site-relative path with the base path.
    pub fn asset(&self, path: &str) -> String {
        format!("{}/{}", self.base_path, path.trim_start_matches('/'))
    }
}

/// Month and year of the build, for the footer.
pub fn build_label() -> Option<String> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.format("%B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_base_paths() {
        for raw in ["", "/", "  /  "] {
            let config = SiteConfig::from_base_path(raw).unwrap();
            assert_eq!(config.base_path(), "");
            assert_eq!(config.asset("resume.pdf"), "/resume.pdf");
        }
    }

    #[test]
    fn test_sub_path_normalization() {
        let config = SiteConfig::from_base_path("/portfolio/").unwrap();
        assert_eq!(config.base_path(), "/portfolio");
        assert_eq!(
            config.asset("/assets/projects/a.png"),
            "/portfolio/assets/projects/a.png"
        );
    }

    #[test]
    fn test_absolute_url_base_path() {
        let config = SiteConfig::from_base_path("https://cdn.example.com/site/").unwrap();
        let url = config.asset("assets/a.png");
        assert_eq!(url, "https://cdn.example.com/site/assets/a.png");
        assert!(!url["https://".len()..].contains("//"));
    }

    #[test]
    fn test_invalid_base_paths() {
        assert!(matches!(
            SiteConfig::from_base_path("/has space"),
            Err(ConfigError::Whitespace(_))
        ));
        assert!(matches!(
            SiteConfig::from_base_path("relative/path"),
            Err(ConfigError::NotRooted(_))
        ));
    }

    #[test]
    fn test_build_label_parses() {
        assert!(build_label().is_some());
    }
}
