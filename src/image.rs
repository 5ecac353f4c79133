//! Fallback ladder for project images.

use crate::config::SiteConfig;

pub const PLACEHOLDER_IMAGE: &str = "placeholder-project.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    Loading,
    Loaded,
    Error,
}

/// Candidate URLs for one image name, tried in order until one loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLadder {
    name: String,
    candidates: Vec<String>,
    cursor: usize,
    state: ImageState,
}

impl ImageLadder {
    pub fn new(config: &SiteConfig, name: &str) -> Self {
        let candidates = vec![
            config.asset(&format!("assets/projects/{name}")),
            config.asset(&format!("assets/{name}")),
            config.asset(name),
            config.asset(&format!("assets/projects/{PLACEHOLDER_IMAGE}")),
        ];
        Self {
            name: name.to_string(),
            candidates,
            cursor: 0,
            state: ImageState::Loading,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ImageState {
        self.state
    }

    pub fn current_src(&self) -> &str {
        &self.candidates[self.cursor]
    }

    pub fn on_load(&mut self) {
        if self.state == ImageState::Loading {
            self.state = ImageState::Loaded;
        }
    }

    /// Moves to the next candidate, or to [`ImageState::Error`] once none remain.
    pub fn on_error(&mut self) {
        if self.state != ImageState::Loading {
            return;
        }
        if self.cursor + 1 >= self.candidates.len() {
            log::warn!("no candidate path loaded for image {}", self.name);
            self.state = ImageState::Error;
            return;
        }
        log::debug!("image {} failed at {}", self.name, self.current_src());
        self.cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(name: &str) -> ImageLadder {
        let config = SiteConfig::from_base_path("/site").unwrap();
        ImageLadder::new(&config, name)
    }

    #[test]
    fn test_candidate_order() {
        let mut l = ladder("shot.png");
        let mut seen = vec![l.current_src().to_string()];
        for _ in 0..3 {
            l.on_error();
            seen.push(l.current_src().to_string());
        }
        assert_eq!(
            seen,
            vec![
                "/site/assets/projects/shot.png",
                "/site/assets/shot.png",
                "/site/shot.png",
                "/site/assets/projects/placeholder-project.jpg",
            ]
        );
        assert_eq!(l.state(), ImageState::Loading);
    }

    #[test]
    fn test_load_on_second_candidate() {
        let mut l = ladder("shot.png");
        l.on_error();
        l.on_load();
        assert_eq!(l.state(), ImageState::Loaded);
        assert_eq!(l.current_src(), "/site/assets/shot.png");
    }

    #[test]
    fn test_exhausted_ladder_ends_in_error() {
        let mut l = ladder("missing.png");
        for _ in 0..4 {
            l.on_error();
        }
        assert_eq!(l.state(), ImageState::Error);
        assert_ne!(l.state(), ImageState::Loading);
    }

    #[test]
    fn test_terminal_states_ignore_signals() {
        let mut l = ladder("missing.png");
        for _ in 0..4 {
            l.on_error();
        }
        l.on_load();
        assert_eq!(l.state(), ImageState::Error);

        let mut l = ladder("shot.png");
        l.on_load();
        l.on_error();
        assert_eq!(l.state(), ImageState::Loaded);
        assert_eq!(l.current_src(), "/site/assets/projects/shot.png");
    }
}
