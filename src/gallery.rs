use crate::image::PLACEHOLDER_IMAGE;

/// Wraparound cursor over a project's images, shared by the inline and fullscreen views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    index: usize,
    fullscreen: bool,
}

impl Gallery {
    pub fn new(images: Vec<String>) -> Self {
        let images = if images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            images
        };
        Self {
            images,
            index: 0,
            fullscreen: false,
        }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    pub fn previous(&mut self) {
        self.index = match self.index {
            0 => self.images.len() - 1,
            i => i - 1,
        };
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn has_many(&self) -> bool {
        self.images.len() > 1
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Leaves fullscreen. Returns `false` when there was nothing to leave, so
    /// the key belongs to the enclosing overlay.
    pub fn escape(&mut self) -> bool {
        std::mem::replace(&mut self.fullscreen, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;
    use crate::overlay::ActiveOverlay;

    fn gallery(n: usize) -> Gallery {
        Gallery::new((0..n).map(|i| format!("img-{i}.png")).collect())
    }

    #[test]
    fn test_next_wraps_after_full_cycle() {
        for n in 1..=5 {
            let mut g = gallery(n);
            for _ in 0..n {
                g.next();
            }
            assert_eq!(g.index(), 0, "n={n}");
        }
    }

    #[test]
    fn test_previous_from_start_goes_to_last() {
        for n in 1..=5 {
            let mut g = gallery(n);
            g.previous();
            assert_eq!(g.index(), n - 1);
        }
    }

    #[test]
    fn test_empty_list_uses_placeholder() {
        let mut g = Gallery::new(Vec::new());
        assert_eq!(g.counter(), "1 / 1");
        assert_eq!(g.current(), PLACEHOLDER_IMAGE);
        assert!(!g.has_many());
        g.next();
        g.previous();
        assert_eq!(g.index(), 0);
    }

    #[test]
    fn test_fullscreen_shares_index() {
        let mut g = gallery(3);
        g.next();
        g.toggle_fullscreen();
        assert!(g.is_fullscreen());
        assert_eq!(g.current(), "img-1.png");
        g.next();
        g.toggle_fullscreen();
        assert!(!g.is_fullscreen());
        assert_eq!(g.current(), "img-2.png");
        assert_eq!(g.counter(), "3 / 3");
    }

    #[test]
    fn test_escape_leaves_fullscreen_only() {
        let mut g = gallery(2);
        assert!(!g.escape());
        g.next();
        g.toggle_fullscreen();
        assert!(g.escape());
        assert!(!g.is_fullscreen());
        assert_eq!(g.index(), 1);
        assert!(!g.escape());
    }

    #[test]
    fn test_project_detail_gallery_scenario() {
        let portfolio = portfolio().unwrap();
        let index = portfolio
            .projects
            .iter()
            .position(|p| p.images.len() == 3)
            .expect("a project with three images");

        let mut overlay = ActiveOverlay::None;
        overlay.open(ActiveOverlay::ProjectDetail(index));
        let project = &portfolio.projects[overlay.project().unwrap()];

        let mut g = Gallery::new(project.images.clone());
        g.next();
        g.next();
        assert_eq!(g.index(), 2);
        g.next();
        assert_eq!(g.index(), 0);
    }
}
