use std::time::Duration;

/// Length of the exit transition played before an overlay unmounts.
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(300);

/// The single overlay the page shell is showing, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveOverlay {
    #[default]
    None,
    Resume,
    Skills,
    Experience,
    Projects,
    ProjectDetail(usize),
}

impl ActiveOverlay {
    pub fn is_open(&self) -> bool {
        *self != ActiveOverlay::None
    }

    pub fn project(&self) -> Option<usize> {
        match self {
            ActiveOverlay::ProjectDetail(i) => Some(*i),
            _ => None,
        }
    }

    /// Replaces whatever is open, returning the overlay it replaced.
    pub fn open(&mut self, next: ActiveOverlay) -> ActiveOverlay {
        std::mem::replace(self, next)
    }

    /// Closes `closing` if it is still the active overlay.
    ///
    /// Returns whether anything was closed.
    pub fn dismiss(&mut self, closing: ActiveOverlay) -> bool {
        if *self == closing && closing.is_open() {
            *self = ActiveOverlay::None;
            true
        } else {
            false
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            ActiveOverlay::None => None,
            ActiveOverlay::Resume => Some("Resume"),
            ActiveOverlay::Skills => Some("Skills"),
            ActiveOverlay::Experience => Some("Experience"),
            ActiveOverlay::Projects | ActiveOverlay::ProjectDetail(_) => Some("Projects"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_replaces_previous() {
        let mut overlay = ActiveOverlay::default();
        assert!(!overlay.is_open());
        assert_eq!(overlay.open(ActiveOverlay::Resume), ActiveOverlay::None);
        assert_eq!(overlay.open(ActiveOverlay::Skills), ActiveOverlay::Resume);
        assert_eq!(overlay, ActiveOverlay::Skills);
    }

    #[test]
    fn test_dismiss_active() {
        let mut overlay = ActiveOverlay::ProjectDetail(2);
        assert_eq!(overlay.project(), Some(2));
        assert!(overlay.dismiss(ActiveOverlay::ProjectDetail(2)));
        assert_eq!(overlay, ActiveOverlay::None);
    }

    #[test]
    fn test_stale_dismiss_keeps_new_overlay() {
        let mut overlay = ActiveOverlay::Resume;
        // resume close starts, skills opens before the transition ends
        overlay.open(ActiveOverlay::Skills);
        assert!(!overlay.dismiss(ActiveOverlay::Resume));
        assert_eq!(overlay, ActiveOverlay::Skills);

        let mut overlay = ActiveOverlay::ProjectDetail(0);
        overlay.open(ActiveOverlay::ProjectDetail(1));
        assert!(!overlay.dismiss(ActiveOverlay::ProjectDetail(0)));
        assert_eq!(overlay.project(), Some(1));
    }

    #[test]
    fn test_titles() {
        assert_eq!(ActiveOverlay::None.title(), None);
        assert_eq!(ActiveOverlay::ProjectDetail(3).title(), Some("Projects"));
    }
}
