use std::time::Duration;

pub const SPLASH_DURATION: Duration = Duration::from_millis(3000);

/// Full-screen greeting shown from mount until [`SPLASH_DURATION`] has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Splash {
    dismissed: bool,
}

impl Splash {
    pub fn is_visible(&self) -> bool {
        !self.dismissed
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Dismisses once `elapsed` time since mount reaches [`SPLASH_DURATION`].
    pub fn elapse(&mut self, elapsed: Duration) {
        if elapsed >= SPLASH_DURATION {
            self.dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_at_mount() {
        assert!(Splash::default().is_visible());
    }

    #[test]
    fn test_gone_after_splash_duration() {
        let mut splash = Splash::default();
        splash.elapse(Duration::from_millis(2999));
        assert!(splash.is_visible());
        splash.elapse(Duration::from_millis(3000));
        assert!(!splash.is_visible());
        splash.elapse(Duration::from_millis(10));
        assert!(!splash.is_visible());
    }

    #[test]
    fn test_dismiss() {
        let mut splash = Splash::default();
        splash.dismiss();
        assert!(!splash.is_visible());
    }
}
