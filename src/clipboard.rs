use std::time::Duration;

/// How long the "copied" check mark stays up after a copy.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// When and how to clear the indicator after a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub token: u64,
    pub after: Duration,
}

/// Which contact field was copied most recently, if its feedback is still showing.
///
/// Every copy bumps a generation counter; an expiry only clears the indicator
/// when it carries the latest generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyIndicator {
    label: Option<String>,
    generation: u64,
}

impl CopyIndicator {
    /// Marks `label` as copied. The returned token must be passed to
    /// [`expire`](Self::expire) once `after` has elapsed.
    pub fn copied(&mut self, label: &str) -> Expiry {
        self.generation += 1;
        self.label = Some(label.to_string());
        Expiry {
            token: self.generation,
            after: COPY_FEEDBACK,
        }
    }

    pub fn expire(&mut self, token: u64) {
        if token == self.generation {
            self.label = None;
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_copied(&self, label: &str) -> bool {
        self.label() == Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_then_expire() {
        let mut indicator = CopyIndicator::default();
        assert_eq!(indicator.label(), None);
        let expiry = indicator.copied("Email");
        assert!(indicator.is_copied("Email"));
        assert!(!indicator.is_copied("Phone"));
        indicator.expire(expiry.token);
        assert_eq!(indicator.label(), None);
    }

    #[test]
    fn test_earlier_expiry_does_not_clear_later_copy() {
        let mut indicator = CopyIndicator::default();
        let first = indicator.copied("Email").token;
        let second = indicator.copied("Phone").token;
        indicator.expire(first);
        assert_eq!(indicator.label(), Some("Phone"));
        indicator.expire(second);
        assert_eq!(indicator.label(), None);
    }

    #[test]
    fn test_copy_clears_after_two_seconds() {
        let mut indicator = CopyIndicator::default();
        let expiry = indicator.copied("Email");
        assert_eq!(expiry.after, Duration::from_millis(2000));
        assert!(indicator.is_copied("Email"));
        indicator.expire(expiry.token);
        assert!(!indicator.is_copied("Email"));
    }
}
