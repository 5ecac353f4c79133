//! Scroll-progress and the cosmetic transforms it drives.

/// How far an element has travelled through the viewport, in `[0, 1]`.
///
/// `0` when the element's top sits at the bottom edge of the viewport, `1` once
/// its bottom has passed the top edge.
pub fn scroll_progress(viewport_height: f64, element_top: f64, element_height: f64) -> f64 {
    let span = viewport_height + element_height;
    if !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    let progress = (viewport_height - element_top) / span;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Motion profile for a scroll-driven section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    /// Degrees the background ring turns over the full scroll.
    pub turn: f64,
    /// Extra scale the ring gains over the full scroll.
    pub growth: f64,
}

impl Parallax {
    pub const OVERLAY: Parallax = Parallax {
        turn: 920.0,
        growth: 1.0,
    };
    pub const CONTACT: Parallax = Parallax {
        turn: 720.0,
        growth: 0.5,
    };

    pub fn ring(&self, progress: f64) -> String {
        format!(
            "transform: rotate({}deg) scale({})",
            progress * self.turn,
            1.0 + progress * self.growth
        )
    }
}

pub fn grid_drift(progress: f64) -> String {
    format!("transform: translateY({}px)", progress * -20.0)
}

pub fn glow_drift(progress: f64) -> String {
    format!(
        "transform: translate({}px, {}px)",
        progress * 20.0,
        progress * -20.0
    )
}

/// Slides content down by up to `shift` pixels while fading by up to `fade`.
pub fn content_drift(progress: f64, shift: f64, fade: f64) -> String {
    format!(
        "transform: translateY({}px); opacity: {}",
        progress * shift,
        1.0 - progress * fade
    )
}

/// Zero-padded `NN/NN` marker for the section at `index` out of `total`.
pub fn position_label(index: usize, total: usize) -> String {
    format!("{:02}/{:02}", index + 1, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_at_viewport_edges() {
        // entering from the bottom
        assert_eq!(scroll_progress(800.0, 800.0, 400.0), 0.0);
        // fully scrolled past
        assert_eq!(scroll_progress(800.0, -400.0, 400.0), 1.0);
        // halfway
        assert_eq!(scroll_progress(800.0, 200.0, 400.0), 0.5);
    }

    #[test]
    fn test_progress_is_clamped() {
        let viewports = [1.0, 320.0, 1080.0];
        let heights = [0.0, 10.0, 2000.0];
        let tops = [-5000.0, -100.0, 0.0, 500.0, 5000.0];
        for h in viewports {
            for eh in heights {
                for t in tops {
                    let p = scroll_progress(h, t, eh);
                    assert!((0.0..=1.0).contains(&p), "h={h} eh={eh} t={t} p={p}");
                }
            }
        }
    }

    #[test]
    fn test_degenerate_input_is_zero() {
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 0.0, 10.0), 0.0);
        assert_eq!(scroll_progress(800.0, f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_styles() {
        assert_eq!(
            Parallax::OVERLAY.ring(0.5),
            "transform: rotate(460deg) scale(1.5)"
        );
        assert_eq!(
            Parallax::CONTACT.ring(1.0),
            "transform: rotate(720deg) scale(1.5)"
        );
        assert_eq!(grid_drift(1.0), "transform: translateY(-20px)");
        assert_eq!(
            content_drift(0.5, 100.0, 0.5),
            "transform: translateY(50px); opacity: 0.75"
        );
        assert_eq!(glow_drift(1.0), "transform: translate(20px, -20px)");
    }

    #[test]
    fn test_position_label() {
        assert_eq!(position_label(0, 4), "01/04");
        assert_eq!(position_label(9, 12), "10/12");
    }
}
