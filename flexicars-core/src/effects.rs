//! State behind the decorative page effects: navbar scroll state, one-shot reveal
//! animations, card hover lift and carousel stepping.

/// Whether the navbar should carry its `scrolled` class.
#[must_use]
pub fn nav_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Entry animation state of an observed element.
///
/// One-shot: once revealed, leaving the viewport does not reset it, so an element
/// animates at most once per mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Pending,
    Revealed,
}

impl Reveal {
    #[must_use]
    pub const fn observe(self, intersecting: bool) -> Self {
        match (self, intersecting) {
            (Self::Pending, false) => Self::Pending,
            _ => Self::Revealed,
        }
    }

    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// Extra class applied on top of `fade-in` / `slide-up`.
    #[must_use]
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::Pending => None,
            Self::Revealed => Some("animate"),
        }
    }
}

/// Inline style for a hoverable card; `None` until the pointer first enters.
#[must_use]
pub const fn lift_style(hovered: Option<bool>) -> Option<&'static str> {
    match hovered {
        None => None,
        Some(true) => Some("transform: translateY(-10px)"),
        Some(false) => Some("transform: translateY(0)"),
    }
}

/// Slide after `current`, or `None` at the end when wraparound is off.
#[must_use]
pub const fn next_slide(current: usize, len: usize, wrap: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if current + 1 < len {
        Some(current + 1)
    } else if wrap {
        Some(0)
    } else {
        None
    }
}

/// Slide before `current`, or `None` at the start when wraparound is off.
#[must_use]
pub const fn prev_slide(current: usize, len: usize, wrap: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if current > 0 && current < len {
        Some(current - 1)
    } else if wrap {
        Some(len - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!nav_scrolled(100.0, 100.0));
        assert!(nav_scrolled(100.5, 100.0));
        assert!(!nav_scrolled(0.0, 100.0));
    }

    #[test]
    fn reveal_is_one_shot() {
        let state = Reveal::default();
        assert_eq!(state.observe(false), Reveal::Pending);
        let shown = state.observe(true);
        assert!(shown.is_revealed());
        assert_eq!(shown.observe(false), Reveal::Revealed);
        assert_eq!(shown.class(), Some("animate"));
        assert_eq!(Reveal::Pending.class(), None);
    }

    #[test]
    fn lift_follows_pointer() {
        assert_eq!(lift_style(None), None);
        assert_eq!(lift_style(Some(true)), Some("transform: translateY(-10px)"));
        assert_eq!(lift_style(Some(false)), Some("transform: translateY(0)"));
    }

    #[test]
    fn carousel_steps_wrap_when_enabled() {
        assert_eq!(next_slide(0, 3, true), Some(1));
        assert_eq!(next_slide(2, 3, true), Some(0));
        assert_eq!(next_slide(2, 3, false), None);
        assert_eq!(prev_slide(0, 3, true), Some(2));
        assert_eq!(prev_slide(0, 3, false), None);
        assert_eq!(next_slide(0, 0, true), None);
    }
}
