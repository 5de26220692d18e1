use crate::state::PageState;

pub const THROTTLE_WINDOW_MS: f64 = 16.0;
pub const SCROLLED_AFTER: f64 = 50.0;
pub const NAVBAR_SLIDE_AFTER: f64 = 200.0;
pub const BACK_TO_TOP_AFTER: f64 = 500.0;
pub const HIGHLIGHT_PROBE: f64 = 100.0;
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

pub struct Throttle {
    window_ms: f64,
    last_fired_ms: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_fired_ms: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.last_fired_ms {
            Some(last) if now_ms - last < self.window_ms => false,
            _ => {
                self.last_fired_ms = Some(now_ms);
                true
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub direction: ScrollDirection,
}

impl ScrollSnapshot {
    pub fn capture(offset: f64, last_offset: f64) -> Self {
        let direction = if offset > last_offset {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        Self { offset, direction }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavbarSlide {
    Visible,
    Hidden,
}

impl NavbarSlide {
    pub fn transform(self) -> &'static str {
        match self {
            Self::Visible => "translateY(0)",
            Self::Hidden => "translateY(-100%)",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, offset: f64) -> bool {
        let start = self.top - HIGHLIGHT_PROBE;
        offset >= start && offset < start + self.height
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollDirectives {
    pub scrolled: bool,
    pub navbar: NavbarSlide,
    pub back_to_top: bool,
    pub active_section: Option<usize>,
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_AFTER
}

pub fn navbar_slide(snapshot: ScrollSnapshot) -> NavbarSlide {
    if snapshot.offset > NAVBAR_SLIDE_AFTER && snapshot.direction == ScrollDirection::Down {
        NavbarSlide::Hidden
    } else {
        NavbarSlide::Visible
    }
}

pub fn back_to_top_visible(offset: f64) -> bool {
    offset > BACK_TO_TOP_AFTER
}

// Overlapping spans resolve to the last match in document order.
pub fn active_section(offset: f64, sections: &[SectionSpan]) -> Option<usize> {
    sections
        .iter()
        .enumerate()
        .fold(None, |active, (index, span)| {
            if span.contains(offset) {
                Some(index)
            } else {
                active
            }
        })
}

pub fn parallax_offset(offset: f64, speed: f64) -> f64 {
    offset * speed
}

pub fn dispatch(state: &mut PageState, offset: f64, sections: &[SectionSpan]) -> ScrollDirectives {
    let snapshot = ScrollSnapshot::capture(offset, state.last_scroll_top);
    let directives = ScrollDirectives {
        scrolled: is_scrolled(offset),
        navbar: navbar_slide(snapshot),
        back_to_top: back_to_top_visible(offset),
        active_section: active_section(offset, sections),
    };
    state.last_scroll_top = offset;
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_0_100_and_100_300() -> Vec<SectionSpan> {
        vec![
            SectionSpan {
                top: 100.0,
                height: 100.0,
            },
            SectionSpan {
                top: 200.0,
                height: 200.0,
            },
        ]
    }

    #[test]
    fn scrolled_marker_appears_only_past_50px() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(400.0));
    }

    #[test]
    fn back_to_top_appears_only_past_500px() {
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(500.5));
    }

    #[test]
    fn navbar_hides_when_scrolling_down_past_threshold() {
        let snapshot = ScrollSnapshot::capture(300.0, 200.0);
        assert_eq!(navbar_slide(snapshot), NavbarSlide::Hidden);
    }

    #[test]
    fn navbar_shows_when_scrolling_up() {
        let snapshot = ScrollSnapshot::capture(300.0, 400.0);
        assert_eq!(navbar_slide(snapshot), NavbarSlide::Visible);
    }

    #[test]
    fn navbar_shows_near_top_even_when_scrolling_down() {
        let snapshot = ScrollSnapshot::capture(150.0, 100.0);
        assert_eq!(navbar_slide(snapshot), NavbarSlide::Visible);
    }

    #[test]
    fn navbar_slide_maps_to_inline_transforms() {
        assert_eq!(NavbarSlide::Visible.transform(), "translateY(0)");
        assert_eq!(NavbarSlide::Hidden.transform(), "translateY(-100%)");
    }

    #[test]
    fn adjacent_ranges_resolve_to_a_unique_section() {
        let sections = spans_0_100_and_100_300();

        assert_eq!(active_section(0.0, &sections), Some(0));
        assert_eq!(active_section(99.9, &sections), Some(0));
        assert_eq!(active_section(100.0, &sections), Some(1));
        assert_eq!(active_section(299.9, &sections), Some(1));
        assert_eq!(active_section(300.0, &sections), None);
    }

    #[test]
    fn overlapping_ranges_resolve_to_last_match() {
        let sections = vec![
            SectionSpan {
                top: 100.0,
                height: 200.0,
            },
            SectionSpan {
                top: 150.0,
                height: 200.0,
            },
        ];

        assert_eq!(active_section(120.0, &sections), Some(1));
    }

    #[test]
    fn no_section_matches_outside_every_range() {
        assert_eq!(active_section(50.0, &[]), None);

        let sections = vec![SectionSpan {
            top: 500.0,
            height: 100.0,
        }];
        assert_eq!(active_section(50.0, &sections), None);
    }

    #[test]
    fn throttle_fires_on_leading_edge_and_drops_the_window() {
        let mut throttle = Throttle::new(THROTTLE_WINDOW_MS);

        assert!(throttle.admit(0.0));
        assert!(!throttle.admit(5.0));
        assert!(!throttle.admit(15.9));
        assert!(throttle.admit(16.0));
        assert!(!throttle.admit(31.0));
        assert!(throttle.admit(32.0));
    }

    #[test]
    fn dropped_events_do_not_extend_the_throttle_window() {
        let mut throttle = Throttle::new(THROTTLE_WINDOW_MS);

        assert!(throttle.admit(100.0));
        assert!(!throttle.admit(110.0));
        assert!(throttle.admit(116.0));
    }

    #[test]
    fn dispatch_updates_last_scroll_top() {
        let mut state = PageState::new();
        let sections = spans_0_100_and_100_300();

        let first = dispatch(&mut state, 300.0, &sections);
        assert_eq!(state.last_scroll_top, 300.0);
        assert_eq!(first.navbar, NavbarSlide::Hidden);

        let second = dispatch(&mut state, 250.0, &sections);
        assert_eq!(state.last_scroll_top, 250.0);
        assert_eq!(second.navbar, NavbarSlide::Visible);
        assert_eq!(second.active_section, Some(1));
        assert!(second.scrolled);
        assert!(!second.back_to_top);
    }

    #[test]
    fn dispatch_reports_initial_rest_state() {
        let mut state = PageState::new();

        let directives = dispatch(&mut state, 0.0, &[]);
        assert!(!directives.scrolled);
        assert_eq!(directives.navbar, NavbarSlide::Visible);
        assert!(!directives.back_to_top);
        assert_eq!(directives.active_section, None);
    }

    #[test]
    fn parallax_scales_offset_by_speed() {
        assert_eq!(parallax_offset(200.0, DEFAULT_PARALLAX_SPEED), 100.0);
        assert_eq!(parallax_offset(200.0, 0.25), 50.0);
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    }
}
