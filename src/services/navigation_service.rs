//! Section Navigation Service
//!
//! Single source of truth for which page section is active. Two event
//! streams feed it: continuous scroll readings and explicit menu clicks.
//! The transition function is pure so the reconciliation between the two
//! can be tested without a DOM or timers.

use leptos::prelude::*;

/// Vertical probe offset compensating for the sticky navbar: a section
/// counts as entered once its top edge comes within this many pixels of
/// the viewport top.
pub const SCROLL_PROBE_OFFSET: f64 = 100.0;

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Upload,
    Search,
    Results,
}

impl SectionId {
    /// DOM id of the section element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Upload => "upload",
            SectionId::Search => "search",
            SectionId::Results => "results",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Upload => "Upload",
            SectionId::Search => "Search",
            SectionId::Results => "Results",
        }
    }

    /// All sections in document order.
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Home,
            SectionId::Upload,
            SectionId::Search,
            SectionId::Results,
        ]
    }

    /// Parse a DOM id. Unknown ids never enter the typed domain, so no
    /// downstream code has to handle a nonexistent section.
    pub fn from_str(s: &str) -> Option<SectionId> {
        match s {
            "home" => Some(SectionId::Home),
            "upload" => Some(SectionId::Upload),
            "search" => Some(SectionId::Search),
            "results" => Some(SectionId::Results),
            _ => None,
        }
    }
}

/// A navigation input: a sampled scroll offset, or an explicit command
/// naming a target section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    Scroll { offset: f64 },
    Navigate { target: SectionId },
}

/// Pure transition function for the active section.
///
/// `boundary_of` reports a section's top edge within the document, or
/// `None` when it is not laid out. For a scroll reading, the last section
/// (in document order) whose boundary sits at or above
/// `offset + SCROLL_PROBE_OFFSET` wins; when none qualifies the prior
/// value is kept, so the state is never unset. An explicit command takes
/// effect immediately — the menu highlight must not wait for the smooth
/// scroll animation to land. Scroll readings fired during that animation
/// may transiently override the commanded value; the disagreement is
/// bounded by the animation and resolves on its final reading.
pub fn resolve<F>(active: SectionId, event: NavEvent, boundary_of: F) -> SectionId
where
    F: Fn(SectionId) -> Option<f64>,
{
    match event {
        NavEvent::Scroll { offset } => {
            let probe = offset + SCROLL_PROBE_OFFSET;
            SectionId::all()
                .iter()
                .rev()
                .find(|section| matches!(boundary_of(**section), Some(top) if top <= probe))
                .copied()
                .unwrap_or(active)
        }
        NavEvent::Navigate { target } => target,
    }
}

/// Shared navigation state. Mutated only through [`NavigationState::apply`];
/// renderers read it.
#[derive(Clone, Copy)]
pub struct NavigationState {
    pub active_section: RwSignal<SectionId>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            active_section: RwSignal::new(SectionId::Home),
        }
    }

    /// Feed one event through the transition function. The signal is only
    /// written when the value actually changes, so a stream of scroll
    /// readings inside a single section does not trigger renders.
    pub fn apply<F>(&self, event: NavEvent, boundary_of: F)
    where
        F: Fn(SectionId) -> Option<f64>,
    {
        let current = self.active_section.get_untracked();
        let next = resolve(current, event, boundary_of);
        if next != current {
            self.active_section.set(next);
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

// Global accessor helpers
pub fn provide_navigation_state() {
    provide_context(NavigationState::new());
}

pub fn use_navigation_state() -> NavigationState {
    expect_context::<NavigationState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_boundaries(section: SectionId) -> Option<f64> {
        Some(match section {
            SectionId::Home => 0.0,
            SectionId::Upload => 800.0,
            SectionId::Search => 1600.0,
            SectionId::Results => 2400.0,
        })
    }

    #[test]
    fn scroll_picks_last_section_at_or_above_probe() {
        let next = resolve(
            SectionId::Home,
            NavEvent::Scroll { offset: 850.0 },
            fixture_boundaries,
        );
        assert_eq!(next, SectionId::Upload);
    }

    #[test]
    fn scroll_near_top_picks_first_section() {
        let next = resolve(
            SectionId::Results,
            NavEvent::Scroll { offset: 50.0 },
            fixture_boundaries,
        );
        assert_eq!(next, SectionId::Home);
    }

    #[test]
    fn scroll_boundary_is_inclusive() {
        // Probe 700 + 100 lands exactly on upload's top edge.
        let next = resolve(
            SectionId::Home,
            NavEvent::Scroll { offset: 700.0 },
            fixture_boundaries,
        );
        assert_eq!(next, SectionId::Upload);
    }

    #[test]
    fn scroll_just_before_boundary_keeps_earlier_section() {
        let next = resolve(
            SectionId::Home,
            NavEvent::Scroll { offset: 699.0 },
            fixture_boundaries,
        );
        assert_eq!(next, SectionId::Home);
    }

    #[test]
    fn scroll_above_document_start_keeps_prior_value() {
        // Probe -150 + 100 = -50 sits above every boundary; the state is
        // left alone rather than reset.
        let next = resolve(
            SectionId::Search,
            NavEvent::Scroll { offset: -150.0 },
            fixture_boundaries,
        );
        assert_eq!(next, SectionId::Search);
    }

    #[test]
    fn slightly_negative_scroll_still_matches_first_section() {
        let next = resolve(
            SectionId::Home,
            NavEvent::Scroll { offset: -50.0 },
            fixture_boundaries,
        );
        assert_eq!(next, SectionId::Home);
    }

    #[test]
    fn scroll_past_end_picks_final_section() {
        let next = resolve(
            SectionId::Home,
            NavEvent::Scroll { offset: 10_000.0 },
            fixture_boundaries,
        );
        assert_eq!(next, SectionId::Results);
    }

    #[test]
    fn sections_without_boundaries_are_skipped() {
        let partial = |section: SectionId| match section {
            SectionId::Results => None,
            other => fixture_boundaries(other),
        };
        let next = resolve(SectionId::Home, NavEvent::Scroll { offset: 3000.0 }, partial);
        assert_eq!(next, SectionId::Search);
    }

    #[test]
    fn navigate_wins_immediately_regardless_of_scroll_position() {
        // The viewport still reads as "home"; the command must not wait
        // for the animation to carry the scroll position there.
        let next = resolve(
            SectionId::Home,
            NavEvent::Navigate {
                target: SectionId::Results,
            },
            fixture_boundaries,
        );
        assert_eq!(next, SectionId::Results);
    }

    #[test]
    fn later_scroll_reading_may_override_commanded_section() {
        // Accepted transient during the smooth-scroll animation: a scroll
        // sample between the old and new positions re-derives from geometry.
        let commanded = resolve(
            SectionId::Home,
            NavEvent::Navigate {
                target: SectionId::Results,
            },
            fixture_boundaries,
        );
        let mid_animation = resolve(
            commanded,
            NavEvent::Scroll { offset: 900.0 },
            fixture_boundaries,
        );
        assert_eq!(mid_animation, SectionId::Upload);
        // The animation's final reading converges on the target.
        let settled = resolve(
            mid_animation,
            NavEvent::Scroll { offset: 2400.0 },
            fixture_boundaries,
        );
        assert_eq!(settled, SectionId::Results);
    }

    #[test]
    fn section_id_round_trips_through_dom_id() {
        for section in SectionId::all() {
            assert_eq!(SectionId::from_str(section.as_str()), Some(*section));
        }
        assert_eq!(SectionId::from_str("pricing"), None);
        assert_eq!(SectionId::from_str(""), None);
    }

    #[test]
    fn sections_are_in_document_order() {
        let all = SectionId::all();
        assert_eq!(all.first(), Some(&SectionId::Home));
        assert_eq!(all.last(), Some(&SectionId::Results));
        assert_eq!(all.len(), 4);
    }
}
