//! Entrance and scroll-reveal animation plumbing.
//!
//! Two kinds of motion exist on the page:
//!
//! - **Entrance**: hero elements animate on mount with a fixed, increasing
//!   delay schedule ([`HERO_ENTRANCE_MS`], [`SCROLL_HINT_DELAY_MS`]).
//! - **Reveal**: section blocks start hidden and transition in the first
//!   time they enter the viewport. Markup carries `data-reveal="<key>"`;
//!   whatever observes the viewport reports intersections to a
//!   [`RevealLedger`], which fires the transition once and detaches the
//!   element through the [`ViewportWatcher`] capability.

use std::collections::HashSet;

use tracing::debug;

/// Attribute carrying the reveal key on each animated element.
pub const REVEAL_ATTR: &str = "data-reveal";

/// Class added when an element has been revealed.
pub const REVEALED_CLASS: &str = "is-revealed";

/// Hero entrance delays: badge, name, tagline, call-to-action row.
pub const HERO_ENTRANCE_MS: [u32; 4] = [200, 300, 400, 500];

/// Delay before the hero scroll hint fades in.
pub const SCROLL_HINT_DELAY_MS: u32 = 1000;

/// Per-item stagger for skill cards and video cards.
pub const LIST_STAGGER_MS: u32 = 100;

/// How an element moves in when revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealKind {
    /// Fade in while rising
    #[default]
    FadeUp,
    /// Fade in while sliding from the left
    SlideIn,
    /// Fade in while growing from 90%
    ScaleIn,
}

impl RevealKind {
    pub fn class(self) -> &'static str {
        match self {
            RevealKind::FadeUp => "reveal reveal-up",
            RevealKind::SlideIn => "reveal reveal-slide",
            RevealKind::ScaleIn => "reveal reveal-scale",
        }
    }
}

/// Delay of the `index`-th item in a staggered list.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// Inline style feeding the reveal transition delay.
pub fn reveal_style(delay_ms: u32) -> String {
    format!("--reveal-delay: {}ms", delay_ms)
}

/// Inline style feeding the entrance animation delay.
pub fn entrance_style(delay_ms: u32) -> String {
    format!("--entrance-delay: {}ms", delay_ms)
}

/// "Observe once, fire transition, then detach."
///
/// Implemented by whatever watches the viewport: an IntersectionObserver in
/// the browser, a recording fake in tests.
pub trait ViewportWatcher {
    type Target;

    /// Start reporting intersections for `target`.
    fn watch(&self, target: &Self::Target);

    /// Stop reporting intersections for `target`.
    fn unwatch(&self, target: &Self::Target);

    /// Run the entrance transition on `target`.
    fn reveal(&self, target: &Self::Target);
}

/// Remembers which reveal keys already fired.
///
/// Browsers may deliver a queued entry for an element after it was
/// unobserved; the ledger makes sure such late entries do nothing.
#[derive(Debug, Default)]
pub struct RevealLedger {
    revealed: HashSet<String>,
}

impl RevealLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one intersection report. Returns `true` when the target was
    /// revealed by this call.
    pub fn handle<W: ViewportWatcher>(
        &mut self,
        watcher: &W,
        target: &W::Target,
        key: &str,
        intersecting: bool,
    ) -> bool {
        if !intersecting || self.revealed.contains(key) {
            return false;
        }
        watcher.reveal(target);
        watcher.unwatch(target);
        self.revealed.insert(key.to_string());
        debug!(key, "revealed");
        true
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingWatcher {
        watching: RefCell<Vec<&'static str>>,
        revealed: RefCell<Vec<&'static str>>,
    }

    impl ViewportWatcher for RecordingWatcher {
        type Target = &'static str;

        fn watch(&self, target: &Self::Target) {
            self.watching.borrow_mut().push(*target);
        }

        fn unwatch(&self, target: &Self::Target) {
            self.watching.borrow_mut().retain(|t| t != target);
        }

        fn reveal(&self, target: &Self::Target) {
            self.revealed.borrow_mut().push(*target);
        }
    }

    #[test]
    fn hero_schedule_strictly_increases() {
        let mut schedule = HERO_ENTRANCE_MS.to_vec();
        schedule.push(SCROLL_HINT_DELAY_MS);
        assert!(schedule.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay_ms(0, LIST_STAGGER_MS), 0);
        assert_eq!(stagger_delay_ms(3, LIST_STAGGER_MS), 300);
        assert_eq!(stagger_delay_ms(usize::MAX, 100), u32::MAX);
    }

    #[test]
    fn fires_once_then_detaches() {
        let watcher = RecordingWatcher::default();
        let mut ledger = RevealLedger::new();
        watcher.watch(&"about");

        assert!(ledger.handle(&watcher, &"about", "about", true));
        assert!(!ledger.handle(&watcher, &"about", "about", true));

        assert_eq!(*watcher.revealed.borrow(), vec!["about"]);
        assert!(watcher.watching.borrow().is_empty());
        assert!(ledger.is_revealed("about"));
    }

    #[test]
    fn ignores_entries_leaving_the_viewport() {
        let watcher = RecordingWatcher::default();
        let mut ledger = RevealLedger::new();
        watcher.watch(&"skills");

        assert!(!ledger.handle(&watcher, &"skills", "skills", false));
        assert!(ledger.is_empty());
        assert_eq!(*watcher.watching.borrow(), vec!["skills"]);
    }

    #[test]
    fn sections_reveal_independently() {
        let watcher = RecordingWatcher::default();
        let mut ledger = RevealLedger::new();

        ledger.handle(&watcher, &"contact", "contact", true);
        ledger.handle(&watcher, &"about", "about", true);

        assert_eq!(ledger.len(), 2);
        assert_eq!(*watcher.revealed.borrow(), vec!["contact", "about"]);
    }

    #[test]
    fn styles_carry_delay() {
        assert_eq!(reveal_style(200), "--reveal-delay: 200ms");
        assert_eq!(entrance_style(1000), "--entrance-delay: 1000ms");
        assert_eq!(RevealKind::default().class(), "reveal reveal-up");
    }
}
