//! Scroll-driven section activation and one-shot reveal detection.
//!
//! Everything here is plain numeric state. The DOM side (scroll listener,
//! `IntersectionObserver`, measuring section boundaries) lives in
//! [`crate::hooks`] and only feeds numbers into these types.

use crate::config;

/// Page sections in document order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "projects", "blog", "contact"];

/// Vertical extent of a section's element, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open membership test, `[top, top + height)`.
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    /// `None` while the section's element is not in the document.
    pub bounds: Option<Bounds>,
}

/// Equality only looks at what the page renders from: the section ids, the
/// active section and the scrolled flag. Two samples a pixel apart compare
/// equal unless one of those moved.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    sections: Vec<Section>,
    bias: f64,
    offset: f64,
    active: usize,
}

impl PartialEq for ScrollTracker {
    fn eq(&self, other: &Self) -> bool {
        self.active == other.active
            && self.is_scrolled() == other.is_scrolled()
            && self.sections().eq(other.sections())
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(&SECTION_IDS, config::SCROLL_BIAS)
    }
}

impl ScrollTracker {
    /// The first id starts out active. With no ids nothing ever activates
    /// and `active_id` is empty.
    pub fn new(ids: &[&'static str], bias: f64) -> Self {
        Self {
            sections: ids.iter().map(|&id| Section { id, bounds: None }).collect(),
            bias,
            offset: 0.0,
            active: 0,
        }
    }

    pub fn set_bounds(&mut self, id: &str, top: f64, height: f64) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.bounds = Some(Bounds::new(top, height));
        }
    }

    /// Replaces every boundary at once, in section order. Missing trailing
    /// entries leave those sections unmeasured.
    pub fn measure<I>(&mut self, bounds: I)
    where
        I: IntoIterator<Item = Option<Bounds>>,
    {
        let mut bounds = bounds.into_iter();
        for section in &mut self.sections {
            section.bounds = bounds.next().flatten();
        }
    }

    /// Recomputes the active section for a new scroll offset.
    ///
    /// Sections are scanned in order and the last one containing
    /// `offset + bias` wins. When nothing matches the previous section stays
    /// active.
    pub fn on_scroll(&mut self, raw_offset: f64) {
        self.offset = clamp_offset(raw_offset);
        let adjusted = self.offset + self.bias;

        let mut matched = None;
        for (index, section) in self.sections.iter().enumerate() {
            if section.bounds.map_or(false, |b| b.contains(adjusted)) {
                matched = Some(index);
            }
        }

        if let Some(index) = matched {
            self.active = index;
        }
    }

    /// Feeds one intersection sample into `entry`. Returns `true` only on the
    /// call that reveals it.
    pub fn check_reveal(entry: &mut RevealEntry, visible_fraction: f64) -> bool {
        entry.check(visible_fraction)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_id(&self) -> &'static str {
        self.sections.get(self.active).map_or("", |s| s.id)
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > config::SCROLLED_THRESHOLD
    }

    pub fn sections(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|s| s.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// One animatable element. `Pending -> Revealed` is the only transition.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealEntry {
    threshold: f64,
    state: RevealState,
}

impl RevealEntry {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: clamp_fraction(threshold),
            state: RevealState::Pending,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn has_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn check(&mut self, visible_fraction: f64) -> bool {
        if self.has_revealed() {
            return false;
        }
        if clamp_fraction(visible_fraction) >= self.threshold {
            self.state = RevealState::Revealed;
            return true;
        }
        false
    }
}

fn clamp_offset(offset: f64) -> f64 {
    if offset.is_finite() {
        offset.max(0.0)
    } else {
        0.0
    }
}

fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out() -> ScrollTracker {
        let mut tracker = ScrollTracker::new(&SECTION_IDS, 100.0);
        tracker.measure([
            Some(Bounds::new(0.0, 800.0)),
            Some(Bounds::new(800.0, 600.0)),
            Some(Bounds::new(1400.0, 900.0)),
            Some(Bounds::new(2300.0, 700.0)),
            Some(Bounds::new(3000.0, 800.0)),
        ]);
        tracker
    }

    #[test]
    fn starts_on_home() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.active_id(), "home");
        assert_eq!(tracker.active_index(), 0);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn bias_shifts_the_boundary_between_home_and_about() {
        let mut tracker = laid_out();

        tracker.on_scroll(699.0);
        assert_eq!(tracker.active_id(), "home");

        // 700 + 100 lands exactly on about's top edge.
        tracker.on_scroll(700.0);
        assert_eq!(tracker.active_id(), "about");

        // 750 + 100 = 850, outside home's [0, 800) and inside about's [800, 1400).
        tracker.on_scroll(750.0);
        assert_eq!(tracker.active_id(), "about");
        assert_eq!(tracker.active_index(), 1);
    }

    #[test]
    fn every_section_reachable_in_order() {
        let mut tracker = laid_out();
        let samples = [(0.0, "home"), (1300.0, "projects"), (2200.0, "blog"), (3500.0, "contact")];
        for (offset, expected) in samples {
            tracker.on_scroll(offset);
            assert_eq!(tracker.active_id(), expected, "offset {offset}");
        }
    }

    #[test]
    fn active_index_follows_list_position() {
        let mut tracker = laid_out();
        tracker.on_scroll(1500.0);
        assert_eq!(tracker.active_id(), "projects");
        assert_eq!(tracker.active_index(), 2);
    }

    #[test]
    fn unmatched_offset_keeps_previous_section() {
        let mut tracker = laid_out();
        tracker.on_scroll(10_000.0);
        assert_eq!(tracker.active_id(), "home");

        tracker.on_scroll(2400.0);
        assert_eq!(tracker.active_id(), "blog");
        tracker.on_scroll(50_000.0);
        assert_eq!(tracker.active_id(), "blog");
    }

    #[test]
    fn overlapping_bounds_resolve_to_last_match() {
        let mut tracker = ScrollTracker::new(&SECTION_IDS, 100.0);
        tracker.set_bounds("home", 0.0, 1000.0);
        tracker.set_bounds("about", 500.0, 1000.0);
        tracker.set_bounds("projects", 600.0, 100.0);

        tracker.on_scroll(550.0);
        assert_eq!(tracker.active_id(), "projects");

        tracker.on_scroll(750.0);
        assert_eq!(tracker.active_id(), "about");
    }

    #[test]
    fn unmeasured_sections_are_skipped() {
        let mut tracker = ScrollTracker::new(&SECTION_IDS, 100.0);
        tracker.measure([Some(Bounds::new(0.0, 800.0)), None, Some(Bounds::new(1400.0, 900.0))]);

        tracker.on_scroll(900.0);
        assert_eq!(tracker.active_id(), "home");
        tracker.on_scroll(1400.0);
        assert_eq!(tracker.active_id(), "projects");
    }

    #[test]
    fn bad_offsets_are_clamped_to_zero() {
        let mut tracker = laid_out();
        tracker.on_scroll(2400.0);
        tracker.on_scroll(-250.0);
        assert_eq!(tracker.offset(), 0.0);
        assert_eq!(tracker.active_id(), "home");

        tracker.on_scroll(2400.0);
        tracker.on_scroll(f64::NAN);
        assert_eq!(tracker.offset(), 0.0);
        assert_eq!(tracker.active_id(), "home");
    }

    #[test]
    fn scrolled_flag_uses_raw_offset() {
        let mut tracker = laid_out();
        tracker.on_scroll(50.0);
        assert!(!tracker.is_scrolled());
        tracker.on_scroll(51.0);
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn samples_that_change_nothing_visible_compare_equal() {
        let mut first = laid_out();
        let mut second = first.clone();
        first.on_scroll(200.0);
        second.on_scroll(201.0);
        assert_ne!(first.offset(), second.offset());
        assert_eq!(first, second);

        second.on_scroll(750.0);
        assert_ne!(first, second, "active section moved");

        let mut top = laid_out();
        top.on_scroll(10.0);
        assert_ne!(first, top, "scrolled flag differs");
    }

    #[test]
    fn empty_tracker_never_activates() {
        let mut tracker = ScrollTracker::new(&[], 100.0);
        tracker.on_scroll(500.0);
        assert_eq!(tracker.active_id(), "");
        assert_eq!(tracker.sections().count(), 0);
    }

    #[test]
    fn reveal_fires_once_and_never_reverts() {
        let mut entry = RevealEntry::new(0.3);
        assert!(!ScrollTracker::check_reveal(&mut entry, 0.29));
        assert_eq!(entry.state(), RevealState::Pending);

        assert!(ScrollTracker::check_reveal(&mut entry, 0.3));
        assert!(!ScrollTracker::check_reveal(&mut entry, 0.9));

        for fraction in [0.0, 1.0, -3.0, f64::NAN, 0.5] {
            assert!(!ScrollTracker::check_reveal(&mut entry, fraction));
            assert!(entry.has_revealed());
        }
    }

    #[test]
    fn reveal_fractions_are_clamped() {
        let mut entry = RevealEntry::new(1.0);
        assert!(!entry.check(f64::INFINITY));
        assert!(entry.check(7.5));

        let mut zero = RevealEntry::new(-0.5);
        assert_eq!(zero.threshold(), 0.0);
        assert!(zero.check(-1.0));
    }
}
