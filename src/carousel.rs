//! Screenshot carousel state.
//!
//! The carousel shows exactly one slide at a time. Slides and their
//! indicators are rendered from the same collection, so the active slide
//! and the active indicator always share an index. An empty carousel is
//! valid and simply has nothing active.

use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide index {index} is out of range for {len} slides")]
    InvalidIndex { index: usize, len: usize },
}

/// How the automatic advance timer behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancePolicy {
    pub interval_ms: u32,
    /// Start a fresh interval after manual navigation instead of letting the
    /// running one fire on its old schedule. Off by default, which keeps the
    /// timer untouched by user input.
    pub restart_on_manual: bool,
    /// Skip ticks while the document is hidden.
    pub pause_when_hidden: bool,
}

impl AdvancePolicy {
    /// Whether the interval should start over after a manual move.
    /// Rejected moves never touch the timer.
    pub fn restarts_after(&self, nav_succeeded: bool) -> bool {
        self.restart_on_manual && nav_succeeded
    }

    pub fn advances_on_tick(&self, document_hidden: bool) -> bool {
        !(self.pause_when_hidden && document_hidden)
    }
}

impl Default for AdvancePolicy {
    fn default() -> Self {
        Self {
            interval_ms: config::CAROUSEL_INTERVAL_MS,
            restart_on_manual: false,
            pause_when_hidden: false,
        }
    }
}

/// Navigation triggered by the visitor rather than the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualNav {
    Next,
    Previous,
    /// One-based position, as numbered on the indicators.
    GoTo(usize),
}

/// Render data for one indicator dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub position: usize,
    pub class: &'static str,
    pub label: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Builds a carousel over an existing slide collection.
    pub fn for_slides<T>(slides: &[T]) -> Self {
        Self::new(slides.len())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the slide currently shown, `None` when there are no slides.
    pub fn active_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    /// Shows the slide at a zero-based index.
    ///
    /// With no slides this does nothing. An out-of-range index is rejected
    /// and the current slide stays active.
    pub fn show_slide(&mut self, index: usize) -> Result<(), CarouselError> {
        if self.is_empty() {
            return Ok(());
        }
        if index >= self.len {
            return Err(CarouselError::InvalidIndex { index, len: self.len });
        }
        self.current = index;
        Ok(())
    }

    pub fn next_slide(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.len;
    }

    pub fn previous_slide(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jumps to a one-based position, as numbered on the indicators.
    pub fn go_to_slide(&mut self, position: usize) -> Result<(), CarouselError> {
        if position == 0 || position > self.len {
            return Err(CarouselError::InvalidIndex {
                index: position,
                len: self.len,
            });
        }
        self.show_slide(position - 1)
    }

    pub fn navigate(&mut self, nav: ManualNav) -> Result<(), CarouselError> {
        match nav {
            ManualNav::Next => self.next_slide(),
            ManualNav::Previous => self.previous_slide(),
            ManualNav::GoTo(position) => return self.go_to_slide(position),
        }
        Ok(())
    }

    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        (0..self.len).map(move |i| Indicator {
            position: i + 1,
            class: self.indicator_class(i),
            label: format!("Show screenshot {}", i + 1),
            current: self.is_active(i),
        })
    }

    /// CSS transform that slides the track to the active slide.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }

    pub fn slide_class(&self, index: usize) -> &'static str {
        if self.is_active(index) {
            "screenshot-slide active"
        } else {
            "screenshot-slide"
        }
    }

    pub fn indicator_class(&self, index: usize) -> &'static str {
        if self.is_active(index) {
            "dot active"
        } else {
            "dot"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_slides(carousel: &Carousel) -> Vec<usize> {
        (0..carousel.len())
            .filter(|&i| carousel.slide_class(i).ends_with("active"))
            .collect()
    }

    fn active_indicators(carousel: &Carousel) -> Vec<usize> {
        (0..carousel.len())
            .filter(|&i| carousel.indicator_class(i).ends_with("active"))
            .collect()
    }

    #[test]
    fn three_slide_walkthrough() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.active_index(), Some(0));

        carousel.next_slide();
        assert_eq!(carousel.active_index(), Some(1));
        carousel.next_slide();
        assert_eq!(carousel.active_index(), Some(2));
        carousel.next_slide();
        assert_eq!(carousel.active_index(), Some(0));
        carousel.previous_slide();
        assert_eq!(carousel.active_index(), Some(2));
        carousel.go_to_slide(2).unwrap();
        assert_eq!(carousel.active_index(), Some(1));
        assert_eq!(carousel.track_transform(), "translateX(-100%)");
    }

    #[test]
    fn index_stays_in_range_for_mixed_navigation() {
        for len in 1..8 {
            let mut carousel = Carousel::new(len);
            // Deterministic pseudo-random walk.
            let mut seed: u32 = 0x9e37_79b9 ^ len as u32;
            for _ in 0..200 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                if seed & 0x100 == 0 {
                    carousel.next_slide();
                } else {
                    carousel.previous_slide();
                }
                let index = carousel.active_index().unwrap();
                assert!(index < len, "index {index} escaped 0..{len}");
            }
        }
    }

    #[test]
    fn next_slide_len_times_is_a_full_cycle() {
        for len in 1..6 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.show_slide(start).unwrap();
                for _ in 0..len {
                    carousel.next_slide();
                }
                assert_eq!(carousel.active_index(), Some(start));
            }
        }
    }

    #[test]
    fn exactly_one_slide_and_matching_indicator_active() {
        let mut carousel = Carousel::new(4);
        for step in 0..10 {
            if step % 3 == 0 {
                carousel.previous_slide();
            } else {
                carousel.next_slide();
            }
            let slides = active_slides(&carousel);
            assert_eq!(slides.len(), 1);
            assert_eq!(slides, active_indicators(&carousel));
            assert_eq!(Some(slides[0]), carousel.active_index());
        }
    }

    #[test]
    fn go_to_slide_uses_one_based_positions() {
        let mut carousel = Carousel::new(5);
        for position in 1..=5 {
            carousel.go_to_slide(position).unwrap();
            assert_eq!(carousel.active_index(), Some(position - 1));
            assert!(carousel.is_active(position - 1));
        }
    }

    #[test]
    fn go_to_slide_out_of_range_keeps_state() {
        let mut carousel = Carousel::new(3);
        carousel.next_slide();

        assert_eq!(
            carousel.go_to_slide(0),
            Err(CarouselError::InvalidIndex { index: 0, len: 3 })
        );
        assert_eq!(
            carousel.go_to_slide(4),
            Err(CarouselError::InvalidIndex { index: 4, len: 3 })
        );
        assert_eq!(carousel.active_index(), Some(1));
        assert_eq!(active_slides(&carousel), vec![1]);
        assert_eq!(active_indicators(&carousel), vec![1]);
    }

    #[test]
    fn show_slide_rejects_out_of_range() {
        let mut carousel = Carousel::new(2);
        assert!(carousel.show_slide(2).is_err());
        assert_eq!(carousel.active_index(), Some(0));
        assert_eq!(carousel.track_transform(), "translateX(-0%)");
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::for_slides::<&str>(&[]);
        assert!(carousel.show_slide(0).is_ok());
        assert!(carousel.show_slide(7).is_ok());
        carousel.next_slide();
        carousel.previous_slide();
        assert_eq!(carousel.active_index(), None);
        assert!(carousel.go_to_slide(1).is_err());
        assert_eq!(carousel.active_index(), None);
    }

    fn policy(restart_on_manual: bool, pause_when_hidden: bool) -> AdvancePolicy {
        AdvancePolicy {
            restart_on_manual,
            pause_when_hidden,
            ..AdvancePolicy::default()
        }
    }

    #[test]
    fn default_policy_never_restarts_on_manual_input() {
        let policy = AdvancePolicy::default();
        assert_eq!(policy.interval_ms, 5_000);
        assert!(!policy.restarts_after(true));
        assert!(!policy.restarts_after(false));
        assert!(policy.advances_on_tick(false));
        assert!(policy.advances_on_tick(true));
    }

    #[test]
    fn restart_only_after_successful_manual_move() {
        for pause in [false, true] {
            let policy = policy(true, pause);
            assert!(policy.restarts_after(true));
            assert!(!policy.restarts_after(false));
        }
        for pause in [false, true] {
            let policy = policy(false, pause);
            assert!(!policy.restarts_after(true));
            assert!(!policy.restarts_after(false));
        }
    }

    #[test]
    fn hidden_document_skips_ticks_only_when_pausing() {
        for restart in [false, true] {
            let pausing = policy(restart, true);
            assert!(!pausing.advances_on_tick(true));
            assert!(pausing.advances_on_tick(false));

            let running = policy(restart, false);
            assert!(running.advances_on_tick(true));
            assert!(running.advances_on_tick(false));
        }
    }

    #[test]
    fn invalid_jump_leaves_index_and_timer_alone() {
        let policy = policy(true, false);
        let mut carousel = Carousel::new(3);
        carousel.navigate(ManualNav::Next).unwrap();

        let result = carousel.navigate(ManualNav::GoTo(9));
        assert_eq!(result, Err(CarouselError::InvalidIndex { index: 9, len: 3 }));
        assert!(!policy.restarts_after(result.is_ok()));
        assert_eq!(carousel.active_index(), Some(1));

        let result = carousel.navigate(ManualNav::GoTo(3));
        assert!(policy.restarts_after(result.is_ok()));
        assert_eq!(carousel.active_index(), Some(2));
    }

    #[test]
    fn manual_moves_wrap_like_timer_moves() {
        let mut carousel = Carousel::new(3);
        carousel.navigate(ManualNav::Previous).unwrap();
        assert_eq!(carousel.active_index(), Some(2));
        carousel.navigate(ManualNav::Next).unwrap();
        assert_eq!(carousel.active_index(), Some(0));
    }

    #[test]
    fn indicators_are_one_based_and_track_active_slide() {
        let mut carousel = Carousel::new(3);
        carousel.next_slide();
        let indicators: Vec<_> = carousel.indicators().collect();
        assert_eq!(indicators.iter().map(|d| d.position).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(indicators.iter().filter(|d| d.current).count(), 1);
        assert!(indicators[1].current);
        assert_eq!(indicators[1].class, "dot active");
        assert_eq!(indicators[2].label, "Show screenshot 3");

        // Every dot routes to a valid jump.
        for dot in &indicators {
            let mut jumped = carousel.clone();
            jumped.navigate(ManualNav::GoTo(dot.position)).unwrap();
            assert_eq!(jumped.active_index(), Some(dot.position - 1));
        }
        assert_eq!(Carousel::new(0).indicators().count(), 0);
    }
}
