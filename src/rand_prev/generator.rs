use std::collections::VecDeque;

use thiserror::Error;

use super::source::UniformSource;

/// Default inclusive lower bound
pub const DEF_MIN: i32 = 1;
/// Default inclusive upper bound
pub const DEF_MAX: i32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomPrevError {
    /// The exclusion window could cover every addressable value, which would
    /// turn the re-draw loop into an infinite one
    #[error(
        "history window of {history_size} value(s) cannot be avoided in a range of {range} value(s)"
    )]
    HistoryExceedsRange { history_size: usize, range: usize },

    /// A zero-width or negative explicit range was requested
    #[error("draw bound must be strictly positive, got {bound}")]
    EmptyRange { bound: i32 },
}

/// Bounded random integer generator that remembers its most recent values.
///
/// Draws come from an injected [`UniformSource`]. When a history window is
/// configured, the `next_but_not_prev` family re-draws until the candidate is
/// absent from the window, preventing near-term repeats; without a window it
/// only avoids the immediately preceding value.
///
/// The `_index` variants draw over `[0, bound)` and return the raw draw as a
/// zero-based index. They are deliberately NOT offset by `min`, unlike the
/// no-argument forms which draw over the configured range and add `min`.
pub struct RandomPrev<S: UniformSource> {
    source: S,
    /// Inclusive lower bound of the default range
    min: i32,
    /// Inclusive upper bound of the default range
    max: i32,
    /// Most recently produced value
    value: i32,
    /// Value produced immediately before `value`
    previous: i32,
    /// Maximum number of remembered values, 0 disables the window
    history_size: usize,
    /// Remembered values, most recent first
    history: VecDeque<i32>,
}

impl<S: UniformSource> RandomPrev<S> {
    /// Create a generator over the inclusive range `[min, max]` with a
    /// no-repeat window of `history_size` values.
    ///
    /// Invalid bounds are corrected rather than rejected: a negative `min`
    /// falls back to [`DEF_MIN`] and `max <= min` collapses the range to the
    /// single value `min`, which also disables the window. A window as wide
    /// as the corrected range is rejected with
    /// [`RandomPrevError::HistoryExceedsRange`] since no draw could ever
    /// escape it.
    pub fn new(
        source: S,
        min: i32,
        max: i32,
        history_size: usize,
    ) -> Result<Self, RandomPrevError> {
        let mut min = min;
        let mut max = max;
        let mut history_size = history_size;

        // Correct invalid values
        if min < 0 {
            min = DEF_MIN;
        }
        if max <= min {
            max = min;
        }

        // A single-value range cannot usefully avoid repeats
        if min == max {
            history_size = 0;
        }

        let range = (max as i64 - min as i64 + 1) as usize;
        if history_size > 0 && history_size >= range {
            return Err(RandomPrevError::HistoryExceedsRange {
                history_size,
                range,
            });
        }

        Ok(RandomPrev {
            source,
            min,
            max,
            value: min,
            previous: min,
            history_size,
            history: VecDeque::new(),
        })
    }

    /// Most recently produced value
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Value produced immediately before the current one
    pub fn previous_value(&self) -> i32 {
        self.previous
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of addressable values, `(max - min) + 1`
    pub fn range(&self) -> i32 {
        (self.max - self.min) + 1
    }

    /// Width of the range with the upper bound excluded, `max - min`
    pub fn range_exclude_max(&self) -> i32 {
        self.max - self.min
    }

    pub fn history_size(&self) -> usize {
        self.history_size
    }

    /// true when a no-repeat window is being maintained
    pub fn has_history(&self) -> bool {
        self.history_size > 0
    }

    /// Remembered values, most recent first
    pub fn history(&self) -> &VecDeque<i32> {
        &self.history
    }

    /// Reset the bounds to the defaults `[DEF_MIN, DEF_MAX]`, reset the
    /// current and previous values to [`DEF_MIN`] and empty the window. The
    /// random source is kept as-is.
    pub fn clear(&mut self) {
        self.min = DEF_MIN;
        self.max = DEF_MAX;
        self.value = self.min;
        self.previous = self.min;
        self.history.clear();

        // The default range may be narrower than the configured window;
        // clamp it so the no-hang construction guarantee survives the reset
        let default_range = ((DEF_MAX - DEF_MIN) + 1) as usize;
        if self.history_size >= default_range {
            self.history_size = default_range - 1;
        }
    }

    /// Draw the next value in `[min, max]`.
    ///
    /// The window is updated unconditionally, the new value may equal a
    /// recent one.
    pub fn next(&mut self) -> i32 {
        self.previous = self.value;
        self.value = self.draw();
        self.push_history();
        self.value
    }

    /// Draw a zero-based index in `[0, bound)` and update the window
    pub fn next_index(&mut self, bound: i32) -> Result<i32, RandomPrevError> {
        Self::check_bound(bound)?;

        self.previous = self.value;
        self.value = self.source.next_bounded(bound);
        self.push_history();
        Ok(self.value)
    }

    /// Draw the next value in `[min, max]` without touching the previous
    /// value or the window
    pub fn next_only(&mut self) -> i32 {
        self.value = self.draw();
        self.value
    }

    /// Draw a zero-based index in `[0, bound)` without touching the previous
    /// value or the window
    pub fn next_only_index(&mut self, bound: i32) -> Result<i32, RandomPrevError> {
        Self::check_bound(bound)?;

        self.value = self.source.next_bounded(bound);
        Ok(self.value)
    }

    /// Draw the next value in `[min, max]`, re-drawing until it is absent
    /// from the window (or differs from the previous value when the window
    /// is disabled).
    ///
    /// A single-value range skips the exclusion and legally repeats.
    pub fn next_but_not_prev(&mut self) -> i32 {
        self.previous = self.value;

        let mut candidate = self.draw();
        if self.has_history() {
            while self.history.contains(&candidate) {
                candidate = self.draw();
            }
        } else if self.range() > 1 {
            while candidate == self.previous {
                candidate = self.draw();
            }
        }

        self.value = candidate;
        self.push_history();
        self.value
    }

    /// Like [`RandomPrev::next_but_not_prev`] over the zero-based index
    /// range `[0, bound)`.
    ///
    /// Fails with [`RandomPrevError::HistoryExceedsRange`] when the window
    /// is enabled and `bound` does not strictly exceed it, since the re-draw
    /// loop could then never terminate.
    pub fn next_but_not_prev_index(&mut self, bound: i32) -> Result<i32, RandomPrevError> {
        Self::check_bound(bound)?;
        if self.has_history() && bound as usize <= self.history_size {
            return Err(RandomPrevError::HistoryExceedsRange {
                history_size: self.history_size,
                range: bound as usize,
            });
        }

        self.previous = self.value;

        let mut candidate = self.source.next_bounded(bound);
        if self.has_history() {
            while self.history.contains(&candidate) {
                candidate = self.source.next_bounded(bound);
            }
        } else if bound > 1 {
            while candidate == self.previous {
                candidate = self.source.next_bounded(bound);
            }
        }

        self.value = candidate;
        self.push_history();
        Ok(self.value)
    }

    /// Draw the next value in `[min, max]`, re-drawing until it differs from
    /// the single `excluded` value. The window is still updated afterward.
    pub fn next_but_not(&mut self, excluded: i32) -> i32 {
        self.previous = self.value;

        let mut candidate = self.draw();
        if self.range() > 1 {
            while candidate == excluded {
                candidate = self.draw();
            }
        }

        self.value = candidate;
        self.push_history();
        self.value
    }

    /// Like [`RandomPrev::next_but_not`] over the zero-based index range
    /// `[0, bound)`
    pub fn next_but_not_index(
        &mut self,
        excluded: i32,
        bound: i32,
    ) -> Result<i32, RandomPrevError> {
        Self::check_bound(bound)?;

        self.previous = self.value;

        let mut candidate = self.source.next_bounded(bound);
        if bound > 1 {
            while candidate == excluded {
                candidate = self.source.next_bounded(bound);
            }
        }

        self.value = candidate;
        self.push_history();
        Ok(self.value)
    }

    /// Draw over the configured range and offset into `[min, max]`
    fn draw(&mut self) -> i32 {
        self.source.next_bounded(self.range()) + self.min
    }

    fn check_bound(bound: i32) -> Result<(), RandomPrevError> {
        if bound <= 0 {
            return Err(RandomPrevError::EmptyRange { bound });
        }
        Ok(())
    }

    /// Push the current value to the front of the window and evict the
    /// oldest entries past `history_size`
    fn push_history(&mut self) {
        if self.history_size == 0 {
            return;
        }
        self.history.truncate(self.history_size - 1);
        self.history.push_front(self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand_prev::source::StandardSource;

    fn seeded(min: i32, max: i32, history_size: usize) -> RandomPrev<StandardSource> {
        RandomPrev::new(StandardSource::seeded(1000), min, max, history_size)
            .expect("test generator should be constructible")
    }

    #[test]
    fn test_next_stays_in_range() {
        let mut generator = seeded(1, 10, 0);
        for _ in 0..500 {
            let value = generator.next();
            assert!(value >= 1 && value <= 10);
        }
    }

    #[test]
    fn test_next_updates_previous_and_window() {
        let mut generator = seeded(1, 10, 3);
        let first = generator.next();
        let second = generator.next();
        assert_eq!(generator.previous_value(), first);
        assert_eq!(generator.value(), second);

        for _ in 0..20 {
            generator.next();
        }
        // The window is bounded and keeps the newest value in front
        assert_eq!(generator.history().len(), 3);
        assert_eq!(*generator.history().front().unwrap(), generator.value());
    }

    #[test]
    fn test_next_but_not_prev_avoids_window() {
        let mut generator = seeded(1, 10, 3);
        let mut recent: Vec<i32> = Vec::new();
        for _ in 0..200 {
            let value = generator.next_but_not_prev();
            if recent.contains(&value) {
                panic!("value {} was produced within the last 3 draws", value);
            }
            recent.push(value);
            if recent.len() > 3 {
                recent.remove(0);
            }
        }
    }

    #[test]
    fn test_two_value_range_alternates() {
        let mut generator = seeded(1, 2, 0);
        let mut last = generator.next_but_not_prev();
        for _ in 0..50 {
            let value = generator.next_but_not_prev();
            assert_ne!(value, last);
            last = value;
        }
    }

    #[test]
    fn test_single_value_range_disables_history() {
        let mut generator = seeded(5, 5, 3);
        assert!(!generator.has_history());
        assert_eq!(generator.history_size(), 0);
        // Nothing else to draw, repeating 5 is legal
        for _ in 0..10 {
            assert_eq!(generator.next_but_not_prev(), 5);
        }
    }

    #[test]
    fn test_invalid_max_collapses_to_min() {
        let generator = seeded(10, 2, 0);
        assert_eq!(generator.min(), 10);
        assert_eq!(generator.max(), 10);

        let generator = seeded(10, 5, 0);
        assert_eq!(generator.max(), 10);
        assert_eq!(generator.range(), 1);
    }

    #[test]
    fn test_negative_min_falls_back_to_default() {
        let generator = seeded(-5, 10, 0);
        assert_eq!(generator.min(), DEF_MIN);
        assert_eq!(generator.max(), 10);
    }

    #[test]
    fn test_window_as_wide_as_range_is_rejected() {
        let result = RandomPrev::new(StandardSource::seeded(1000), 1, 4, 4);
        match result {
            Err(RandomPrevError::HistoryExceedsRange {
                history_size,
                range,
            }) => {
                assert_eq!(history_size, 4);
                assert_eq!(range, 4);
            }
            _ => panic!("construction should be rejected"),
        }
    }

    #[test]
    fn test_clear_resets_defaults() {
        let mut generator = seeded(0, 19, 3);
        for _ in 0..10 {
            generator.next_but_not_prev();
        }

        generator.clear();
        assert_eq!(generator.min(), DEF_MIN);
        assert_eq!(generator.max(), DEF_MAX);
        assert_eq!(generator.value(), DEF_MIN);
        assert_eq!(generator.previous_value(), DEF_MIN);
        assert!(generator.history().is_empty());

        for _ in 0..100 {
            let value = generator.next();
            assert!(value >= DEF_MIN && value <= DEF_MAX);
        }
    }

    #[test]
    fn test_clear_clamps_oversized_window() {
        let mut generator = seeded(0, 100, 50);
        generator.clear();
        // 50 remembered values would cover the default 1..10 range
        assert!(generator.history_size() < generator.range() as usize);
        for _ in 0..100 {
            generator.next_but_not_prev();
        }
    }

    #[test]
    fn test_indexed_draws_are_zero_based() {
        // Explicit bounds return raw indexes, they are not offset by `min`
        let mut generator = seeded(5, 10, 0);
        for _ in 0..200 {
            let value = generator
                .next_index(20)
                .expect("bound 20 should be accepted");
            assert!(value >= 0 && value < 20);
        }
    }

    #[test]
    fn test_empty_explicit_range_fails_fast() {
        let mut generator = seeded(1, 10, 0);
        assert_eq!(
            generator.next_index(0),
            Err(RandomPrevError::EmptyRange { bound: 0 })
        );
        assert_eq!(
            generator.next_but_not_prev_index(-3),
            Err(RandomPrevError::EmptyRange { bound: -3 })
        );
        assert_eq!(
            generator.next_only_index(0),
            Err(RandomPrevError::EmptyRange { bound: 0 })
        );
        assert_eq!(
            generator.next_but_not_index(1, 0),
            Err(RandomPrevError::EmptyRange { bound: 0 })
        );
    }

    #[test]
    fn test_indexed_exclusion_rejects_covered_bound() {
        let mut generator = seeded(0, 19, 3);
        match generator.next_but_not_prev_index(3) {
            Err(RandomPrevError::HistoryExceedsRange { .. }) => {}
            _ => panic!("a bound inside the window should be rejected"),
        }
        generator
            .next_but_not_prev_index(4)
            .expect("bound 4 strictly exceeds the window");
    }

    #[test]
    fn test_next_only_leaves_window_alone() {
        let mut generator = seeded(1, 10, 3);
        generator.next();
        let previous = generator.previous_value();
        let window: Vec<i32> = generator.history().iter().copied().collect();

        for _ in 0..10 {
            let value = generator.next_only();
            assert!(value >= 1 && value <= 10);
        }
        assert_eq!(generator.previous_value(), previous);
        let window_after: Vec<i32> = generator.history().iter().copied().collect();
        assert_eq!(window_after, window);
    }

    #[test]
    fn test_next_but_not_skips_excluded() {
        let mut generator = seeded(1, 10, 0);
        for _ in 0..200 {
            assert_ne!(generator.next_but_not(5), 5);
        }
    }

    #[test]
    fn test_eightball_index_scenario() {
        // 20 answers, window of 3, 50 questions: every draw is a valid index
        // and never equals any of the 3 immediately preceding draws
        let mut generator = seeded(0, 19, 3);
        let mut recent: Vec<i32> = Vec::new();
        for _ in 0..50 {
            let value = generator.next_but_not_prev();
            assert!(value >= 0 && value <= 19);
            if recent.contains(&value) {
                panic!("answer index {} repeated within 3 draws", value);
            }
            recent.push(value);
            if recent.len() > 3 {
                recent.remove(0);
            }
        }
    }
}
