//! Counter state logic.
//!
//! [`Counter`] owns the count, step, history and display colour of the primary
//! counter. Each mutator performs one synchronous transition and returns the
//! resulting [`CounterSnapshot`] so the caller can refresh its view.

use tracing::debug;

use super::models::{CounterSnapshot, DisplayColor, History, Step};

/// Primary counter: count, step, bounded history and colour.
///
/// # Examples
///
/// ```
/// use tcounter::domain::Counter;
///
/// let mut counter = Counter::default();
/// counter.increment();
/// counter.set_step("5");
/// let snapshot = counter.increment();
/// assert_eq!(snapshot.count, 6);
/// assert_eq!(snapshot.history, vec![6, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    count: i64,
    step: Step,
    history: History,
    color: DisplayColor,
}

impl Counter {
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn color(&self) -> DisplayColor {
        self.color
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            count: self.count,
            step: self.step,
            history: self.history.to_vec(),
            color: self.color,
        }
    }

    pub fn increment(&mut self) -> CounterSnapshot {
        let new_count = self.count.saturating_add(self.step.get());
        self.count = new_count;
        self.record_history(new_count);
        debug!(count = new_count, step = self.step.get(), "counter incremented");
        self.snapshot()
    }

    pub fn decrement(&mut self) -> CounterSnapshot {
        let new_count = self.count.saturating_sub(self.step.get());
        self.count = new_count;
        self.record_history(new_count);
        debug!(count = new_count, step = self.step.get(), "counter decremented");
        self.snapshot()
    }

    pub fn reset(&mut self) -> CounterSnapshot {
        self.count = 0;
        self.record_history(0);
        debug!("counter reset");
        self.snapshot()
    }

    /// Sets the step from raw user input.
    ///
    /// Empty, non-numeric and sub-1 input all fall back to a step of 1.
    /// Count and history are left untouched.
    pub fn set_step(&mut self, raw: &str) -> CounterSnapshot {
        self.step = match Step::parse(raw) {
            Ok(step) => step,
            Err(err) => {
                debug!(input = raw, error = %err, "invalid step input, using default");
                Step::default()
            }
        };
        self.snapshot()
    }

    pub fn toggle_color(&mut self) -> CounterSnapshot {
        self.color = self.color.toggled();
        debug!(color = %self.color, "display color toggled");
        self.snapshot()
    }

    fn record_history(&mut self, value: i64) {
        self.history.record(value);
    }
}

/// Independent counter with a fixed step of 1 and no history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondaryCounter {
    count: i64,
}

impl SecondaryCounter {
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn increment(&mut self) -> i64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    pub fn decrement(&mut self) -> i64 {
        self.count = self.count.saturating_sub(1);
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HISTORY_CAPACITY;

    #[test]
    fn test_initial_state() {
        let counter = Counter::default();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.step().get(), 1);
        assert!(counter.history().is_empty());
        assert_eq!(counter.color(), DisplayColor::Black);
    }

    #[test]
    fn test_increment_and_decrement_record_history() {
        let mut counter = Counter::default();
        let snapshot = counter.increment();
        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.history, vec![1]);

        let snapshot = counter.decrement();
        assert_eq!(snapshot.count, 0);
        assert_eq!(snapshot.history, vec![0, 1]);
    }

    #[test]
    fn test_decrement_goes_negative() {
        let mut counter = Counter::default();
        counter.set_step("4");
        counter.decrement();
        let snapshot = counter.decrement();
        assert_eq!(snapshot.count, -8);
        assert_eq!(snapshot.history, vec![-8, -4]);
    }

    #[test]
    fn test_reset_records_zero() {
        let mut counter = Counter::default();
        counter.set_step("10");
        counter.increment();
        let snapshot = counter.reset();
        assert_eq!(snapshot.count, 0);
        assert_eq!(snapshot.step.get(), 10);
        assert_eq!(snapshot.history, vec![0, 10]);
    }

    #[test]
    fn test_history_head_tracks_count() {
        let mut counter = Counter::default();
        counter.set_step("3");
        for i in 0..12 {
            let snapshot = match i % 3 {
                0 => counter.increment(),
                1 => counter.decrement(),
                _ => counter.reset(),
            };
            assert_eq!(snapshot.history.first().copied(), Some(snapshot.count));
            assert!(snapshot.history.len() <= HISTORY_CAPACITY);
        }
    }

    #[test]
    fn test_set_step_does_not_touch_count_or_history() {
        let mut counter = Counter::default();
        counter.increment();
        let before = counter.snapshot();
        let after = counter.set_step("abc");
        assert_eq!(after.count, before.count);
        assert_eq!(after.history, before.history);
        assert_eq!(after.step.get(), 1);
    }

    #[test]
    fn test_set_step_invalid_inputs_fall_back() {
        let mut counter = Counter::default();
        for raw in ["", "abc", "0", "-3"] {
            counter.set_step("9");
            assert_eq!(counter.set_step(raw).step.get(), 1, "input {raw:?}");
        }
    }

    #[test]
    fn test_count_saturates_instead_of_overflowing() {
        let mut counter = Counter::default();
        counter.set_step(&i64::MAX.to_string());
        counter.increment();
        assert_eq!(counter.increment().count, i64::MAX);
    }

    #[test]
    fn test_toggle_color_leaves_numbers_alone() {
        let mut counter = Counter::default();
        counter.increment();
        let snapshot = counter.toggle_color();
        assert_eq!(snapshot.color, DisplayColor::Blue);
        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.history, vec![1]);
        assert_eq!(counter.toggle_color().color, DisplayColor::Black);
    }

    #[test]
    fn test_secondary_counter_steps_by_one() {
        let mut secondary = SecondaryCounter::default();
        assert_eq!(secondary.decrement(), -1);
        assert_eq!(secondary.increment(), 0);
        assert_eq!(secondary.increment(), 1);
        assert_eq!(secondary.count(), 1);
    }
}
