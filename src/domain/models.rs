use std::collections::VecDeque;
use std::fmt;
use serde::Deserialize;

use super::errors::{StepError, StepResult};

/// Maximum number of entries kept in a counter's history.
pub const HISTORY_CAPACITY: usize = 5;

/// Increment/decrement magnitude. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step(i64);

impl Step {
    pub const MIN: i64 = 1;

    pub fn new(value: i64) -> StepResult<Self> {
        if value < Self::MIN {
            return Err(StepError::BelowMinimum(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rolling log of counter values, most recent first.
///
/// New values are inserted at the front; anything past
/// [`HISTORY_CAPACITY`] falls off the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<i64>,
}

impl History {
    pub fn record(&mut self, value: i64) {
        self.entries.push_front(value);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<i64> {
        self.entries.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

/// Display-only colour of the primary counter value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayColor {
    #[default]
    Black,
    Blue,
}

impl DisplayColor {
    pub fn toggled(self) -> Self {
        match self {
            DisplayColor::Black => DisplayColor::Blue,
            DisplayColor::Blue => DisplayColor::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayColor::Black => "black",
            DisplayColor::Blue => "blue",
        }
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of a primary counter after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub count: i64,
    pub step: Step,
    pub history: Vec<i64>,
    pub color: DisplayColor,
}

/// Static props handed to the page layout panels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutProps {
    pub menu_items: Vec<String>,
    pub page_title: String,
}

impl Default for LayoutProps {
    fn default() -> Self {
        Self {
            menu_items: vec!["Home".to_string(), "About us".to_string(), "Contacts".to_string()],
            page_title: "Welcome to our site!".to_string(),
        }
    }
}
