//! Application state management for the terminal counter.
//!
//! This module contains the main application state, page and mode management
//! for the terminal user interface. All numeric logic is delegated to the
//! domain counters; the view only ever reads the snapshot they emit.

use serde::Deserialize;
use tracing::{debug, trace};

use crate::domain::{Counter, CounterSnapshot, LayoutProps, SecondaryCounter};

/// Page currently shown in the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Interactive counter with history and the secondary counter
    #[default]
    Counter,
    /// Static four-panel page layout
    Layout,
}

impl Page {
    pub fn next(self) -> Self {
        match self {
            Page::Counter => Page::Layout,
            Page::Layout => Page::Counter,
        }
    }
}

/// Represents the current mode of the application.
///
/// The mode determines how key presses are interpreted and which
/// UI elements are drawn on top of the active page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal mode - shortcuts trigger counter operations
    Normal,
    /// Step input has focus - typed characters edit the step field
    EditingStep,
    /// Help screen is displayed
    Help,
}

/// Main application state containing both counters and UI state.
///
/// # Examples
///
/// ```
/// use tcounter::application::{App, AppMode, Page};
///
/// let app = App::default();
/// assert_eq!(app.page, Page::Counter);
/// assert_eq!(app.mode, AppMode::Normal);
/// assert_eq!(app.snapshot.count, 0);
/// ```
#[derive(Debug)]
pub struct App {
    counter: Counter,
    /// Independent secondary counter
    pub secondary: SecondaryCounter,
    /// Last snapshot emitted by the primary counter
    pub snapshot: CounterSnapshot,
    /// Number of primary-counter transitions observed
    pub revision: u64,
    /// Page currently displayed
    pub page: Page,
    /// Current application mode
    pub mode: AppMode,
    /// Text buffer of the step input field
    pub step_input: String,
    /// Cursor position within the step input buffer
    pub cursor_position: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Rows of help text visible at once (for scrolling calculations)
    pub help_viewport_rows: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Props for the static layout page
    pub layout: LayoutProps,
}

impl Default for App {
    fn default() -> Self {
        Self::new(LayoutProps::default(), Page::default())
    }
}

impl App {
    pub fn new(layout: LayoutProps, page: Page) -> Self {
        let counter = Counter::default();
        let snapshot = counter.snapshot();
        let step_input = snapshot.step.to_string();
        Self {
            counter,
            secondary: SecondaryCounter::default(),
            snapshot,
            revision: 0,
            page,
            mode: AppMode::Normal,
            cursor_position: step_input.len(),
            step_input,
            help_scroll: 0,
            help_viewport_rows: 20,
            status_message: None,
            layout,
        }
    }

    /// Primary counter state.
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    fn notify(&mut self, snapshot: CounterSnapshot) {
        self.revision += 1;
        trace!(revision = self.revision, ?snapshot, "counter state changed");
        self.snapshot = snapshot;
    }

    pub fn increment(&mut self) {
        let snapshot = self.counter.increment();
        self.notify(snapshot);
    }

    pub fn decrement(&mut self) {
        let snapshot = self.counter.decrement();
        self.notify(snapshot);
    }

    pub fn reset(&mut self) {
        let snapshot = self.counter.reset();
        self.notify(snapshot);
    }

    pub fn toggle_color(&mut self) {
        let snapshot = self.counter.toggle_color();
        self.notify(snapshot);
    }

    /// Sets the step from raw text, outside of the step field.
    ///
    /// The field is rewritten to the effective step.
    pub fn set_step(&mut self, raw: &str) {
        let snapshot = self.counter.set_step(raw);
        self.notify(snapshot);
        self.step_input = self.counter.step().to_string();
        self.cursor_position = self.step_input.len();
    }

    pub fn secondary_increment(&mut self) {
        let count = self.secondary.increment();
        debug!(count, "secondary counter incremented");
    }

    pub fn secondary_decrement(&mut self) {
        let count = self.secondary.decrement();
        debug!(count, "secondary counter decremented");
    }

    /// Gives the step input focus, with the cursor at the end of the field.
    pub fn start_step_edit(&mut self) {
        self.mode = AppMode::EditingStep;
        self.cursor_position = self.step_input.len();
        self.status_message = None;
    }

    /// Applies the current step buffer to the counter.
    ///
    /// Called after every change to the buffer, so the step follows the
    /// field as the user types.
    pub fn step_input_changed(&mut self) {
        let snapshot = self.counter.set_step(&self.step_input);
        self.notify(snapshot);
    }

    pub fn insert_step_char(&mut self, c: char) {
        self.step_input.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
        self.step_input_changed();
    }

    pub fn delete_step_char_before_cursor(&mut self) {
        let previous = self.step_input[..self.cursor_position].chars().next_back();
        if let Some(c) = previous {
            self.cursor_position -= c.len_utf8();
            self.step_input.remove(self.cursor_position);
            self.step_input_changed();
        }
    }

    pub fn move_step_cursor_left(&mut self) {
        if let Some(c) = self.step_input[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
        }
    }

    pub fn move_step_cursor_right(&mut self) {
        if let Some(c) = self.step_input[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }

    /// Releases focus from the step input.
    ///
    /// The buffer is replaced by the effective step, so invalid text never
    /// outlives the edit.
    pub fn finish_step_edit(&mut self) {
        self.mode = AppMode::Normal;
        self.step_input = self.counter.step().to_string();
        self.cursor_position = self.step_input.len();
        self.status_message = Some(format!("Step set to {}", self.counter.step()));
    }

    pub fn switch_page(&mut self) {
        self.page = self.page.next();
        self.mode = AppMode::Normal;
        self.status_message = None;
        debug!(page = ?self.page, "page switched");
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Scrolls help down, stopping once the last line is visible.
    pub fn scroll_help_down(&mut self, lines: usize, total_lines: usize) {
        let max_scroll = total_lines.saturating_sub(self.help_viewport_rows);
        self.help_scroll = (self.help_scroll + lines).min(max_scroll);
    }

    pub fn scroll_help_up(&mut self, lines: usize) {
        self.help_scroll = self.help_scroll.saturating_sub(lines);
    }
}
