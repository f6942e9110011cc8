//! TUI state algebra: the app model and semantic actions.
//!
//! These types define the entire UI state space. The countdown numbers
//! live in [`TimerController`]; this layer adds only what the terminal
//! needs on top — the duration entry buffers, field focus, and the quit
//! flag. Key availability is derived here as visibility predicates so
//! the update and view layers agree on what exists at any moment.

use crate::timer::{MAX_MINUTES, MAX_SECONDS, TimerController};

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the update layer
/// decides what each one means in the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a digit to the focused entry field.
    Digit(char),
    /// Delete the last digit of the focused entry field.
    Backspace,
    /// Move focus between the minutes and seconds fields.
    SwitchField,
    /// Commit the entered duration (the "set" button).
    Confirm,
    /// Start the countdown.
    Start,
    /// Pause the countdown.
    Pause,
    /// Stop and clear the countdown.
    Reset,
    /// Quit the application.
    Quit,
}

// ============================================================================
// ENTRY PANEL
// ============================================================================

/// Which entry field holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Minutes,
    Seconds,
}

/// The two duration entry buffers and their focus.
///
/// Buffers hold at most two digits each. Parsing never fails: an empty
/// buffer reads as 0 and oversized values clamp into range, so there is
/// no invalid-input state to represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPanel {
    pub minutes: String,
    pub seconds: String,
    pub focus: Field,
}

impl EntryPanel {
    pub fn new() -> Self {
        Self {
            minutes: String::from("0"),
            seconds: String::from("0"),
            focus: Field::Minutes,
        }
    }

    /// Panel pre-filled with known values (initial duration from the CLI).
    pub fn with_values(minutes: u32, seconds: u32) -> Self {
        Self {
            minutes: minutes.to_string(),
            seconds: seconds.to_string(),
            focus: Field::Minutes,
        }
    }

    fn focused_buffer(&mut self) -> &mut String {
        match self.focus {
            Field::Minutes => &mut self.minutes,
            Field::Seconds => &mut self.seconds,
        }
    }

    /// Append a digit to the focused field. A lone "0" is replaced rather
    /// than extended; anything past two digits is dropped.
    pub fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        let buffer = self.focused_buffer();
        if buffer == "0" {
            buffer.clear();
        }
        if buffer.len() < 2 {
            buffer.push(digit);
        }
    }

    /// Delete the last digit of the focused field.
    pub fn backspace(&mut self) {
        self.focused_buffer().pop();
    }

    /// Move focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Minutes => Field::Seconds,
            Field::Seconds => Field::Minutes,
        };
    }

    /// Minutes as entered, normalized: empty reads as 0, clamped into range.
    pub fn minutes_value(&self) -> u32 {
        self.minutes.parse().unwrap_or(0).min(MAX_MINUTES)
    }

    /// Seconds as entered, normalized: empty reads as 0, clamped into range.
    pub fn seconds_value(&self) -> u32 {
        self.seconds.parse().unwrap_or(0).min(MAX_SECONDS)
    }
}

impl Default for EntryPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model: the countdown controller plus UI-only state.
#[derive(Debug)]
pub struct App {
    pub timer: TimerController,
    pub entry: EntryPanel,
    /// Set to true when the app should exit on the next loop pass.
    pub should_quit: bool,
}

impl App {
    /// Fresh app: nothing configured, entry panel open.
    pub fn new() -> Self {
        App {
            timer: TimerController::new(),
            entry: EntryPanel::new(),
            should_quit: false,
        }
    }

    /// App pre-configured with an initial duration, ready to start.
    pub fn with_duration(minutes: u32, seconds: u32) -> Self {
        let mut timer = TimerController::new();
        timer.configure(minutes, seconds);
        App {
            timer,
            entry: EntryPanel::with_values(minutes, seconds),
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Visibility predicates
    // ------------------------------------------------------------------
    // Each key's availability is a pure function of the countdown state.
    // The update layer uses these to gate intents, the view layer to
    // decide what to draw, so the two can never disagree.

    /// The duration entry panel is shown and editable.
    pub fn entry_panel_visible(&self) -> bool {
        !self.timer.is_running() && self.timer.remaining() == 0
    }

    /// Start is offered.
    pub fn start_available(&self) -> bool {
        !self.timer.is_running() && self.timer.remaining() > 0
    }

    /// Pause is offered.
    pub fn pause_available(&self) -> bool {
        self.timer.is_running()
    }

    /// Reset is offered.
    pub fn reset_available(&self) -> bool {
        self.timer.remaining() > 0
    }

    /// The final-seconds emphasis is active.
    pub fn is_warning(&self) -> bool {
        let remaining = self.timer.remaining();
        remaining > 0 && remaining <= crate::timer::WARNING_WINDOW
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
