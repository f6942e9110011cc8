//! Action handling: user intents onto the countdown controller.
//!
//! Fully testable without a terminal. Each intent is gated by the same
//! visibility predicate the view renders from, so a key whose "button"
//! is not on screen is a silent no-op — never an error.

use crate::cue::CueEmitter;

use super::state::{Action, App};

/// Apply one semantic action to the app.
///
/// Timer intents delegate to the controller, which enforces its own
/// preconditions; entry intents mutate the panel buffers directly.
pub fn update(app: &mut App, action: &Action, cue: &mut dyn CueEmitter) {
    match action {
        Action::Digit(digit) => {
            if app.entry_panel_visible() {
                app.entry.push_digit(*digit);
            }
        }
        Action::Backspace => {
            if app.entry_panel_visible() {
                app.entry.backspace();
            }
        }
        Action::SwitchField => {
            if app.entry_panel_visible() {
                app.entry.toggle_focus();
            }
        }
        Action::Confirm => {
            if app.entry_panel_visible() {
                app.timer
                    .configure(app.entry.minutes_value(), app.entry.seconds_value());
            }
        }
        Action::Start => {
            if app.start_available() {
                app.timer.start();
            }
        }
        Action::Pause => {
            if app.pause_available() {
                app.timer.pause();
            }
        }
        Action::Reset => {
            if app.reset_available() {
                app.timer.reset(cue);
            }
        }
        Action::Quit => {
            app.should_quit = true;
        }
    }
}

/// One elapsed second, delivered by the event loop when the armed
/// deadline passes.
pub fn handle_tick(app: &mut App, cue: &mut dyn CueEmitter) {
    app.timer.tick(cue);
}

// ============================================================================
// TESTS
// ============================================================================
