//! TUI color semantics and style constants.
//!
//! Pure data — consumed by the rendering layer for visual consistency.
//! The palette keeps the character of the app: red digits on black,
//! getting louder as time runs out.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// DISPLAY STYLES
// ============================================================================

/// The countdown readout in its normal state.
pub const STYLE_DISPLAY: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// The readout during the final five seconds.
pub const STYLE_DISPLAY_WARNING: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::SLOW_BLINK);

/// The readout once the countdown has finished (holds at 00:00).
pub const STYLE_DISPLAY_DONE: Style = Style::new()
    .fg(Color::Red)
    .add_modifier(Modifier::DIM);

/// Banner shown under the readout while the warning window is active.
pub const STYLE_WARNING_BANNER: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::SLOW_BLINK);

/// Banner shown when the countdown completes.
pub const STYLE_DONE_BANNER: Style = Style::new()
    .fg(Color::Red)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::REVERSED);

// ============================================================================
// ENTRY PANEL STYLES
// ============================================================================

/// Panel heading.
pub const STYLE_PANEL_TITLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Field labels ("Minutes", "Seconds").
pub const STYLE_LABEL: Style = Style::new().fg(Color::DarkGray);

/// An entry field without focus.
pub const STYLE_FIELD: Style = Style::new().fg(Color::Red);

/// The entry field holding focus.
pub const STYLE_FIELD_FOCUSED: Style = Style::new()
    .fg(Color::Red)
    .add_modifier(Modifier::REVERSED);

// ============================================================================
// CHROME
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
