//! Pure rendering: map App state to ratatui widget trees.
//!
//! Everything on screen is derived per render from the countdown state —
//! the readout, the emphasis, the entry panel, and the help line all fall
//! out of the same visibility predicates the update layer guards with.
//! The only effect is Frame::render_widget() writing the buffer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::timer::RunState;

use super::state::{App, Field};
use super::theme;

// ============================================================================
// DISPLAY DERIVATION
// ============================================================================

/// Remaining seconds as a zero-padded "MM:SS" readout.
pub fn format_remaining(remaining: u32) -> String {
    format!("{:02}:{:02}", remaining / 60, remaining % 60)
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Title bar at top, content in the middle, help at the bottom
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    frame.render_widget(render_title(app), chunks[0]);
    render_content(app, frame, chunks[1]);
    frame.render_widget(render_help(app), chunks[2]);
}

// ============================================================================
// CHROME
// ============================================================================

/// Title bar: app name plus the current phase.
fn render_title(app: &App) -> Paragraph<'static> {
    let title_text = match app.timer.state() {
        RunState::Configuring => "countdown",
        RunState::Idle => "countdown — ready",
        RunState::Running => "countdown — running",
        RunState::Paused => "countdown — paused",
        RunState::Completed => "countdown — done",
    };

    Paragraph::new(Line::from(Span::styled(title_text, theme::STYLE_TITLE)))
}

/// Help line listing only the keys that do something right now.
fn render_help(app: &App) -> Paragraph<'static> {
    let mut parts: Vec<&str> = Vec::new();

    if app.entry_panel_visible() {
        parts.push("[0-9] type  [Tab] switch  [Enter] set");
    }
    if app.start_available() {
        parts.push(if app.timer.state() == RunState::Paused {
            "[s] restart"
        } else {
            "[s] start"
        });
    }
    if app.pause_available() {
        parts.push("[p] pause");
    }
    if app.reset_available() {
        parts.push("[r] reset");
    }
    parts.push("[q] quit");

    Paragraph::new(Span::styled(parts.join("  "), theme::STYLE_HELP))
}

// ============================================================================
// CONTENT
// ============================================================================

fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        readout_line(app),
        Line::from(""),
    ];

    if let Some(banner) = banner_line(app) {
        lines.push(banner);
    }

    if app.entry_panel_visible() {
        lines.push(Line::from(""));
        lines.extend(entry_lines(app));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// The big MM:SS readout, styled by phase.
fn readout_line(app: &App) -> Line<'static> {
    let style = if app.timer.state() == RunState::Completed {
        theme::STYLE_DISPLAY_DONE
    } else if app.is_warning() {
        theme::STYLE_DISPLAY_WARNING
    } else {
        theme::STYLE_DISPLAY
    };

    Line::from(Span::styled(format_remaining(app.timer.remaining()), style))
}

/// Emphasis banner under the readout, when one applies.
fn banner_line(app: &App) -> Option<Line<'static>> {
    if app.is_warning() {
        return Some(Line::from(Span::styled(
            "⚠  WARNING  ⚠",
            theme::STYLE_WARNING_BANNER,
        )));
    }
    if app.timer.state() == RunState::Completed {
        return Some(Line::from(Span::styled(
            " TIME'S UP ",
            theme::STYLE_DONE_BANNER,
        )));
    }
    None
}

// ============================================================================
// ENTRY PANEL
// ============================================================================

fn entry_lines(app: &App) -> Vec<Line<'static>> {
    let minutes_style = if app.entry.focus == Field::Minutes {
        theme::STYLE_FIELD_FOCUSED
    } else {
        theme::STYLE_FIELD
    };
    let seconds_style = if app.entry.focus == Field::Seconds {
        theme::STYLE_FIELD_FOCUSED
    } else {
        theme::STYLE_FIELD
    };

    vec![
        Line::from(Span::styled("Set time", theme::STYLE_PANEL_TITLE)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Minutes ", theme::STYLE_LABEL),
            Span::styled(field_text(&app.entry.minutes), minutes_style),
            Span::raw("   "),
            Span::styled("Seconds ", theme::STYLE_LABEL),
            Span::styled(field_text(&app.entry.seconds), seconds_style),
        ]),
    ]
}

/// An entry buffer boxed for display: `[ 5]`, `[30]`, `[  ]`.
fn field_text(buffer: &str) -> String {
    format!("[{:>2}]", buffer)
}

// ============================================================================
// TESTS
// ============================================================================
