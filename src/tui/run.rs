//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! One producer thread forwards key events into an mpsc channel. The
//! event loop blocks on the channel while no tick deadline is armed and
//! waits with a timeout while one is; when the wait expires, the elapsed
//! second goes to the controller. Arming and disarming happen only inside
//! controller operations, so at most one wake-up is ever pending and a
//! pause or reset takes hold before the next event is processed.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cue::CueEmitter;

use super::state::{Action, App};
use super::update::{handle_tick, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. Context-free: the
/// update layer decides what an action means in the current state.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Duration entry
        KeyCode::Char(c @ '0'..='9') => Some(Action::Digit(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => Some(Action::SwitchField),
        KeyCode::Enter => Some(Action::Confirm),

        // Countdown control
        KeyCode::Char('s') => Some(Action::Start),
        KeyCode::Char('p') => Some(Action::Pause),
        KeyCode::Char('r') => Some(Action::Reset),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// KEY READER THREAD
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events.
fn spawn_key_reader(tx: mpsc::Sender<KeyEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(key).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// What the loop woke up for.
enum LoopEvent {
    Key(KeyEvent),
    /// The armed tick deadline passed.
    Tick,
    /// The key reader is gone; nothing further can arrive.
    Closed,
}

/// Wait for the next key press or for the armed deadline to pass.
/// Blocks indefinitely when no deadline is armed.
fn next_event(app: &App, rx: &mpsc::Receiver<KeyEvent>) -> LoopEvent {
    match app.timer.tick_deadline() {
        Some(deadline) => {
            let now = Instant::now();
            if now >= deadline {
                return LoopEvent::Tick;
            }
            match rx.recv_timeout(deadline - now) {
                Ok(key) => LoopEvent::Key(key),
                Err(mpsc::RecvTimeoutError::Timeout) => LoopEvent::Tick,
                Err(mpsc::RecvTimeoutError::Disconnected) => LoopEvent::Closed,
            }
        }
        None => match rx.recv() {
            Ok(key) => LoopEvent::Key(key),
            Err(_) => LoopEvent::Closed,
        },
    }
}

/// Run the TUI event loop until the user quits.
///
/// Sets up the terminal, spawns the key reader, then alternates between
/// rendering and waiting on [`next_event`].
pub fn run(mut app: App, cue: &mut dyn CueEmitter) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let (tx, rx) = mpsc::channel::<KeyEvent>();
    spawn_key_reader(tx);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        match next_event(&app, &rx) {
            LoopEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    update(&mut app, &action, cue);
                }
            }
            LoopEvent::Tick => handle_tick(&mut app, cue),
            LoopEvent::Closed => break,
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
