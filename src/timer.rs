//! Countdown state machine: configured duration, remaining time, run state.
//!
//! Pure with respect to the terminal. Side effects leave through two narrow
//! openings: the injected [`CueEmitter`] and the single optional tick
//! deadline the controller owns. The event loop reads the deadline to decide
//! how long to wait; arming and disarming happen only inside controller
//! operations, so pause and reset can never leave a stale tick behind.

use std::time::{Duration, Instant};

use crate::cue::CueEmitter;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Upper bound of the minutes entry field.
pub const MAX_MINUTES: u32 = 99;

/// Upper bound of the seconds entry field.
pub const MAX_SECONDS: u32 = 59;

/// Final stretch during which a cue fires once per elapsed second.
pub const WARNING_WINDOW: u32 = 5;

/// Interval between countdown decrements.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// RUN STATE
// ============================================================================

/// The countdown lifecycle as an explicit tagged state.
///
/// Exactly one variant is active at a time. Illegal combinations (Running
/// with nothing left to count) are unrepresentable: every transition that
/// would produce one lands in `Completed` or `Configuring` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No usable remaining time; the entry panel is editable.
    Configuring,
    /// Duration set, ready to start.
    Idle,
    /// Counting down; exactly one tick deadline is armed.
    Running,
    /// Frozen mid-countdown; remaining time preserved.
    Paused,
    /// Reached zero; the display holds at 00:00.
    Completed,
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Owns the countdown numbers, the run state, and the armed tick deadline.
///
/// All operations are silent no-ops when their preconditions fail; none
/// returns an error. Cue effects go through the emitter passed per call,
/// which keeps the machine testable with a recording stub.
#[derive(Debug)]
pub struct TimerController {
    /// Configured total, in seconds. Immutable while a countdown is live.
    duration: u32,
    /// Seconds left. Never exceeds `duration`.
    remaining: u32,
    state: RunState,
    /// The one armed tick deadline. `Some` iff `state == Running`.
    deadline: Option<Instant>,
}

impl TimerController {
    pub fn new() -> Self {
        Self {
            duration: 0,
            remaining: 0,
            state: RunState::Configuring,
            deadline: None,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// When the next tick is due. `None` unless running.
    pub fn tick_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Set the duration from entry values, clamping each into range.
    ///
    /// Remaining time snaps to the new duration. Ignored while a countdown
    /// is live (running or paused) — the duration is immutable until the
    /// countdown is over or wiped by [`reset`](Self::reset).
    pub fn configure(&mut self, minutes: u32, seconds: u32) {
        if matches!(self.state, RunState::Running | RunState::Paused) {
            return;
        }
        self.duration = minutes.min(MAX_MINUTES) * 60 + seconds.min(MAX_SECONDS);
        self.remaining = self.duration;
        self.state = if self.duration == 0 {
            RunState::Configuring
        } else {
            RunState::Idle
        };
    }

    /// Begin counting down from the FULL configured duration.
    ///
    /// This holds even from Paused: starting discards the partial
    /// countdown and rewinds to the top. No-op when nothing is configured
    /// or a countdown is already running.
    pub fn start(&mut self) {
        if self.duration == 0 || self.state == RunState::Running {
            return;
        }
        self.remaining = self.duration;
        self.state = RunState::Running;
        // Any previously armed deadline belongs to a state we just left;
        // this assignment is the disarm and the rearm in one step.
        self.deadline = Some(Instant::now() + TICK_INTERVAL);
    }

    /// Freeze the countdown where it stands. No-op unless running.
    pub fn pause(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.deadline = None;
        self.state = RunState::Paused;
    }

    /// Stop everything: remaining to zero, deadline disarmed, audio cut.
    ///
    /// Always succeeds, from any state. The configured duration survives
    /// so the entry panel reopens with the previous values.
    pub fn reset(&mut self, cue: &mut dyn CueEmitter) {
        self.deadline = None;
        self.remaining = 0;
        self.state = RunState::Configuring;
        cue.stop();
    }

    /// One elapsed second. Called by the event loop when the armed
    /// deadline passes; ignored in any state but Running.
    pub fn tick(&mut self, cue: &mut dyn CueEmitter) {
        if self.state != RunState::Running {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.deadline = None;
            self.state = RunState::Completed;
            cue.stop();
            return;
        }

        if self.remaining <= WARNING_WINDOW {
            cue.warn();
        }
        // Rearm from the previous deadline, not from now, so render
        // latency does not stretch the second.
        self.deadline = self.deadline.map(|d| d + TICK_INTERVAL);
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::{CueCall, RecordingCue};

    fn configured(minutes: u32, seconds: u32) -> TimerController {
        let mut timer = TimerController::new();
        timer.configure(minutes, seconds);
        timer
    }

    /// Drive a running timer through `n` elapsed seconds.
    fn run_ticks(timer: &mut TimerController, cue: &mut RecordingCue, n: u32) {
        for _ in 0..n {
            timer.tick(cue);
        }
    }

    // -- configure --

    #[test]
    fn configure_computes_duration_and_remaining() {
        for (m, s, total) in [(0, 0, 0), (0, 10, 10), (1, 3, 63), (25, 0, 1500), (99, 59, 5999)] {
            let timer = configured(m, s);
            assert_eq!(timer.duration(), total, "for {}m {}s", m, s);
            assert_eq!(timer.remaining(), total, "for {}m {}s", m, s);
        }
    }

    #[test]
    fn configure_clamps_oversized_entries() {
        let timer = configured(100, 75);
        assert_eq!(timer.duration(), 99 * 60 + 59);
    }

    #[test]
    fn configure_zero_stays_configuring() {
        let timer = configured(0, 0);
        assert_eq!(timer.state(), RunState::Configuring);
    }

    #[test]
    fn configure_nonzero_goes_idle() {
        let timer = configured(0, 10);
        assert_eq!(timer.state(), RunState::Idle);
    }

    #[test]
    fn configure_is_ignored_while_running() {
        let mut timer = configured(0, 10);
        timer.start();
        timer.configure(5, 0);
        assert_eq!(timer.duration(), 10);
        assert_eq!(timer.state(), RunState::Running);
    }

    #[test]
    fn configure_is_ignored_while_paused() {
        let mut timer = configured(0, 10);
        timer.start();
        timer.pause();
        timer.configure(5, 0);
        assert_eq!(timer.duration(), 10);
        assert_eq!(timer.remaining(), 10);
    }

    #[test]
    fn configure_allowed_again_after_completion() {
        let mut timer = configured(0, 2);
        let mut cue = RecordingCue::default();
        timer.start();
        run_ticks(&mut timer, &mut cue, 2);
        assert_eq!(timer.state(), RunState::Completed);

        timer.configure(0, 30);
        assert_eq!(timer.state(), RunState::Idle);
        assert_eq!(timer.remaining(), 30);
    }

    // -- start --

    #[test]
    fn start_requires_nonzero_duration() {
        let mut timer = TimerController::new();
        timer.start();
        assert_eq!(timer.state(), RunState::Configuring);
        assert!(timer.tick_deadline().is_none());
    }

    #[test]
    fn start_arms_a_deadline() {
        let mut timer = configured(0, 10);
        timer.start();
        assert!(timer.is_running());
        assert!(timer.tick_deadline().is_some());
    }

    #[test]
    fn start_is_noop_while_already_running() {
        let mut timer = configured(0, 10);
        let mut cue = RecordingCue::default();
        timer.start();
        run_ticks(&mut timer, &mut cue, 3);
        timer.start();
        // A second start mid-count must not rewind anything
        assert_eq!(timer.remaining(), 7);
    }

    #[test]
    fn start_after_pause_restarts_from_full_duration() {
        // Deliberate: resuming is a restart, the paused partial
        // countdown is discarded.
        let mut timer = configured(0, 10);
        let mut cue = RecordingCue::default();
        timer.start();
        run_ticks(&mut timer, &mut cue, 4);
        timer.pause();
        assert_eq!(timer.remaining(), 6);

        timer.start();
        assert_eq!(timer.remaining(), 10);
        assert!(timer.is_running());
    }

    // -- tick / completion --

    #[test]
    fn full_countdown_reaches_exactly_zero_then_completes() {
        let mut timer = configured(0, 10);
        let mut cue = RecordingCue::default();
        timer.start();
        run_ticks(&mut timer, &mut cue, 10);

        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.state(), RunState::Completed);
        assert!(timer.tick_deadline().is_none());
    }

    #[test]
    fn ticks_after_completion_change_nothing() {
        let mut timer = configured(0, 3);
        let mut cue = RecordingCue::default();
        timer.start();
        run_ticks(&mut timer, &mut cue, 3);

        let stops_at_completion = cue.stops();
        run_ticks(&mut timer, &mut cue, 5);
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.state(), RunState::Completed);
        assert_eq!(cue.stops(), stops_at_completion);
    }

    #[test]
    fn completion_stops_the_cue_channel() {
        let mut timer = configured(0, 1);
        let mut cue = RecordingCue::default();
        timer.start();
        timer.tick(&mut cue);
        assert_eq!(cue.stops(), 1);
    }

    #[test]
    fn tick_is_ignored_when_not_running() {
        let mut timer = configured(0, 10);
        let mut cue = RecordingCue::default();
        timer.tick(&mut cue);
        assert_eq!(timer.remaining(), 10);

        timer.start();
        timer.pause();
        timer.tick(&mut cue);
        assert_eq!(timer.remaining(), 10);
        assert!(cue.calls.is_empty());
    }

    #[test]
    fn remaining_never_exceeds_duration() {
        let mut timer = configured(1, 30);
        let mut cue = RecordingCue::default();
        timer.start();
        for _ in 0..90 {
            assert!(timer.remaining() <= timer.duration());
            timer.tick(&mut cue);
        }
        assert!(timer.remaining() <= timer.duration());
    }

    // -- warning cues --

    #[test]
    fn warning_cue_fires_once_per_second_over_final_five() {
        let mut timer = configured(0, 10);
        let mut cue = RecordingCue::default();
        timer.start();

        // Seconds 10 down to 6: quiet
        run_ticks(&mut timer, &mut cue, 4);
        assert_eq!(cue.warns(), 0);

        // Remaining hits 5, 4, 3, 2, 1: one cue each
        for expected in 1..=5 {
            timer.tick(&mut cue);
            assert_eq!(cue.warns(), expected);
        }

        // Final tick completes with no further warning
        timer.tick(&mut cue);
        assert_eq!(cue.warns(), 5);
        assert_eq!(timer.state(), RunState::Completed);
    }

    #[test]
    fn short_countdown_warns_only_inside_the_window() {
        let mut timer = configured(0, 3);
        let mut cue = RecordingCue::default();
        timer.start();
        run_ticks(&mut timer, &mut cue, 3);
        // Warned at 2 and 1; the tick to 0 stops instead
        assert_eq!(
            cue.calls,
            vec![CueCall::Warn, CueCall::Warn, CueCall::Stop]
        );
    }

    // -- pause --

    #[test]
    fn pause_preserves_remaining_and_disarms() {
        let mut timer = configured(0, 10);
        let mut cue = RecordingCue::default();
        timer.start();
        run_ticks(&mut timer, &mut cue, 3);
        timer.pause();

        assert_eq!(timer.state(), RunState::Paused);
        assert_eq!(timer.remaining(), 7);
        assert!(timer.tick_deadline().is_none());
    }

    #[test]
    fn pause_is_noop_when_not_running() {
        let mut timer = configured(0, 10);
        timer.pause();
        assert_eq!(timer.state(), RunState::Idle);
    }

    // -- reset --

    #[test]
    fn reset_succeeds_from_every_state() {
        let mut cue = RecordingCue::default();

        // Configuring
        let mut timer = TimerController::new();
        timer.reset(&mut cue);
        assert_eq!(timer.state(), RunState::Configuring);

        // Idle
        let mut timer = configured(0, 10);
        timer.reset(&mut cue);
        assert_eq!(timer.remaining(), 0);

        // Running
        let mut timer = configured(0, 10);
        timer.start();
        timer.reset(&mut cue);
        assert_eq!(timer.remaining(), 0);
        assert!(timer.tick_deadline().is_none());

        // Paused
        let mut timer = configured(0, 10);
        timer.start();
        timer.pause();
        timer.reset(&mut cue);
        assert_eq!(timer.remaining(), 0);

        // Completed
        let mut timer = configured(0, 1);
        timer.start();
        timer.tick(&mut cue);
        timer.reset(&mut cue);
        assert_eq!(timer.state(), RunState::Configuring);
    }

    #[test]
    fn reset_cuts_the_cue_channel() {
        let mut timer = configured(0, 10);
        let mut cue = RecordingCue::default();
        timer.start();
        timer.reset(&mut cue);
        assert_eq!(cue.stops(), 1);
    }

    #[test]
    fn reset_keeps_the_configured_duration() {
        let mut timer = configured(2, 30);
        let mut cue = RecordingCue::default();
        timer.start();
        timer.reset(&mut cue);
        assert_eq!(timer.duration(), 150);
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn no_decrement_happens_after_reset() {
        let mut timer = configured(0, 10);
        let mut cue = RecordingCue::default();
        timer.start();
        timer.reset(&mut cue);
        // Even if a stale wake-up were delivered, nothing moves
        timer.tick(&mut cue);
        assert_eq!(timer.remaining(), 0);
        assert!(timer.tick_deadline().is_none());
    }
}
