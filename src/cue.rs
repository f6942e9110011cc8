//! Spoken cue capability: the single audio channel of the app.
//!
//! The countdown controller signals through [`CueEmitter`]; implementations
//! decide what, if anything, comes out of the speakers. Every failure is
//! swallowed — a missing speech engine degrades to silence, never to a
//! stopped countdown.
//!
//! TTS engines exist on Windows/macOS; Linux shells out to espeak.

/// Fixed phrase spoken once per second during the final five seconds.
pub const WARNING_PHRASE: &str = "attention";

// ============================================================================
// CAPABILITY
// ============================================================================

/// The cue channel as seen by the countdown controller.
pub trait CueEmitter {
    /// Speak the warning phrase. Best-effort, fire-and-forget;
    /// overlapping calls may queue in the platform engine.
    fn warn(&mut self);

    /// Cancel whatever is currently playing. Best-effort; speech already
    /// in flight may run to completion.
    fn stop(&mut self);
}

// ============================================================================
// PLATFORM SPEECH
// ============================================================================

/// Speaks through the platform TTS engine.
///
/// Construction never fails: if no engine is available the emitter is
/// created mute and every call is a no-op.
pub struct SpeechCue {
    #[cfg(not(target_os = "linux"))]
    engine: Option<tts::Tts>,
}

impl SpeechCue {
    pub fn new() -> Self {
        #[cfg(not(target_os = "linux"))]
        let engine = match tts::Tts::default() {
            Ok(mut engine) => {
                let _ = engine.set_rate(engine.normal_rate());
                Some(engine)
            }
            Err(_) => None,
        };

        Self {
            #[cfg(not(target_os = "linux"))]
            engine,
        }
    }
}

impl Default for SpeechCue {
    fn default() -> Self {
        Self::new()
    }
}

impl CueEmitter for SpeechCue {
    #[cfg(not(target_os = "linux"))]
    fn warn(&mut self) {
        if let Some(engine) = &mut self.engine {
            // interrupt = false: back-to-back cues queue instead of clipping
            let _ = engine.speak(WARNING_PHRASE, false);
        }
    }

    #[cfg(target_os = "linux")]
    fn warn(&mut self) {
        use std::process::Command;
        std::thread::spawn(|| {
            let _ = Command::new("espeak").arg(WARNING_PHRASE).output();
        });
    }

    #[cfg(not(target_os = "linux"))]
    fn stop(&mut self) {
        if let Some(engine) = &mut self.engine {
            let _ = engine.stop();
        }
    }

    #[cfg(target_os = "linux")]
    fn stop(&mut self) {
        // A spawned espeak utterance is in-flight speech; let it finish.
    }
}

// ============================================================================
// SILENT
// ============================================================================

/// Emits nothing. Used for `--mute` and audio-less environments.
pub struct NullCue;

impl CueEmitter for NullCue {
    fn warn(&mut self) {}
    fn stop(&mut self) {}
}

// ============================================================================
// RECORDING (test double)
// ============================================================================

/// Records every call in order, for assertions on cue timing.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingCue {
    pub calls: Vec<CueCall>,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueCall {
    Warn,
    Stop,
}

#[cfg(test)]
impl RecordingCue {
    pub fn warns(&self) -> usize {
        self.calls.iter().filter(|c| **c == CueCall::Warn).count()
    }

    pub fn stops(&self) -> usize {
        self.calls.iter().filter(|c| **c == CueCall::Stop).count()
    }
}

#[cfg(test)]
impl CueEmitter for RecordingCue {
    fn warn(&mut self) {
        self.calls.push(CueCall::Warn);
    }

    fn stop(&mut self) {
        self.calls.push(CueCall::Stop);
    }
}

// ============================================================================
// TESTS
// ============================================================================
