//! countdown CLI
//!
//! Fullscreen terminal countdown timer: set a duration, start it, and get
//! a spoken warning over the final five seconds.

use std::process::ExitCode;

use clap::Parser;

use countdown::cue::{NullCue, SpeechCue};
use countdown::timer::{MAX_MINUTES, MAX_SECONDS};
use countdown::tui::run::run;
use countdown::tui::state::App;

#[derive(Parser)]
#[command(name = "countdown")]
#[command(about = "Fullscreen terminal countdown timer")]
#[command(version)]
struct Cli {
    /// Initial duration, as MM:SS or a plain seconds count (e.g. "5:00", "90")
    #[arg(value_parser = parse_duration)]
    duration: Option<InitialDuration>,

    /// Run without the spoken warning cue
    #[arg(long)]
    mute: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InitialDuration {
    minutes: u32,
    seconds: u32,
}

/// Parse "MM:SS" or a plain seconds count.
///
/// Numeric components out of range clamp like every other entry path;
/// non-numeric text is rejected here, at the argument boundary.
fn parse_duration(s: &str) -> Result<InitialDuration, String> {
    let s = s.trim();
    if let Some((minutes, seconds)) = s.split_once(':') {
        let minutes: u32 = minutes
            .parse()
            .map_err(|_| format!("invalid minutes: {}", minutes))?;
        let seconds: u32 = seconds
            .parse()
            .map_err(|_| format!("invalid seconds: {}", seconds))?;
        Ok(InitialDuration {
            minutes: minutes.min(MAX_MINUTES),
            seconds: seconds.min(MAX_SECONDS),
        })
    } else {
        let total: u32 = s
            .parse()
            .map_err(|_| format!("invalid duration: {}", s))?;
        Ok(InitialDuration {
            minutes: (total / 60).min(MAX_MINUTES),
            seconds: total % 60,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let app = match cli.duration {
        Some(initial) => App::with_duration(initial.minutes, initial.seconds),
        None => App::new(),
    };

    let result = if cli.mute {
        run(app, &mut NullCue)
    } else {
        run(app, &mut SpeechCue::new())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
