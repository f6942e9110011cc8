//! Interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, EntryPanel, Action)
//! - `update`: action handling against the countdown controller
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects boundary (terminal, event loop, tick scheduling)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
