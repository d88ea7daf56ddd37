//! # flappy-badge
//!
//! Flappy Bird for small microcontrollers with a colour LCD and no
//! framebuffer.
//!
//! The game core is `no_std`, allocation free and hardware independent. It
//! draws on any `embedded-graphics` target and talks to the rest of the
//! device through the traits in [`ports`]:
//!
//! - **Display**: pixels, 1-px lines and filled rectangles, nothing read back
//! - **Controls**: two buttons
//! - **Clock**: millisecond counter and async delay
//! - **Notifier**: fire-and-forget crash cue
//! - **ScoreReporter**: one HTTP GET per finished game
//! - **NoiseSource**: seed for the pipe gaps
//!
//! With the `badge` feature the crate also carries board support for the
//! Disobey 2026 badge (ESP32-S3) and the `flappy` firmware binary.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let board = flappy_badge::Board {
//!     display,
//!     clock,
//!     controls,
//!     notifier,
//!     reporter,
//!     noise,
//! };
//! let summary = flappy_badge::Lifecycle::new(board, flappy_badge::Config::default())
//!     .run()
//!     .await?;
//! ```

#![cfg_attr(not(test), no_std)]

// must come first so the logging macros are visible everywhere
mod fmt;

pub mod assets;
pub mod collision;
pub mod config;
pub mod game;
pub mod lifecycle;
pub mod pacer;
pub mod ports;
pub mod render;
pub mod report;
pub mod rng;
pub mod state;

#[cfg(feature = "badge")]
mod board;
#[cfg(feature = "badge")]
mod buttons;
#[cfg(feature = "badge")]
mod clock;
#[cfg(feature = "badge")]
mod display;
#[cfg(feature = "badge")]
mod feedback;
#[cfg(feature = "badge")]
mod leds;
#[cfg(feature = "badge")]
pub mod microphone;

pub use collision::Crash;
pub use config::{
    Config,
    ConfigError,
    Physics,
    ScoreServer,
};
pub use lifecycle::{
    Board,
    Lifecycle,
    Phase,
    Summary,
};
pub use ports::{
    ActiveLow,
    Clock,
    Controls,
    Cue,
    Keys,
    NoiseSource,
    Notifier,
    ScoreReporter,
};
#[cfg(feature = "defmt")]
pub use report::ConsoleReporter;
pub use state::GameState;

#[cfg(feature = "badge")]
pub use board::*;
#[cfg(feature = "badge")]
pub use buttons::Buttons;
#[cfg(feature = "badge")]
pub use clock::EmbassyClock;
#[cfg(feature = "badge")]
pub use display::{
    Backlight,
    Display,
    PLAYFIELD_OFFSET,
    playfield,
};
#[cfg(feature = "badge")]
pub use feedback::Feedback;
#[cfg(feature = "badge")]
pub use leds::Leds;
#[cfg(feature = "badge")]
pub use microphone::Microphone;
