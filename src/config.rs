//! Game tuning and score-server configuration.

use core::fmt;

use heapless::String;

/// Longest accepted player identity, in bytes.
pub const USER_CAP: usize = 32;
/// Longest accepted score-server host, in bytes.
pub const HOST_CAP: usize = 64;

/// Physics and pacing constants.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Physics {
    /// Downward acceleration, applied as `gravity * dt` per tick.
    pub gravity: f32,
    /// Upward velocity set by a flap.
    pub jump_force: f32,
    /// Pipe scroll in pixels per tick.
    pub speed: i32,
    /// Simulated time covered by one tick.
    pub tick_ms: u32,
    /// Upper bound on catch-up ticks between two draws.
    pub max_frameskip: u8,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            jump_force: 2.15,
            speed: 1,
            tick_ms: 20,
            max_frameskip: 5,
        }
    }
}

impl Physics {
    /// Length of one tick in seconds.
    pub fn tick_seconds(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }
}

/// Why a score server could not be configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    EmptyHost,
    UserTooLong,
    HostTooLong,
    /// The identity contains characters that are not safe in a query string.
    InvalidUser,
    /// The host contains whitespace or control characters.
    InvalidHost,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHost => f.write_str("score server host is empty"),
            Self::UserTooLong => write!(f, "user identity longer than {USER_CAP} bytes"),
            Self::HostTooLong => write!(f, "score server host longer than {HOST_CAP} bytes"),
            Self::InvalidUser => f.write_str("user identity contains characters unsafe in a URL"),
            Self::InvalidHost => f.write_str("score server host contains whitespace or control characters"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Where finished scores are reported, and under which identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreServer {
    user: String<USER_CAP>,
    host: String<HOST_CAP>,
}

impl ScoreServer {
    pub fn new(user: &str, host: &str) -> Result<Self, ConfigError> {
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if !user.bytes().all(is_unreserved) {
            return Err(ConfigError::InvalidUser);
        }
        if !host.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(ConfigError::InvalidHost);
        }

        let mut server = Self {
            user: String::new(),
            host: String::new(),
        };
        server
            .user
            .push_str(user)
            .map_err(|()| ConfigError::UserTooLong)?;
        server
            .host
            .push_str(host)
            .map_err(|()| ConfigError::HostTooLong)?;
        Ok(server)
    }

    /// Builds a server from optional environment-style values, where a
    /// missing or empty host means reporting is disabled.
    pub fn from_parts(user: Option<&str>, host: Option<&str>) -> Result<Option<Self>, ConfigError> {
        match host {
            None | Some("") => Ok(None),
            Some(host) => Self::new(user.unwrap_or_default(), host).map(Some),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

/// RFC 3986 unreserved characters.
const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Everything the lifecycle needs to know that is not hardware.
///
/// ```rust
/// use flappy_badge::{Config, ScoreServer};
///
/// let config = Config::default()
///     .with_poll_interval_ms(5)
///     .with_score_server(ScoreServer::new("player1", "scores.example").ok());
/// assert_eq!(config.poll_interval_ms, 5);
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    pub physics: Physics,
    /// Pause after a crash so the player sees what happened.
    pub game_over_delay_ms: u32,
    /// Button polling period on the game-over screen.
    pub poll_interval_ms: u32,
    /// Upper bound on a score submission.
    pub report_timeout_ms: u32,
    /// `None` disables score reporting.
    pub score_server: Option<ScoreServer>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            physics: Physics::default(),
            game_over_delay_ms: 1200,
            poll_interval_ms: 10,
            report_timeout_ms: 5000,
            score_server: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_physics(mut self, physics: Physics) -> Self {
        self.physics = physics;
        self
    }

    #[must_use]
    pub fn with_game_over_delay_ms(mut self, ms: u32) -> Self {
        self.game_over_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn with_poll_interval_ms(mut self, ms: u32) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    #[must_use]
    pub fn with_report_timeout_ms(mut self, ms: u32) -> Self {
        self.report_timeout_ms = ms;
        self
    }

    #[must_use]
    pub fn with_score_server(mut self, server: Option<ScoreServer>) -> Self {
        self.score_server = server;
        self
    }
}
