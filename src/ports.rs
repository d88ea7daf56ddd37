//! Traits for the hardware the game is driven through.
//!
//! The display is any `embedded_graphics` [`DrawTarget`] with `Rgb565`
//! colour; everything else gets a small trait here so boards and tests can
//! supply their own.
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;

/// Level of the two game buttons at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keys {
    /// Flap, and "restart" on the game-over screen.
    pub primary: bool,
    /// Flap, and "exit" on the game-over screen.
    pub secondary: bool,
}

impl Keys {
    pub const fn any(self) -> bool {
        self.primary || self.secondary
    }
}

/// Samples the buttons. Debouncing is the implementor's concern.
pub trait Controls {
    fn read(&mut self) -> Keys;
}

/// Two active-low buttons on plain input pins.
///
/// A pin that fails to read counts as released.
pub struct ActiveLow<A, B> {
    pub primary: A,
    pub secondary: B,
}

impl<A: InputPin, B: InputPin> Controls for ActiveLow<A, B> {
    fn read(&mut self) -> Keys {
        Keys {
            primary: self.primary.is_low().unwrap_or(false),
            secondary: self.secondary.is_low().unwrap_or(false),
        }
    }
}

/// Monotonic time source with an async delay.
pub trait Clock: DelayNs {
    fn now_ms(&mut self) -> u64;
}

/// Audible or haptic cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    Crash,
}

/// Fire-and-forget feedback.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    async fn cue(&mut self, cue: Cue);
}

/// Transport for a finished score. Sends one pre-formatted request; any
/// response is ignored.
#[allow(async_fn_in_trait)]
pub trait ScoreReporter {
    type Error;

    async fn submit(&mut self, request: &str) -> Result<(), Self::Error>;
}

/// Environmental noise used to seed the pipe gaps.
pub trait NoiseSource {
    fn noise(&mut self) -> u32;
}

#[cfg(test)]
mod tests {
    use embedded_hal::digital::{
        ErrorKind,
        ErrorType,
    };

    use super::*;

    /// Input pin stuck at one level, or failing every read.
    struct Pin(Result<bool, ErrorKind>);

    const HIGH: Pin = Pin(Ok(true));
    const LOW: Pin = Pin(Ok(false));
    const BROKEN: Pin = Pin(Err(ErrorKind::Other));

    impl ErrorType for Pin {
        type Error = ErrorKind;
    }

    impl InputPin for Pin {
        fn is_high(&mut self) -> Result<bool, ErrorKind> {
            self.0
        }

        fn is_low(&mut self) -> Result<bool, ErrorKind> {
            self.0.map(|high| !high)
        }
    }

    #[test]
    fn low_is_pressed() {
        let mut buttons = ActiveLow {
            primary: LOW,
            secondary: HIGH,
        };
        assert_eq!(
            buttons.read(),
            Keys {
                primary: true,
                secondary: false
            }
        );

        let mut buttons = ActiveLow {
            primary: HIGH,
            secondary: LOW,
        };
        assert_eq!(
            buttons.read(),
            Keys {
                primary: false,
                secondary: true
            }
        );
    }

    #[test]
    fn released_buttons_read_high() {
        let mut buttons = ActiveLow {
            primary: HIGH,
            secondary: HIGH,
        };
        assert!(!buttons.read().any());
    }

    #[test]
    fn read_errors_count_as_released() {
        let mut buttons = ActiveLow {
            primary: BROKEN,
            secondary: LOW,
        };
        assert_eq!(
            buttons.read(),
            Keys {
                primary: false,
                secondary: true
            }
        );

        let mut buttons = ActiveLow {
            primary: BROKEN,
            secondary: BROKEN,
        };
        assert_eq!(buttons.read(), Keys::default());
    }
}
