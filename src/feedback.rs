//! Crash feedback: the badge has no speaker, so cues buzz the vibration
//! motor and flash the LED strip.

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::gpio::{
    Level,
    Output,
    OutputConfig,
};
use palette::Srgb;

use crate::{
    LedResources,
    VibrationResources,
    leds::Leds,
    ports::{
        Cue,
        Notifier,
    },
};

const CRASH_BUZZ: Duration = Duration::from_millis(150);
const CRASH_COLOR: Srgb<u8> = Srgb::new(24, 0, 0);

pub struct Feedback<'a> {
    motor: Output<'static>,
    leds: Leds<'a>,
}

impl<'a> Feedback<'a> {
    pub fn new(motor: VibrationResources<'static>, leds: LedResources<'a>) -> Self {
        Self {
            motor: Output::new(motor.motor, Level::Low, OutputConfig::default()),
            leds: leds.into(),
        }
    }

    /// Motor and LEDs off.
    pub async fn off(&mut self) {
        self.motor.set_low();
        self.leds.clear();
        self.leds.update().await;
    }
}

impl Notifier for Feedback<'_> {
    async fn cue(&mut self, cue: Cue) {
        match cue {
            Cue::Crash => {
                self.leds.fill(CRASH_COLOR);
                self.leds.update().await;
                self.motor.set_high();
                Timer::after(CRASH_BUZZ).await;
                self.motor.set_low();
                self.leds.clear();
                self.leds.update().await;
            }
        }
    }
}
