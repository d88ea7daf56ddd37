//! WS2812 LED strip on the RMT peripheral, used for crash flashes.

extern crate alloc;

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::{
    Blocking,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    rmt::{
        Channel,
        PulseCode,
        Rmt,
        Tx,
        TxChannelConfig,
        TxChannelCreator as _,
    },
    time::Rate,
};
use palette::Srgb;

use crate::LedResources;

/// Ten LEDs, five on each side of the panel.
pub const LED_COUNT: usize = 10;

/// LED strip with an in-memory frame, sent with [`update`](Leds::update).
pub struct Leds<'a> {
    channel: Option<Channel<'a, Blocking, Tx>>,
    frame: [Srgb<u8>; LED_COUNT],
}

impl<'a> From<LedResources<'a>> for Leds<'a> {
    fn from(res: LedResources<'a>) -> Self {
        let _ws_power = Output::new(res.power, Level::High, OutputConfig::default());
        let rmt = Rmt::new(res.rmt, Rate::from_mhz(40)).unwrap();
        let tx_config = TxChannelConfig::default().with_clk_divider(1);
        let channel = rmt.channel0.configure_tx(res.io, tx_config).unwrap();
        Self {
            channel: Some(channel),
            frame: [Srgb::new(0, 0, 0); LED_COUNT],
        }
    }
}

impl Leds<'_> {
    pub fn fill(&mut self, color: Srgb<u8>) {
        self.frame.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(Srgb::new(0, 0, 0));
    }

    /// Sends the frame to the strip.
    pub async fn update(&mut self) {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return;
        };

        // WS2812 expects GRB byte order
        let pulses = self
            .frame
            .iter()
            .flat_map(|c| {
                [
                    Self::byte_to_pulses(c.green),
                    Self::byte_to_pulses(c.red),
                    Self::byte_to_pulses(c.blue),
                ]
                .into_iter()
                .flatten()
            })
            .chain(core::iter::once(PulseCode::end_marker()))
            .collect::<alloc::vec::Vec<_>>();

        let transaction = match channel.transmit(&pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return;
            }
        };

        self.channel = Some(match transaction.wait() {
            Ok(ch) => ch,
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                ch
            }
        });

        // latch
        Timer::after(Duration::from_micros(50)).await;
    }

    /// Bit timing at the 40 MHz RMT clock: 1 = 0.8 µs high / 0.45 µs low,
    /// 0 = 0.4 µs high / 0.85 µs low.
    const fn bit_to_pulse(bit: bool) -> PulseCode {
        if bit {
            PulseCode::new(Level::High, 32, Level::Low, 18)
        } else {
            PulseCode::new(Level::High, 16, Level::Low, 34)
        }
    }

    fn byte_to_pulses(byte: u8) -> [PulseCode; 8] {
        core::array::from_fn(|i| Self::bit_to_pulse((byte >> (7 - i)) & 1 != 0))
    }
}
