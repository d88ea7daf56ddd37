//! I2S MEMS microphone, used as the noise source for pipe gaps.
//!
//! Wiring: WS on GPIO8, SD on GPIO3, BCLK on GPIO46.

use embassy_time::Instant;
use esp_hal::{
    Blocking,
    dma::DmaDescriptor,
    i2s::master::{
        Channels,
        Config,
        DataFormat,
        I2s,
        I2sRx,
    },
    time::Rate,
};

use crate::{
    MicResources,
    ports::NoiseSource,
};

pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;

/// Samples folded into one seed.
const NOISE_SAMPLES: usize = 256;

pub struct Microphone<'a> {
    rx: I2sRx<'a, Blocking>,
}

impl<'a> Microphone<'a> {
    /// `descriptors` must live for the program; use [`mk_static!`](crate::mk_static).
    pub fn new(
        res: MicResources<'a>,
        sample_rate: u32,
        descriptors: &'static mut [DmaDescriptor],
    ) -> Self {
        let i2s = I2s::new(
            res.i2s,
            res.dma,
            Config::new_tdm_philips()
                .with_sample_rate(Rate::from_hz(sample_rate))
                .with_data_format(DataFormat::Data16Channel16)
                .with_channels(Channels::MONO),
        )
        .unwrap();

        let rx = i2s
            .i2s_rx
            .with_bclk(res.dio)
            .with_ws(res.ws)
            .with_din(res.sd)
            .build(descriptors);

        Self { rx }
    }
}

/// FNV-1a over the raw samples; the low bits of room noise do the work.
fn fold(samples: &[i16]) -> u32 {
    samples.iter().fold(0x811c_9dc5, |hash: u32, &s| {
        (hash ^ u32::from(s as u16)).wrapping_mul(0x0100_0193)
    })
}

impl NoiseSource for Microphone<'_> {
    fn noise(&mut self) -> u32 {
        let mut buf = [0i16; NOISE_SAMPLES];
        match self.rx.read_words(&mut buf) {
            Ok(()) => fold(&buf),
            Err(e) => {
                warn!("microphone read failed, seeding from uptime: {}", e);
                Instant::now().as_ticks() as u32
            }
        }
    }
}
