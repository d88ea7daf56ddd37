//! [`Clock`] on top of `embassy-time`.

use embassy_time::{
    Duration,
    Instant,
    Timer,
};
use embedded_hal_async::delay::DelayNs;

use crate::ports::Clock;

pub struct EmbassyClock;

impl DelayNs for EmbassyClock {
    async fn delay_ns(&mut self, ns: u32) {
        Timer::after(Duration::from_nanos(u64::from(ns))).await;
    }

    async fn delay_us(&mut self, us: u32) {
        Timer::after(Duration::from_micros(u64::from(us))).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        Timer::after(Duration::from_millis(u64::from(ms))).await;
    }
}

impl Clock for EmbassyClock {
    fn now_ms(&mut self) -> u64 {
        Instant::now().as_millis()
    }
}
