//! Host-side stand-ins for the badge hardware.

#![allow(dead_code)]

use std::{
    cell::Cell,
    collections::VecDeque,
    convert::Infallible,
    rc::Rc,
};

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
};
use embedded_hal_async::delay::DelayNs;
use flappy_badge::{
    Clock,
    Controls,
    Cue,
    Keys,
    NoiseSource,
    Notifier,
    ScoreReporter,
    state::{
        SCREEN_H,
        SCREEN_W,
    },
};

pub const NONE: Keys = Keys {
    primary: false,
    secondary: false,
};
pub const PRIMARY: Keys = Keys {
    primary: true,
    secondary: false,
};
pub const SECONDARY: Keys = Keys {
    primary: false,
    secondary: true,
};

/// 128x160 screen that remembers the last colour written to each pixel.
pub struct Canvas {
    pixels: Vec<Option<Rgb565>>,
    /// Pixel writes that fell outside the screen.
    pub out_of_bounds: usize,
    /// When set, every draw call records the counter's value in `taps`.
    pub tap: Option<Rc<Cell<usize>>>,
    pub taps: Vec<usize>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pixels: vec![None; (SCREEN_W * SCREEN_H) as usize],
            out_of_bounds: 0,
            tap: None,
            taps: Vec::new(),
        }
    }

    pub fn at(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.pixels[(y * SCREEN_W + x) as usize]
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(Option::is_none)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(SCREEN_W as u32, SCREEN_H as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        if let Some(tap) = &self.tap {
            self.taps.push(tap.get());
        }
        for Pixel(p, color) in pixels {
            if (0..SCREEN_W).contains(&p.x) && (0..SCREEN_H).contains(&p.y) {
                self.pixels[(p.y * SCREEN_W + p.x) as usize] = Some(color);
            } else {
                self.out_of_bounds += 1;
            }
        }
        Ok(())
    }
}

/// Time only moves when someone waits, or when `step_ms` is set, on every
/// read of the clock.
#[derive(Clone, Default)]
pub struct FakeClock {
    now_ns: Rc<Cell<u64>>,
    pub step_ms: u64,
}

impl FakeClock {
    /// A clock that also moves `step_ms` on every read.
    pub fn stepping(step_ms: u64) -> Self {
        Self {
            step_ms,
            ..Self::default()
        }
    }

    pub fn now(&self) -> u64 {
        self.now_ns.get() / 1_000_000
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now_ns.set(self.now_ns.get() + ms * 1_000_000);
    }
}

impl DelayNs for FakeClock {
    async fn delay_ns(&mut self, ns: u32) {
        self.now_ns.set(self.now_ns.get() + u64::from(ns));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.advance_ms(u64::from(ms));
    }
}

impl Clock for FakeClock {
    fn now_ms(&mut self) -> u64 {
        self.advance_ms(self.step_ms);
        self.now()
    }
}

/// Plays back queued key states, then repeats `idle`.
pub struct Script {
    queue: VecDeque<Keys>,
    pub idle: Keys,
    pub reads: Rc<Cell<usize>>,
}

impl Script {
    pub fn idle(keys: Keys) -> Self {
        Self {
            queue: VecDeque::new(),
            idle: keys,
            reads: Rc::default(),
        }
    }

    pub fn push(&mut self, keys: Keys, times: usize) {
        self.queue.extend(std::iter::repeat_n(keys, times));
    }
}

impl Controls for Script {
    fn read(&mut self) -> Keys {
        self.reads.set(self.reads.get() + 1);
        self.queue.pop_front().unwrap_or(self.idle)
    }
}

/// Key states as a function of the fake clock: each entry holds from its
/// start time until the next entry.
pub struct Timeline {
    clock: FakeClock,
    events: Vec<(u64, Keys)>,
}

impl Timeline {
    pub fn new(clock: &FakeClock, events: &[(u64, Keys)]) -> Self {
        Self {
            clock: clock.clone(),
            events: events.to_vec(),
        }
    }
}

impl Controls for Timeline {
    fn read(&mut self) -> Keys {
        let now = self.clock.now();
        self.events
            .iter()
            .rev()
            .find(|(from, _)| *from <= now)
            .map_or(NONE, |(_, keys)| *keys)
    }
}

#[derive(Default)]
pub struct Cues(pub Vec<Cue>);

impl Notifier for Cues {
    async fn cue(&mut self, cue: Cue) {
        self.0.push(cue);
    }
}

#[derive(Default)]
pub struct Recorder {
    pub requests: Vec<String>,
    pub hang: bool,
    pub fail: bool,
}

impl ScoreReporter for Recorder {
    type Error = ();

    async fn submit(&mut self, request: &str) -> Result<(), ()> {
        self.requests.push(request.to_owned());
        if self.hang {
            core::future::pending::<()>().await;
        }
        if self.fail { Err(()) } else { Ok(()) }
    }
}

pub struct FixedNoise(pub u32);

impl NoiseSource for FixedNoise {
    fn noise(&mut self) -> u32 {
        self.0
    }
}
