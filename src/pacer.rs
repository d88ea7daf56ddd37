//! Fixed-timestep pacing with a bounded frame-skip.
//!
//! Physics runs on a fixed schedule of `tick_ms`. When drawing falls behind,
//! several ticks are run back to back before the next draw, but never more
//! than `max_frameskip`, so a slow frame cannot snowball into a long stall.

#[derive(Clone, Debug)]
pub struct Pacer {
    next_tick_ms: u64,
    tick_ms: u64,
    max_frameskip: u8,
    updates: u8,
}

impl Pacer {
    pub fn new(now_ms: u64, tick_ms: u32, max_frameskip: u8) -> Self {
        Self {
            next_tick_ms: now_ms,
            tick_ms: u64::from(tick_ms.max(1)),
            max_frameskip: max_frameskip.max(1),
            updates: 0,
        }
    }

    /// Starts a new draw frame.
    pub fn begin_frame(&mut self) {
        self.updates = 0;
    }

    /// Whether another tick is due at `now_ms`. Advances the schedule when it is.
    pub fn should_update(&mut self, now_ms: u64) -> bool {
        if now_ms > self.next_tick_ms && self.updates < self.max_frameskip {
            self.next_tick_ms += self.tick_ms;
            self.updates += 1;
            true
        } else {
            false
        }
    }

    /// Ticks run since [`begin_frame`](Self::begin_frame).
    pub fn updates(&self) -> u8 {
        self.updates
    }

    /// Milliseconds until the next tick becomes due, zero if one already is.
    pub fn until_next(&self, now_ms: u64) -> u64 {
        (self.next_tick_ms + 1).saturating_sub(now_ms)
    }
}
