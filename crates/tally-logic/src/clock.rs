//! Wall-clock source for round timestamps

use std::cell::Cell;

/// Milliseconds since the Unix epoch
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// The host's real clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    fn now_millis(&self) -> i64 {
        let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
        i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
    }

    // `OffsetDateTime::now_utc` has no time source on wasm32-unknown-unknown.
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

/// A clock that always reads the same instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// A clock that advances by a fixed step every time it is read
#[derive(Clone, Debug)]
pub struct SteppingClock {
    next: Cell<i64>,
    step: i64,
}

impl SteppingClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> i64 {
        let now = self.next.get();
        self.next.set(now.saturating_add(self.step));
        now
    }
}
