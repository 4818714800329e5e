// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::{Duration, Instant};

/// Fixed-period tick source. Callers poll it with the current time and run
/// as many ticks as have become due.
pub struct FixedTicker {
    period: Duration,
    next: Instant,
}

impl FixedTicker {
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks elapsed up to `now`. Each tick is only reported once.
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next {
            self.next += self.period;
            ticks += 1;
        }
        ticks
    }

    /// Time left before the next tick becomes due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }
}
