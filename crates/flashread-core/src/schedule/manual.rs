use core::time::Duration;

use super::{TickScheduler, TickToken};

/// Simulated-clock scheduler. Records what the engine asked for so callers
/// (tests, step-driven hosts) decide when ticks fire.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    next_token: u64,
    active: Vec<(TickToken, Duration)>,
    scheduled_total: usize,
    cancelled_total: usize,
}

impl ManualScheduler {
    pub const fn new() -> Self {
        Self {
            next_token: 0,
            active: Vec::new(),
            scheduled_total: 0,
            cancelled_total: 0,
        }
    }

    /// Sources that were scheduled and not cancelled yet.
    pub fn active(&self) -> &[(TickToken, Duration)] {
        &self.active
    }

    pub fn active_token(&self) -> Option<TickToken> {
        self.active.last().map(|(token, _)| *token)
    }

    pub fn active_interval(&self) -> Option<Duration> {
        self.active.last().map(|(_, interval)| *interval)
    }

    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total
    }

    pub fn cancelled_total(&self) -> usize {
        self.cancelled_total
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, interval: Duration) -> TickToken {
        self.next_token = self.next_token.wrapping_add(1);
        let token = TickToken::new(self.next_token);
        self.active.push((token, interval));
        self.scheduled_total += 1;
        token
    }

    fn cancel(&mut self, token: TickToken) {
        let before = self.active.len();
        self.active.retain(|(active, _)| *active != token);
        if self.active.len() != before {
            self.cancelled_total += 1;
        }
    }
}
