//! Tick scheduling abstraction.
//!
//! The engine never owns a clock. It asks a [`TickScheduler`] for a periodic
//! tick source and gets back a [`TickToken`]; the scheduler later delivers
//! ticks by calling [`crate::app::PlaybackEngine::on_tick`] with that token
//! (directly, or through a command queue). Ticks carrying any other token are
//! stale and ignored.

mod manual;

pub use manual::ManualScheduler;

use core::{fmt, time::Duration};

/// Identifies one scheduled tick source.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TickToken(u64);

impl TickToken {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TickToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Periodic timer backend.
pub trait TickScheduler {
    /// Start a tick source firing every `interval`.
    fn schedule(&mut self, interval: Duration) -> TickToken;

    /// Stop the tick source. Unknown or already cancelled tokens are ignored.
    fn cancel(&mut self, token: TickToken);
}

