use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread,
    time::{Duration, Instant},
};

use flashread_core::{
    input::ReaderCommand,
    schedule::{TickScheduler, TickToken},
};
use log::{debug, warn};

use crate::events::AppEvent;

/// Wall-clock tick source. Each scheduled token gets its own thread that
/// posts [`ReaderCommand::Tick`] into the event channel until cancelled.
pub struct ThreadScheduler {
    events: Sender<AppEvent>,
    next_token: u64,
    live: HashMap<TickToken, Arc<AtomicBool>>,
}

impl ThreadScheduler {
    pub fn new(events: Sender<AppEvent>) -> Self {
        Self {
            events,
            next_token: 1,
            live: HashMap::new(),
        }
    }
}

impl TickScheduler for ThreadScheduler {
    fn schedule(&mut self, interval: Duration) -> TickToken {
        let token = TickToken::new(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);

        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let events = self.events.clone();
        let spawned = thread::Builder::new()
            .name(format!("tick-{}", token.raw()))
            .spawn(move || run_ticks(token, interval, &flag, &events));

        match spawned {
            Ok(_) => {
                debug!(
                    "scheduler: started token={} interval_us={}",
                    token,
                    interval.as_micros()
                );
                self.live.insert(token, running);
            }
            Err(err) => warn!(
                "scheduler: tick thread failed to start token={} err={}",
                token, err
            ),
        }

        token
    }

    fn cancel(&mut self, token: TickToken) {
        if let Some(running) = self.live.remove(&token) {
            running.store(false, Ordering::Release);
            debug!("scheduler: cancelled token={}", token);
        }
    }
}

impl Drop for ThreadScheduler {
    fn drop(&mut self) {
        for running in self.live.values() {
            running.store(false, Ordering::Release);
        }
    }
}

// Deadlines advance by whole intervals so sleep overshoot does not accumulate.
fn run_ticks(
    token: TickToken,
    interval: Duration,
    running: &AtomicBool,
    events: &Sender<AppEvent>,
) {
    let mut deadline = Instant::now() + interval;
    loop {
        thread::sleep(deadline.saturating_duration_since(Instant::now()));
        if !running.load(Ordering::Acquire) {
            break;
        }
        if events
            .send(AppEvent::Command(ReaderCommand::Tick(token)))
            .is_err()
        {
            break;
        }
        deadline += interval;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn ticks_carry_their_token_and_stop_after_cancel() {
        let (tx, rx) = mpsc::channel();
        let mut scheduler = ThreadScheduler::new(tx);
        let token = scheduler.schedule(Duration::from_millis(5));

        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(first, AppEvent::Command(ReaderCommand::Tick(token)));

        scheduler.cancel(token);
        thread::sleep(Duration::from_millis(30));
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn tokens_are_distinct() {
        let (tx, _rx) = mpsc::channel();
        let mut scheduler = ThreadScheduler::new(tx);
        let a = scheduler.schedule(Duration::from_secs(60));
        let b = scheduler.schedule(Duration::from_secs(60));
        assert_ne!(a, b);
        scheduler.cancel(a);
        scheduler.cancel(b);
    }
}
