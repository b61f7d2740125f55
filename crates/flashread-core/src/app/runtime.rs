impl<S> PlaybackEngine<S>
where
    S: TickScheduler,
{
    /// Start ticking. No-op with no document or when already playing.
    pub fn play(&mut self) {
        if self.status != PlaybackStatus::Paused {
            return;
        }

        self.status = PlaybackStatus::Playing;
        self.start_tick_source();
    }

    pub fn pause(&mut self) {
        self.cancel_tick_source();
        if self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Paused;
        }
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn restart(&mut self) {
        self.pause();
        self.current_index = 0;
        self.current_paragraph_index = 0;
        self.refresh_position();
    }

    /// Advance one word, or pause on the last one. Only acts while playing.
    pub fn tick(&mut self) {
        if !self.is_playing() {
            return;
        }

        if self.current_index < self.last_index() {
            self.current_index += 1;
            self.refresh_position();
        } else {
            debug!(
                "playback: end of document index={} words={}",
                self.current_index,
                self.word_count()
            );
            self.pause();
        }
    }

    /// Timer entry point. Ticks from a cancelled source are dropped.
    pub fn on_tick(&mut self, token: TickToken) {
        if self.tick_source != Some(token) {
            debug!(
                "playback: stale tick token={} active={:?}",
                token, self.tick_source
            );
            return;
        }

        self.tick();
    }

    /// Clamp and apply a new speed. While playing the tick source is
    /// replaced so only the delay until the next word changes.
    pub fn set_words_per_minute(&mut self, wpm: u16) {
        self.apply_wpm(wpm as i64);
    }

    pub fn increase_speed(&mut self) {
        self.increase_speed_by(self.config.wpm_step);
    }

    pub fn decrease_speed(&mut self) {
        self.decrease_speed_by(self.config.wpm_step);
    }

    pub fn increase_speed_by(&mut self, delta: u16) {
        self.apply_wpm(self.wpm as i64 + delta as i64);
    }

    pub fn decrease_speed_by(&mut self, delta: u16) {
        self.apply_wpm(self.wpm as i64 - delta as i64);
    }

    /// Delay between words at the current speed.
    pub fn tick_interval(&self) -> Duration {
        word_interval(self.wpm)
    }

    /// Time left until the last word is shown.
    pub fn remaining_time(&self) -> Duration {
        if self.is_empty() {
            return Duration::ZERO;
        }

        let words_left = self.last_index().saturating_sub(self.current_index);
        self.tick_interval()
            .saturating_mul(u32::try_from(words_left).unwrap_or(u32::MAX))
    }

    fn apply_wpm(&mut self, requested: i64) {
        let next = clamp_wpm(requested);
        if next != self.wpm {
            debug!("playback: wpm {} -> {}", self.wpm, next);
        }
        self.wpm = next;

        if self.is_playing() {
            self.cancel_tick_source();
            self.start_tick_source();
        }
    }

    fn start_tick_source(&mut self) {
        self.cancel_tick_source();
        let interval = self.tick_interval();
        let token = self.scheduler.schedule(interval);
        debug!(
            "playback: tick-source scheduled token={} interval_ms={}",
            token,
            interval.as_millis()
        );
        self.tick_source = Some(token);
    }

    fn cancel_tick_source(&mut self) {
        if let Some(token) = self.tick_source.take() {
            self.scheduler.cancel(token);
            debug!("playback: tick-source cancelled token={}", token);
        }
    }
}

/// `60 / wpm` seconds, computed in microseconds.
pub fn word_interval(wpm: u16) -> Duration {
    Duration::from_micros(60_000_000 / wpm.max(1) as u64)
}
