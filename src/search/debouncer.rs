use std::time::Instant;

#[derive(Debug)]
pub struct Debouncer {
    /// Debounce window in milliseconds (from config)
    delay_ms: u64,
    /// Reference point for millisecond timestamps
    epoch: Instant,
    /// Timestamp of the last input that triggered a debounce
    last_input_ms: Option<u64>,
    /// Whether there's a pending fetch waiting for the debounce to expire
    pending_fetch: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            epoch: Instant::now(),
            last_input_ms: None,
            pending_fetch: false,
        }
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    pub fn schedule_fetch(&mut self) {
        let now = self.now_ms();
        self.schedule_fetch_at(now);
    }

    pub fn schedule_fetch_at(&mut self, now_ms: u64) {
        self.last_input_ms = Some(now_ms);
        self.pending_fetch = true;
    }

    pub fn should_fetch(&self) -> bool {
        self.should_fetch_at(self.now_ms())
    }

    pub fn should_fetch_at(&self, now_ms: u64) -> bool {
        if !self.pending_fetch {
            return false;
        }

        match self.last_input_ms {
            Some(last_ms) => now_ms.saturating_sub(last_ms) >= self.delay_ms,
            None => false,
        }
    }

    pub fn mark_fetched(&mut self) {
        self.pending_fetch = false;
        self.last_input_ms = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending_fetch
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
