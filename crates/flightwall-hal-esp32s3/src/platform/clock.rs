use esp_hal::time::Instant;
use flightwall_core::Clock;

/// Milliseconds since the clock was created, from the esp-hal system timer.
#[derive(Debug, Clone, Copy)]
pub struct BootClock {
    start: Instant,
}

impl BootClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for BootClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for BootClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis()
    }
}
