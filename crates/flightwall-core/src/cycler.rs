//! Time-based rotation through the currently visible flights.

/// Monotonic millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Result of asking the cycler which card should be on screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Selection {
    Empty,
    Card(usize),
}

/// Picks which card to show out of `count`, advancing one position every
/// `interval_ms`.
///
/// The rotation anchor is set when a multi-card set is first seen and is
/// moved forward in whole intervals, so late calls never accumulate drift
/// and a long stall advances by exactly one card.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CardCycler {
    interval_ms: u64,
    index: usize,
    anchor_ms: Option<u64>,
}

impl CardCycler {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            index: 0,
            anchor_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Index of the card selected by the last call to [`Self::select`].
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.anchor_ms = None;
    }

    pub fn select(&mut self, count: usize, now_ms: u64) -> Selection {
        match count {
            0 => {
                self.reset();
                Selection::Empty
            }
            1 => {
                self.reset();
                Selection::Card(0)
            }
            _ => Selection::Card(self.rotate(count, now_ms)),
        }
    }

    fn rotate(&mut self, count: usize, now_ms: u64) -> usize {
        if self.index >= count {
            self.index %= count;
        }

        let Some(anchor) = self.anchor_ms else {
            self.anchor_ms = Some(now_ms);
            return self.index;
        };

        let elapsed = now_ms.saturating_sub(anchor);
        if elapsed >= self.interval_ms {
            self.index = (self.index + 1) % count;
            self.anchor_ms = Some(anchor + (elapsed / self.interval_ms) * self.interval_ms);
        }

        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualClock;

    const T: u64 = 5_000;

    #[test]
    fn empty_set_selects_nothing() {
        let mut cycler = CardCycler::new(T);
        assert_eq!(cycler.select(0, 0), Selection::Empty);
        assert_eq!(cycler.select(0, 10 * T), Selection::Empty);
    }

    #[test]
    fn single_card_never_moves() {
        let clock = ManualClock::new(0);
        let mut cycler = CardCycler::new(T);

        for _ in 0..1000 {
            assert_eq!(cycler.select(1, clock.now_ms()), Selection::Card(0));
            clock.advance(T / 3);
        }
    }

    #[test]
    fn advances_once_per_interval_regardless_of_call_rate() {
        let clock = ManualClock::new(1_000);
        let mut cycler = CardCycler::new(T);
        let mut advances = 0;
        let mut last = cycler.select(3, clock.now_ms());

        // 100 calls per interval, across two intervals.
        for _ in 0..200 {
            clock.advance(T / 100);
            let next = cycler.select(3, clock.now_ms());
            if next != last {
                advances += 1;
            }
            last = next;
        }

        assert_eq!(advances, 2);
        assert_eq!(last, Selection::Card(2));
    }

    #[test]
    fn wraps_around_the_set() {
        let mut cycler = CardCycler::new(T);
        let seen: [Selection; 4] = core::array::from_fn(|i| cycler.select(3, i as u64 * T));
        assert_eq!(
            seen,
            [
                Selection::Card(0),
                Selection::Card(1),
                Selection::Card(2),
                Selection::Card(0),
            ]
        );
    }

    #[test]
    fn a_late_call_advances_once_and_keeps_the_phase() {
        let mut cycler = CardCycler::new(T);
        assert_eq!(cycler.select(4, 0), Selection::Card(0));

        // Stalled for three and a half intervals.
        assert_eq!(cycler.select(4, 3 * T + T / 2), Selection::Card(1));
        // The anchor sits on the 3T boundary, not at the late call.
        assert_eq!(cycler.select(4, 4 * T - 1), Selection::Card(1));
        assert_eq!(cycler.select(4, 4 * T), Selection::Card(2));
    }

    #[test]
    fn shrinking_set_clamps_the_index() {
        let mut cycler = CardCycler::new(T);
        cycler.select(5, 0);
        for step in 1..=4 {
            cycler.select(5, step * T);
        }
        assert_eq!(cycler.index(), 4);

        assert_eq!(cycler.select(3, 4 * T + 1), Selection::Card(1));
    }

    #[test]
    fn dropping_to_one_card_restarts_rotation() {
        let mut cycler = CardCycler::new(T);
        cycler.select(3, 0);
        cycler.select(3, T);
        assert_eq!(cycler.index(), 1);

        assert_eq!(cycler.select(1, T + 1), Selection::Card(0));
        assert_eq!(cycler.select(3, 10 * T), Selection::Card(0));
        assert_eq!(cycler.select(3, 11 * T), Selection::Card(1));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut cycler = CardCycler::new(0);
        assert_eq!(cycler.interval_ms(), 1);
        assert_eq!(cycler.select(2, 0), Selection::Card(0));
        assert_eq!(cycler.select(2, 0), Selection::Card(0));
        assert_eq!(cycler.select(2, 1), Selection::Card(1));
    }

    #[test]
    fn clock_going_backwards_holds_the_card() {
        let mut cycler = CardCycler::new(T);
        cycler.select(2, 10 * T);
        assert_eq!(cycler.select(2, 0), Selection::Card(0));
    }
}
