//! Fixed-horizon sample history for latency compensation.

use std::time::Duration;

use crate::error::HistoryError;

/// Ring of the last `N` samples of a signal, one per fixed period.
///
/// The owning control loop calls [`update`](Self::update) exactly once per
/// tick; consumers ask for "the value as of `d` ago" to line up delayed
/// measurements (camera frames, bus telemetry) with the state they were
/// taken in. The retained window is `(N - 1) * period`; asking further
/// back is a caller configuration error surfaced immediately.
///
/// Slots not yet written read as `T::default()`; use
/// [`sample_count`](Self::sample_count) to gate on warm-up.
#[derive(Debug, Clone)]
pub struct HistoryBuffer<T, const N: usize> {
    samples: [T; N],
    /// Next write position.
    head: usize,
    /// Samples recorded so far, capped at `N`.
    count: usize,
    period: Duration,
}

impl<T: Copy + Default, const N: usize> HistoryBuffer<T, N> {
    /// Create an empty history sampled at `period`.
    ///
    /// # Panics
    /// Panics if `period` is zero; a zero-period history cannot answer
    /// duration lookups.
    pub fn new(period: Duration) -> Self {
        const { assert!(N > 0, "history capacity must be nonzero") };
        assert!(!period.is_zero(), "history period must be nonzero");
        Self {
            samples: [T::default(); N],
            head: 0,
            count: 0,
            period,
        }
    }

    /// Record this tick's sample, evicting the oldest once full.
    pub fn update(&mut self, value: T) {
        self.samples[self.head] = value;
        self.head = (self.head + 1) % N;
        self.count = (self.count + 1).min(N);
    }

    /// The sample recorded closest to `duration` ago (rounded to whole
    /// periods; zero returns the most recent sample).
    pub fn look_back(&self, duration: Duration) -> Result<T, HistoryError> {
        let steps = (duration.as_secs_f64() / self.period.as_secs_f64()).round() as usize;
        if steps >= N {
            return Err(HistoryError::Unrecorded {
                requested: duration,
                retention: self.retention(),
            });
        }
        let index = (self.head + N - 1 - steps) % N;
        Ok(self.samples[index])
    }

    /// Samples recorded so far, capped at capacity. Consumers use this to
    /// know whether the buffer is warmed up.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.count
    }

    /// Maximum retained sample count.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Sample period.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Maximum answerable lookback duration.
    #[inline]
    pub fn retention(&self) -> Duration {
        self.period * (N as u32 - 1)
    }

    /// Recorded samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).map(move |i| &self.samples[(self.head + N - self.count + i) % N])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(5);

    #[test]
    fn round_trip_across_the_window() {
        let mut history: HistoryBuffer<f64, 10> = HistoryBuffer::new(PERIOD);
        for i in 0..10 {
            history.update(i as f64);
        }

        // Oldest sample is (N-1) periods back, newest is 0 back.
        assert_eq!(history.look_back(PERIOD * 9).unwrap(), 0.0);
        assert_eq!(history.look_back(Duration::ZERO).unwrap(), 9.0);
        assert_eq!(history.look_back(PERIOD * 4).unwrap(), 5.0);
    }

    #[test]
    fn lookback_rounds_to_nearest_period() {
        let mut history: HistoryBuffer<f64, 10> = HistoryBuffer::new(PERIOD);
        for i in 0..10 {
            history.update(i as f64);
        }

        // 6 ms rounds to one period, 8 ms rounds to two.
        assert_eq!(history.look_back(Duration::from_millis(6)).unwrap(), 8.0);
        assert_eq!(history.look_back(Duration::from_millis(8)).unwrap(), 7.0);
    }

    #[test]
    fn beyond_retention_is_an_error() {
        let mut history: HistoryBuffer<f64, 4> = HistoryBuffer::new(PERIOD);

        // Fails empty, partially filled, and full alike.
        for _ in 0..6 {
            let result = history.look_back(PERIOD * 10);
            assert!(matches!(result, Err(HistoryError::Unrecorded { .. })));
            history.update(1.0);
        }

        let err = history.look_back(PERIOD * 4).unwrap_err();
        assert_eq!(
            err,
            HistoryError::Unrecorded {
                requested: PERIOD * 4,
                retention: PERIOD * 3,
            }
        );
    }

    #[test]
    fn warm_up_counting() {
        let mut history: HistoryBuffer<u32, 4> = HistoryBuffer::new(PERIOD);
        assert_eq!(history.sample_count(), 0);

        for i in 1..=6 {
            history.update(i);
            assert_eq!(history.sample_count(), (i as usize).min(4));
        }
    }

    #[test]
    fn unwarmed_slots_read_default() {
        let mut history: HistoryBuffer<u32, 4> = HistoryBuffer::new(PERIOD);
        history.update(7);

        assert_eq!(history.look_back(Duration::ZERO).unwrap(), 7);
        // One period back: nothing recorded yet, defaults to zero.
        assert_eq!(history.look_back(PERIOD).unwrap(), 0);
    }

    #[test]
    fn wraparound_keeps_newest_window() {
        let mut history: HistoryBuffer<u64, 4> = HistoryBuffer::new(PERIOD);
        for i in 0..25u64 {
            history.update(i);
        }

        assert_eq!(history.look_back(Duration::ZERO).unwrap(), 24);
        assert_eq!(history.look_back(PERIOD * 3).unwrap(), 21);
    }

    #[test]
    fn iter_is_oldest_first() {
        let mut history: HistoryBuffer<u64, 4> = HistoryBuffer::new(PERIOD);
        history.update(1);
        history.update(2);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![1, 2]);

        for i in 3..=9 {
            history.update(i);
        }
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![6, 7, 8, 9]);
    }
}
