use core::time::Duration;

/// Average of the last `COUNT` durations
#[derive(Copy, Clone, Debug)]
pub struct MovingAverage<const COUNT: usize> {
    samples: [Duration; COUNT],
    /// Where the next sample goes
    next: usize,
    filled: usize,
    sum: Duration,
}

impl<const COUNT: usize> Default for MovingAverage<COUNT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COUNT: usize> MovingAverage<COUNT> {
    pub fn new() -> Self {
        Self {
            samples: [Duration::ZERO; COUNT],
            next: 0,
            filled: 0,
            sum: Duration::ZERO,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn add(&mut self, sample: Duration) {
        if self.filled == COUNT {
            self.sum -= self.samples[self.next];
        } else {
            self.filled += 1;
        }
        self.samples[self.next] = sample;
        self.sum += sample;
        self.next = (self.next + 1) % COUNT;
    }

    pub fn sum(&self) -> Duration {
        self.sum
    }

    pub fn count(&self) -> usize {
        self.filled
    }

    pub fn average(&self) -> Duration {
        if self.filled == 0 {
            Duration::ZERO
        } else {
            self.sum / self.filled as u32
        }
    }

    pub fn latest(&self) -> Option<Duration> {
        if self.filled == 0 {
            None
        } else {
            Some(self.samples[(self.next + COUNT - 1) % COUNT])
        }
    }
}
