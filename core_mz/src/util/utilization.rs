use crate::util::moving_average::MovingAverage;
use crate::util::{ColoredStatus, CrossPlatformInstant};
use core::time::Duration;

/// Tracks how much of the time between frames is spent drawing
#[derive(Copy, Clone)]
pub struct UtilizationMonitor<const C: usize, I> {
    warn_amount: f32,
    error_amount: f32,

    last_start: Option<I>,
    last_stop: Option<I>,
    active: MovingAverage<C>,
    idle: MovingAverage<C>,
    period: MovingAverage<C>,
}

impl<const C: usize, I: CrossPlatformInstant + Default> Default for UtilizationMonitor<C, I> {
    fn default() -> Self {
        Self::new(0.8, 0.9)
    }
}

impl<const C: usize, I: CrossPlatformInstant + Default> UtilizationMonitor<C, I> {
    /// `warn_amount` and `error_amount` are fractions of the frame period
    pub fn new(warn_amount: f32, error_amount: f32) -> Self {
        Self {
            warn_amount,
            error_amount,

            last_start: None,
            last_stop: None,
            active: MovingAverage::new(),
            idle: MovingAverage::new(),
            period: MovingAverage::new(),
        }
    }

    pub fn start(&mut self) {
        let now = I::default();
        if let Some(t) = self.last_stop.and_then(|s| now.checked_duration_since(s)) {
            self.idle.add(t)
        }
        if let Some(t) = self.last_start.and_then(|s| now.checked_duration_since(s)) {
            self.period.add(t)
        }
        self.last_start = Some(now);
    }

    pub fn stop(&mut self) {
        let now = I::default();
        if let Some(t) = self.last_start.and_then(|s| now.checked_duration_since(s)) {
            self.active.add(t)
        }
        self.last_stop = Some(now);
    }

    /// Fraction of wall time spent between `start` and `stop`, 0 before any frames
    pub fn utilization(&self) -> f32 {
        let total = (self.active.sum() + self.idle.sum()).as_secs_f32();
        if total == 0.0 {
            0.0
        } else {
            self.active.sum().as_secs_f32() / total
        }
    }

    pub fn status(&self) -> ColoredStatus {
        let util = self.utilization();
        if util >= self.error_amount {
            ColoredStatus::Error(Some(format!(
                "{:.1}% >= {:.1}%",
                util * 100.0,
                self.error_amount * 100.0
            )))
        } else if util >= self.warn_amount {
            ColoredStatus::Warn(Some(format!(
                "{:.1}% >= {:.1}%",
                util * 100.0,
                self.warn_amount * 100.0
            )))
        } else {
            ColoredStatus::Ok(Some(format!("{:.1}%", util * 100.0)))
        }
    }

    pub fn active_time(&self) -> Duration {
        self.active.average()
    }

    pub fn idle_time(&self) -> Duration {
        self.idle.average()
    }

    /// Frames per second, 0 until two frames have started
    pub fn hz(&self) -> f32 {
        let period = self.period.average().as_secs_f32();
        if period == 0.0 {
            0.0
        } else {
            1.0 / period
        }
    }

    pub fn last_active_duration(&self) -> Option<Duration> {
        self.active.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::WebTimeInstant;

    #[test]
    fn fresh_monitor_is_idle() {
        let monitor = UtilizationMonitor::<10, WebTimeInstant>::default();
        assert_eq!(monitor.utilization(), 0.0);
        assert_eq!(monitor.hz(), 0.0);
        assert_eq!(monitor.last_active_duration(), None);
        assert_eq!(monitor.idle_time(), Duration::ZERO);
        assert!(matches!(monitor.status(), ColoredStatus::Ok(_)));
    }

    #[test]
    fn records_active_time() {
        let mut monitor = UtilizationMonitor::<10, WebTimeInstant>::default();
        monitor.start();
        monitor.stop();
        monitor.start();
        monitor.stop();
        assert!(monitor.last_active_duration().is_some());
        assert!(monitor.utilization() >= 0.0 && monitor.utilization() <= 1.0);
    }

    #[test]
    fn records_idle_time_between_frames() {
        let mut monitor = UtilizationMonitor::<10, WebTimeInstant>::default();
        monitor.start();
        monitor.stop();
        std::thread::sleep(Duration::from_millis(5));
        monitor.start();
        assert!(monitor.idle_time() >= Duration::from_millis(5));
        assert!(monitor.hz() > 0.0 && monitor.hz() <= 200.0);
    }
}
