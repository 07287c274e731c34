use crate::util::moving_average::MovingAverage;
use crate::util::utilization::UtilizationMonitor;
use crate::util::{ColoredStatus, CrossPlatformInstant};
use core::time::Duration;

/// Times a repeated process split into named segments that always run in the same order
pub struct Stopwatch<const SEGMENTS: usize, const WINDOW: usize, I> {
    name: &'static str,
    last: I,
    segments: [(Option<&'static str>, MovingAverage<WINDOW>); SEGMENTS],
    idx: usize,

    utilization_monitor: UtilizationMonitor<WINDOW, I>,

    warn_time: Duration,
    error_time: Duration,
}

impl<const SEGMENTS: usize, const WINDOW: usize, I: CrossPlatformInstant + Default>
    Stopwatch<SEGMENTS, WINDOW, I>
{
    pub fn new(
        name: &'static str,
        warn_time: Duration,
        error_time: Duration,
        warn_percent: f32,
        error_percent: f32,
    ) -> Self {
        Self {
            name,
            last: I::default(),
            segments: [(None, MovingAverage::new()); SEGMENTS],
            idx: 0,

            utilization_monitor: UtilizationMonitor::new(warn_percent, error_percent),

            warn_time,
            error_time,
        }
    }

    pub fn start(&mut self) {
        self.idx = 0;
        self.last = I::default();
        self.utilization_monitor.start();
    }

    pub fn mark_completed(&mut self, segment: &'static str) -> Result<(), &'static str> {
        let now = I::default();
        let last = self.last;
        self.last = now;
        let duration = now.checked_duration_since(last).unwrap_or_default();
        match self.segments[self.idx].0 {
            Some(name) if name != segment => {
                return Err("Stopwatch marked segment didn't match next segment name. Ensure that the Stopwatch has enough capacity, and that all segments occur in the same order every time.");
            }
            Some(_) => {}
            None => self.segments[self.idx].0 = Some(segment),
        }
        self.segments[self.idx].1.add(duration);

        if self.idx + 1 == SEGMENTS {
            // whole process is finished
            self.utilization_monitor.stop();
            self.idx = 0;
        } else {
            self.idx += 1;
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn segment_averages(&self) -> [(Option<&'static str>, Duration); SEGMENTS] {
        self.segments.map(|(n, t)| (n, t.average()))
    }

    pub fn process_average(&self) -> Duration {
        self.utilization_monitor.active_time()
    }

    pub fn utilization(&self) -> &UtilizationMonitor<WINDOW, I> {
        &self.utilization_monitor
    }

    pub fn status(&self) -> ColoredStatus {
        let avg = self.process_average();
        let sw_status = if avg >= self.error_time {
            ColoredStatus::Error(Some(format!("{:.2?} >= {:.2?}", avg, self.error_time)))
        } else if avg >= self.warn_time {
            ColoredStatus::Warn(Some(format!("{:.2?} >= {:.2?}", avg, self.warn_time)))
        } else {
            ColoredStatus::Ok(Some(format!("{:.2?}", avg)))
        };
        let util_status = self.utilization_monitor.status();
        if sw_status.severity() >= util_status.severity() {
            sw_status
        } else {
            util_status
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::WebTimeInstant;

    fn stopwatch() -> Stopwatch<2, 10, WebTimeInstant> {
        Stopwatch::new(
            "Test",
            Duration::from_secs(10),
            Duration::from_secs(20),
            1.5,
            2.0,
        )
    }

    #[test]
    fn segments_are_named_on_first_pass() {
        let mut sw = stopwatch();
        assert_eq!(sw.segment_averages()[0].0, None);
        sw.start();
        sw.mark_completed("First").unwrap();
        sw.mark_completed("Second").unwrap();
        let names = sw.segment_averages().map(|(name, _)| name);
        assert_eq!(names, [Some("First"), Some("Second")]);
        assert_eq!(sw.name(), "Test");
        assert!(matches!(sw.status(), ColoredStatus::Ok(_)));
    }

    #[test]
    fn out_of_order_segment_is_an_error() {
        let mut sw = stopwatch();
        sw.start();
        sw.mark_completed("First").unwrap();
        sw.mark_completed("Second").unwrap();
        sw.start();
        assert!(sw.mark_completed("Second").is_err());
    }
}
