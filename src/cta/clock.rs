use crate::config::{AUTO_CONVERGENCE_DELAY_MS, AUTO_CONVERGENCE_DURATION_MS};

/// Time-driven convergence: idle for `start_delay_ms` after the trigger,
/// then a linear ramp from 0 to 1 over `duration_ms`, then hold at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoConvergence {
    pub start_delay_ms: f64,
    pub duration_ms: f64,
}

impl Default for AutoConvergence {
    fn default() -> Self {
        Self {
            start_delay_ms: AUTO_CONVERGENCE_DELAY_MS as f64,
            duration_ms: AUTO_CONVERGENCE_DURATION_MS as f64,
        }
    }
}

impl AutoConvergence {
    /// Progress of the ramp measured from the moment the ramp itself began
    /// (the start delay already elapsed).
    pub fn ramp(&self, elapsed_ms: f64) -> f64 {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 || !self.duration_ms.is_finite() {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).min(1.0)
    }

    /// Progress measured from the trigger, including the start delay.
    pub fn progress(&self, since_trigger_ms: f64) -> f64 {
        let delay = if self.start_delay_ms.is_finite() {
            self.start_delay_ms.max(0.0)
        } else {
            0.0
        };
        self.ramp(since_trigger_ms - delay)
    }

    pub fn is_complete(progress: f64) -> bool {
        progress >= 1.0
    }
}

/// One pass of the ramp driven by animation-frame timestamps. The first
/// frame anchors the start; a run resumed part-way never goes backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceRun {
    clock: AutoConvergence,
    started_at: Option<f64>,
    resume_from: f64,
}

impl ConvergenceRun {
    pub fn new(clock: AutoConvergence) -> Self {
        Self::resume(clock, 0.0)
    }

    pub fn resume(clock: AutoConvergence, progress: f64) -> Self {
        let resume_from = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            clock,
            started_at: None,
            resume_from,
        }
    }

    /// A resumed run has already waited out its start delay.
    pub fn is_resumed(&self) -> bool {
        self.resume_from > 0.0
    }

    /// Progress at `timestamp_ms` and whether another frame is needed.
    pub fn step(&mut self, timestamp_ms: f64) -> (f64, bool) {
        let offset = if self.clock.duration_ms.is_finite() && self.clock.duration_ms > 0.0 {
            self.resume_from * self.clock.duration_ms
        } else {
            0.0
        };
        let started_at = *self.started_at.get_or_insert(timestamp_ms - offset);
        let progress = self
            .clock
            .ramp(timestamp_ms - started_at)
            .max(self.resume_from);
        (progress, !AutoConvergence::is_complete(progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_at_zero_during_delay() {
        let clock = AutoConvergence::default();
        assert_eq!(clock.progress(0.0), 0.0);
        assert_eq!(clock.progress(1_999.0), 0.0);
        assert_eq!(clock.progress(2_000.0), 0.0);
    }

    #[test]
    fn ramps_linearly_then_holds() {
        let clock = AutoConvergence::default();
        assert_eq!(clock.progress(3_000.0), 0.25);
        assert_eq!(clock.progress(4_000.0), 0.5);
        assert_eq!(clock.progress(6_000.0), 1.0);
        assert_eq!(clock.progress(60_000.0), 1.0);
        assert!(AutoConvergence::is_complete(clock.progress(6_000.0)));
        assert!(!AutoConvergence::is_complete(clock.progress(5_999.0)));
    }

    #[test]
    fn progress_never_decreases() {
        let clock = AutoConvergence::default();
        let mut last = 0.0;
        for step in 0..200 {
            let p = clock.progress(step as f64 * 37.0);
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn zero_duration_jumps_to_done() {
        let clock = AutoConvergence {
            start_delay_ms: 0.0,
            duration_ms: 0.0,
        };
        assert_eq!(clock.progress(0.0), 0.0);
        assert_eq!(clock.progress(1.0), 1.0);
    }

    #[test]
    fn run_stops_requesting_frames_at_one() {
        let mut run = ConvergenceRun::new(AutoConvergence::default());
        assert_eq!(run.step(10_000.0), (0.0, true));
        assert_eq!(run.step(11_000.0), (0.25, true));
        assert_eq!(run.step(13_999.0).1, true);
        assert_eq!(run.step(14_000.0), (1.0, false));
        assert_eq!(run.step(20_000.0), (1.0, false));
    }

    #[test]
    fn resumed_run_continues_from_current_progress() {
        let mut run = ConvergenceRun::resume(AutoConvergence::default(), 0.5);
        assert!(run.is_resumed());
        let (first, more) = run.step(500.0);
        assert_eq!(first, 0.5);
        assert!(more);
        assert_eq!(run.step(1_500.0).0, 0.75);
        assert_eq!(run.step(2_500.0), (1.0, false));
    }

    #[test]
    fn resumed_run_with_new_clock_never_goes_back() {
        let slow = AutoConvergence {
            start_delay_ms: 0.0,
            duration_ms: 40_000.0,
        };
        let mut run = ConvergenceRun::resume(slow, 0.6);
        let mut last = 0.6;
        for frame in 0..100 {
            let (progress, _) = run.step(frame as f64 * 16.0);
            assert!(progress >= last);
            last = progress;
        }
    }

    #[test]
    fn zero_duration_run_finishes_on_first_frame() {
        let clock = AutoConvergence {
            start_delay_ms: 0.0,
            duration_ms: 0.0,
        };
        let mut run = ConvergenceRun::new(clock);
        assert_eq!(run.step(5.0), (0.0, true));
        assert_eq!(run.step(21.0), (1.0, false));
    }

    #[test]
    fn bad_elapsed_is_zero() {
        let clock = AutoConvergence::default();
        assert_eq!(clock.ramp(f64::NAN), 0.0);
        assert_eq!(clock.ramp(-50.0), 0.0);
    }
}
