use std::error::Error;
use std::fmt;

/// Error raised when constructing a timer with an unusable duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    InvalidDuration(i64),
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::InvalidDuration(secs) => {
                write!(f, "timer duration must be positive, got {}", secs)
            }
        }
    }
}

impl Error for TimerError {}

/// What a single one-second tick did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already at zero; nothing changed
    Idle,
    /// One second elapsed, time still remaining
    Ticked,
    /// This tick brought the countdown to zero; fires exactly once
    Completed,
}

/// Countdown clock for a single recipe step.
///
/// Driven by the host's one-second tick; the host discards the timer to
/// cancel it, so a dropped `StepTimer` can never tick or complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTimer {
    total_secs: u64,
    remaining_secs: u64,
    running: bool,
}

impl StepTimer {
    /// Create a running timer. Non-positive durations are rejected before
    /// any timer exists.
    pub fn start(duration_secs: i64) -> Result<Self, TimerError> {
        if duration_secs <= 0 {
            return Err(TimerError::InvalidDuration(duration_secs));
        }

        Ok(Self {
            total_secs: duration_secs as u64,
            remaining_secs: duration_secs as u64,
            running: true,
        })
    }

    /// Pause or resume. Never touches the remaining time, and is a no-op
    /// once the countdown has completed.
    pub fn toggle(&mut self) {
        if self.is_completed() {
            return;
        }
        self.running = !self.running;
    }

    /// Advance the countdown by one second. Returns `Completed` exactly
    /// once, on the tick that reaches zero; every later tick is `Idle`.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.remaining_secs == 0 {
            return TickOutcome::Idle;
        }

        self.remaining_secs -= 1;

        if self.remaining_secs == 0 {
            self.running = false;
            TickOutcome::Completed
        } else {
            TickOutcome::Ticked
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_completed(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Remaining time as `m:ss`, seconds zero-padded
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    /// Fraction of the countdown still to go, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.remaining_secs as f64 / self.total_secs as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_start_positive_duration() {
        let timer = StepTimer::start(90).unwrap();

        assert_eq!(timer.total_secs(), 90);
        assert_eq!(timer.remaining_secs(), 90);
        assert!(timer.is_running());
        assert!(!timer.is_completed());
    }

    #[test]
    fn test_start_zero_duration_fails() {
        assert_matches!(StepTimer::start(0), Err(TimerError::InvalidDuration(0)));
    }

    #[test]
    fn test_start_negative_duration_fails() {
        assert_matches!(StepTimer::start(-5), Err(TimerError::InvalidDuration(-5)));
    }

    #[test]
    fn test_timer_error_display() {
        let err = TimerError::InvalidDuration(-5);
        assert_eq!(err.to_string(), "timer duration must be positive, got -5");
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let mut timer = StepTimer::start(10).unwrap();

        assert_eq!(timer.tick(), TickOutcome::Ticked);
        assert_eq!(timer.remaining_secs(), 9);
        assert_eq!(timer.tick(), TickOutcome::Ticked);
        assert_eq!(timer.remaining_secs(), 8);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut timer = StepTimer::start(3).unwrap();

        assert_eq!(timer.tick(), TickOutcome::Ticked);
        assert_eq!(timer.tick(), TickOutcome::Ticked);
        assert_eq!(timer.tick(), TickOutcome::Completed);

        assert_eq!(timer.remaining_secs(), 0);
        assert!(timer.is_completed());
        assert!(!timer.is_running());

        // Completion must never re-fire
        for _ in 0..10 {
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn test_exact_tick_count_to_completion() {
        for d in [1i64, 2, 7, 60, 125] {
            let mut timer = StepTimer::start(d).unwrap();
            let mut completions = 0;

            for _ in 0..d {
                if timer.tick() == TickOutcome::Completed {
                    completions += 1;
                }
            }

            assert_eq!(timer.remaining_secs(), 0, "duration {}", d);
            assert_eq!(completions, 1, "duration {}", d);
        }
    }

    #[test]
    fn test_toggle_pauses_and_freezes_remaining() {
        let mut timer = StepTimer::start(10).unwrap();

        timer.tick();
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining_secs(), 7);

        timer.toggle();
        assert!(!timer.is_running());

        for _ in 0..5 {
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
        assert_eq!(timer.remaining_secs(), 7);
    }

    #[test]
    fn test_pause_resume_never_skips_or_double_counts() {
        // start(10), pause after 3 ticks, 5 paused ticks, resume, 7 ticks:
        // completes exactly on the 7th resumed tick (10 total decrements)
        let mut timer = StepTimer::start(10).unwrap();

        for _ in 0..3 {
            assert_eq!(timer.tick(), TickOutcome::Ticked);
        }

        timer.toggle();
        for _ in 0..5 {
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
        timer.toggle();

        assert_eq!(timer.total_secs(), 10);

        let mut outcomes = vec![];
        for _ in 0..7 {
            outcomes.push(timer.tick());
        }

        assert_eq!(outcomes[..6], [TickOutcome::Ticked; 6]);
        assert_eq!(outcomes[6], TickOutcome::Completed);
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn test_toggle_after_completion_is_noop() {
        let mut timer = StepTimer::start(1).unwrap();
        assert_eq!(timer.tick(), TickOutcome::Completed);

        timer.toggle();
        assert!(!timer.is_running());
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_toggle_does_not_change_total() {
        let mut timer = StepTimer::start(42).unwrap();
        timer.toggle();
        timer.toggle();
        assert_eq!(timer.total_secs(), 42);
    }

    #[test]
    fn test_display_formats_zero_padded_seconds() {
        let timer = StepTimer::start(125).unwrap();
        assert_eq!(timer.display(), "2:05");

        let timer = StepTimer::start(60).unwrap();
        assert_eq!(timer.display(), "1:00");

        let timer = StepTimer::start(9).unwrap();
        assert_eq!(timer.display(), "0:09");
    }

    #[test]
    fn test_display_after_completion() {
        let mut timer = StepTimer::start(3).unwrap();
        timer.tick();
        timer.tick();
        assert_eq!(timer.tick(), TickOutcome::Completed);
        assert_eq!(timer.display(), "0:00");
    }

    #[test]
    fn test_progress_is_monotonically_non_increasing() {
        let mut timer = StepTimer::start(8).unwrap();
        let mut last = timer.progress();
        assert_eq!(last, 1.0);

        for _ in 0..8 {
            timer.tick();
            let p = timer.progress();
            assert!(p <= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }

        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_dropped_timer_fires_nothing() {
        // Cancellation is the host discarding the timer; once dropped no
        // tick can observe it, even mid-countdown.
        let mut slot = Some(StepTimer::start(5).unwrap());
        slot.as_mut().unwrap().tick();

        let cancelled = slot.take();
        assert!(cancelled.is_some());
        assert!(slot.is_none());

        // Host tick handling skips the empty slot entirely
        if let Some(timer) = slot.as_mut() {
            timer.tick();
            unreachable!();
        }
    }
}
