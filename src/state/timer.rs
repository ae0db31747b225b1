//! Discussion countdown.
//!
//! A single countdown from a fixed duration to zero, driven by one tick
//! per elapsed time unit from an external scheduler. Each run hands out a
//! generation-tagged handle; ticks carrying a handle from a cancelled or
//! superseded run are ignored, so a late tick can never advance a session
//! that has already been reset.

use std::fmt;

/// Default discussion length in seconds.
pub const DEFAULT_DISCUSSION_SECS: u32 = 60;

/// Identifies one timer run. Obtained from [`DiscussionTimer::start`];
/// invalidated by `cancel` or a later `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Countdown still running.
    Running { remaining: u32 },
    /// Countdown just hit zero; the timer has stopped.
    Expired,
    /// Timer not running, or the handle belongs to a superseded run.
    Stale,
}

/// Countdown state for the discussion phase.
#[derive(Debug, Clone, Default)]
pub struct DiscussionTimer {
    remaining: u32,
    generation: u64,
    running: bool,
}

impl DiscussionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a countdown, superseding any previous run.
    pub fn start(&mut self, secs: u32) -> TimerHandle {
        self.generation += 1;
        self.remaining = secs;
        self.running = secs > 0;
        TimerHandle(self.generation)
    }

    /// Advance the countdown by one time unit.
    ///
    /// Stops at zero; never goes negative. Ticks against a stopped timer
    /// or with an outdated handle report `Stale` and change nothing.
    pub fn tick(&mut self, handle: TimerHandle) -> Tick {
        if !self.running || handle.0 != self.generation {
            return Tick::Stale;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running {
                remaining: self.remaining,
            }
        }
    }

    /// Stop the countdown and invalidate outstanding handles.
    pub fn cancel(&mut self) {
        self.running = false;
        self.generation += 1;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Format remaining time as MM:SS for display.
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

impl fmt::Display for DiscussionTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_zero() {
        let mut timer = DiscussionTimer::new();
        let handle = timer.start(60);

        for expected in (1..60).rev() {
            assert_eq!(
                timer.tick(handle),
                Tick::Running {
                    remaining: expected
                }
            );
        }

        // 60th tick hits zero
        assert_eq!(timer.tick(handle), Tick::Expired);
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_does_not_go_negative() {
        let mut timer = DiscussionTimer::new();
        let handle = timer.start(1);

        assert_eq!(timer.tick(handle), Tick::Expired);
        assert_eq!(timer.tick(handle), Tick::Stale);
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_cancel_invalidates_handle() {
        let mut timer = DiscussionTimer::new();
        let handle = timer.start(60);

        timer.tick(handle);
        timer.cancel();

        // Late tick from the cancelled run fires into nothing
        assert_eq!(timer.tick(handle), Tick::Stale);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_restart_supersedes_old_handle() {
        let mut timer = DiscussionTimer::new();
        let old = timer.start(60);
        let new = timer.start(30);

        assert_eq!(timer.tick(old), Tick::Stale);
        assert_eq!(timer.tick(new), Tick::Running { remaining: 29 });
    }

    #[test]
    fn test_zero_duration_never_runs() {
        let mut timer = DiscussionTimer::new();
        let handle = timer.start(0);

        assert!(!timer.is_running());
        assert_eq!(timer.tick(handle), Tick::Stale);
    }

    #[test]
    fn test_display_format() {
        let mut timer = DiscussionTimer::new();
        timer.start(65);
        assert_eq!(timer.display(), "1:05");

        timer.start(9);
        assert_eq!(timer.display(), "0:09");
    }
}
