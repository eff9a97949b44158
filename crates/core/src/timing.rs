//! Per-phase time measurement
//!
//! Phases are timed in CPU time, matching the reference driver's
//! `clock()/CLOCKS_PER_SEC` measurement: on Unix the process CPU clock is
//! read through `libc::clock()`, elsewhere wall time from [`Instant`] stands
//! in. Resolution is whatever the platform clock provides.

#[cfg(not(unix))]
use std::time::Instant;

// The `libc` crate in use does not bind `clock()`/`CLOCKS_PER_SEC` on this
// target, so declare the standard C interface directly. POSIX (XSI) fixes
// `CLOCKS_PER_SEC` at one million.
#[cfg(unix)]
extern "C" {
    fn clock() -> libc::clock_t;
}
#[cfg(unix)]
const CLOCKS_PER_SEC: libc::clock_t = 1_000_000;

/// Snapshot of the phase clock, taken at phase start
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimer {
    #[cfg(unix)]
    start: libc::clock_t,
    #[cfg(not(unix))]
    start: Instant,
}

impl PhaseTimer {
    /// Start timing a phase
    #[must_use]
    pub fn start() -> Self {
        Self {
            #[cfg(unix)]
            // SAFETY: clock() takes no arguments and only reads process
            // accounting state.
            start: unsafe { clock() },
            #[cfg(not(unix))]
            start: Instant::now(),
        }
    }

    /// Elapsed time since [`PhaseTimer::start`], in fractional seconds
    ///
    /// Never negative; a clock that reports no progress yields `0.0`.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        #[cfg(unix)]
        {
            // SAFETY: see start().
            let now = unsafe { clock() };
            let ticks = now.wrapping_sub(self.start);
            if ticks <= 0 {
                return 0.0;
            }
            #[allow(clippy::cast_precision_loss)]
            {
                ticks as f64 / CLOCKS_PER_SEC as f64
            }
        }
        #[cfg(not(unix))]
        {
            self.start.elapsed().as_secs_f64()
        }
    }
}

/// Run `f` and return its result together with the elapsed phase time
pub fn time_phase<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let timer = PhaseTimer::start();
    let value = f();
    (value, timer.elapsed_seconds())
}
