//! C-linkage entry points
//!
//! Exposes both benchmark variants to non-Rust drivers as plain functions.
//! The driver supplies an opaque output handle plus the two reporting
//! callbacks; the harness forwards the handle untouched. The item count is an
//! explicit parameter rather than a process-wide symbol, so the library links
//! and tests on its own.
//!
//! Return value is `0` on success and `1` on invalid arguments (null
//! callback, item count out of range). Nothing panics across the boundary.

use std::ffi::CString;
use std::os::raw::{c_char, c_double, c_int, c_void};
use std::panic::{self, AssertUnwindSafe};

use crate::bench::{run_integers, run_strings};
use crate::config::BenchConfig;
use crate::output::OutputSink;

/// Driver callback labeling the upcoming series of timings
pub type StartLineFn = unsafe extern "C" fn(output: *mut c_void, title: *const c_char);

/// Driver callback receiving one phase's elapsed CPU time in seconds
pub type PrintTimeFn = unsafe extern "C" fn(output: *mut c_void, elapsed_seconds: c_double);

/// [`OutputSink`] over the driver's opaque handle and callback pair
struct RawSink {
    output: *mut c_void,
    start_line: StartLineFn,
    print_time: PrintTimeFn,
}

impl OutputSink for RawSink {
    fn start_line(&mut self, title: &str) {
        let Ok(title) = CString::new(title) else {
            tracing::error!(title, "label contains an interior NUL, dropping start_line");
            return;
        };
        // SAFETY: the driver guarantees the callback/handle pair is valid for
        // the duration of the call; the title pointer lives across it.
        unsafe { (self.start_line)(self.output, title.as_ptr()) }
    }

    fn print_time(&mut self, elapsed_seconds: f64) {
        // SAFETY: as above.
        unsafe { (self.print_time)(self.output, elapsed_seconds) }
    }
}

fn run_guarded(
    variant: &str,
    items_count: usize,
    sink: Option<RawSink>,
    run: impl FnOnce(&BenchConfig, &mut RawSink),
) -> c_int {
    let Some(mut sink) = sink else {
        tracing::error!(variant, "null callback passed to benchmark entry point");
        return 1;
    };

    let config = BenchConfig::new(items_count);
    if let Err(e) = config.validate() {
        tracing::error!(variant, error = %e, "invalid benchmark configuration");
        return 1;
    }

    // A panic must not unwind into the C caller.
    match panic::catch_unwind(AssertUnwindSafe(|| run(&config, &mut sink))) {
        Ok(()) => 0,
        Err(_) => {
            tracing::error!(variant, "benchmark panicked behind the C boundary");
            1
        }
    }
}

fn raw_sink(
    output: *mut c_void,
    start_line: Option<StartLineFn>,
    print_time: Option<PrintTimeFn>,
) -> Option<RawSink> {
    Some(RawSink {
        output,
        start_line: start_line?,
        print_time: print_time?,
    })
}

/// Run the integer benchmark for a non-Rust driver
///
/// # Safety
///
/// `start_line` and `print_time` must be callable with `output` for the full
/// duration of the call. `output` itself is opaque and may be null if the
/// callbacks accept that.
#[no_mangle]
pub unsafe extern "C" fn listbench_run_integers(
    output: *mut c_void,
    items_count: usize,
    start_line: Option<StartLineFn>,
    print_time: Option<PrintTimeFn>,
) -> c_int {
    run_guarded(
        "integers",
        items_count,
        raw_sink(output, start_line, print_time),
        |config, sink| run_integers(config, sink),
    )
}

/// Run the string benchmark for a non-Rust driver
///
/// # Safety
///
/// Same contract as [`listbench_run_integers`].
#[no_mangle]
pub unsafe extern "C" fn listbench_run_strings(
    output: *mut c_void,
    items_count: usize,
    start_line: Option<StartLineFn>,
    print_time: Option<PrintTimeFn>,
) -> c_int {
    run_guarded(
        "strings",
        items_count,
        raw_sink(output, start_line, print_time),
        |config, sink| run_strings(config, sink),
    )
}
