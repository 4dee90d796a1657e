// Unit tests for klog, run against local `LogCore` instances.

use std::sync::Mutex;

use crate::log_core::LogCore;
use crate::{LogContextProvider, LogLevel, LogOutput};

/// Output that keeps every line in memory.
#[derive(Default)]
struct CaptureOutput {
    lines: Mutex<Vec<String>>,
}

impl CaptureOutput {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogOutput for CaptureOutput {
    fn write_str(&self, s: &str) {
        self.lines.lock().unwrap().push(s.to_string());
    }
}

struct FixedContext;

impl LogContextProvider for FixedContext {
    fn timestamp(&self) -> String {
        "2024-01-01T00:00:00.000".to_string()
    }

    fn pid(&self) -> u32 {
        42
    }
}

static FIXED_CONTEXT: FixedContext = FixedContext;

/// Build a logger writing into a leaked capture buffer.
fn capture(level: LogLevel) -> (LogCore, &'static CaptureOutput) {
    let output: &'static CaptureOutput = Box::leak(Box::new(CaptureOutput::default()));
    (LogCore::new(level, output, &FIXED_CONTEXT), output)
}

/// Test-only logging helper (mirrors the facade macros, but targets a local `LogCore`).
macro_rules! test_log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        log::Log::log(
            &$logger,
            &log::Record::builder()
                .level($level)
                .target("procfs::test")
                .args(format_args!($($arg)*))
                .build(),
        )
    };
}

mod filter;
