//! Wall-clock access for render-time values.

use std::fmt;

use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock: fmt::Debug {
    fn current_year(&self) -> i32;
}

/// Reads the local system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
