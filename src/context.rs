//! RenderContext: the theme and clock a render pass reads from.

use tracing::trace;

use crate::clock::{Clock, SystemClock};
use crate::theme::Theme;

/// Everything a component may consult besides its own configuration.
///
/// A context is cheap to build; create one per render pass.
///
/// # Examples
///
/// ```ignore
/// let cx = RenderContext::new().with_clock(FixedClock(2030));
/// let dom = render(&Footer::new(), &cx);
/// ```
#[derive(Debug)]
pub struct RenderContext {
    theme: Theme,
    clock: Box<dyn Clock>,
}

impl RenderContext {
    /// Default theme, system clock.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Use the given theme (builder).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Use the given clock (builder).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The current calendar year, read from the clock now.
    pub fn current_year(&self) -> i32 {
        let year = self.clock.current_year();
        trace!(year, "read clock");
        year
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}
