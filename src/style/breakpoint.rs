//! Responsive breakpoints: named min-width thresholds.

use std::fmt;

/// A viewport-width threshold at which a different set of utilities applies.
///
/// Ordered from narrowest to widest. `Base` applies at every width; each other
/// breakpoint applies from its [`min_width`](Breakpoint::min_width) upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// Every breakpoint, narrowest first.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// The variant prefix (without colon), or `None` for `Base`.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Breakpoint::Base => None,
            Breakpoint::Sm => Some("sm"),
            Breakpoint::Md => Some("md"),
            Breakpoint::Lg => Some("lg"),
            Breakpoint::Xl => Some("xl"),
            Breakpoint::Xxl => Some("2xl"),
        }
    }

    /// Parse a variant prefix (without colon).
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.prefix() == Some(prefix))
    }

    /// Minimum viewport width in CSS pixels.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Base => 0,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
        }
    }

    /// The widest breakpoint active at `width`.
    pub fn for_width(width: u32) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|bp| bp.min_width() <= width)
            .unwrap_or(Breakpoint::Base)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().unwrap_or("base"))
    }
}
