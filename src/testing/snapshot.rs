//! Snapshot rendering helpers.
//!
//! Functions that run a render pass and return the markup, for snapshot
//! testing and assertions.

use crate::clock::FixedClock;
use crate::component::{render, Component};
use crate::context::RenderContext;
use crate::render::{to_html, to_pretty_html};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// A render context whose clock is pinned to `year`.
///
/// Output that includes the copyright year is then stable across runs.
pub fn context_at_year(year: i32) -> RenderContext {
    RenderContext::new().with_clock(FixedClock(year))
}

/// Render a component to compact HTML.
///
/// # Examples
///
/// ```ignore
/// use tailframe::testing::{context_at_year, render_to_html};
/// use tailframe::components::Header;
///
/// let html = render_to_html(&Header::new().with_title("Hi"), &context_at_year(2025));
/// assert!(html.contains("Hi"));
/// ```
pub fn render_to_html(component: &dyn Component, cx: &RenderContext) -> String {
    to_html(&render(component, cx))
}

/// Render a component to indented HTML, one node per line.
pub fn render_to_pretty_html(component: &dyn Component, cx: &RenderContext) -> String {
    to_pretty_html(&render(component, cx))
}

// ===========================================================================
// Tests
// ===========================================================================
