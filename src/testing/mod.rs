//! Testing helpers: pinned-year contexts and render-to-markup shortcuts.
//!
//! Use [`render_to_html`] and [`render_to_pretty_html`] to capture component
//! output as text for snapshot-style assertions.

pub mod snapshot;

pub use snapshot::{context_at_year, render_to_html, render_to_pretty_html};
