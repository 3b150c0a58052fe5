//! Output: serialize a rendered DOM to markup.

pub mod html;

pub use html::{to_html, to_pretty_html};
