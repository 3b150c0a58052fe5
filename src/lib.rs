//! # tailframe
//!
//! Layout components for utility-class styled web pages: a page shell, titled
//! content cards, a responsive grid, and header/footer bands.
//!
//! Components are plain configuration values. A render pass composes them
//! into a retained DOM whose nodes carry opaque style tokens (utility
//! classes), which can then be queried or serialized to HTML.
//!
//! ## Core Systems
//!
//! - **[`dom`]**: Slotmap-backed node arena with class/component queries
//! - **[`component`]**: Component trait, child content, render passes
//! - **[`components`]**: Page, Element, Grid, Header, Footer, Text, Button, Center
//! - **[`style`]**: Utility class tokenizer, breakpoints, grid column analysis
//! - **[`render`]**: HTML serialization
//! - **[`theme`]** / **[`context`]** / **[`clock`]**: Default tokens, render context, year source
//! - **[`testing`]**: Snapshot helpers
//!
//! ```ignore
//! use tailframe::prelude::*;
//!
//! let page = Page::new()
//!     .enable_header(true)
//!     .with_header(Header::new().with_title("Home"))
//!     .with_child(Element::new().with_title("Welcome"));
//! let html = to_html(&render(&page, &RenderContext::new()));
//! ```

// Foundation
pub mod clock;
pub mod theme;
pub mod context;

// Core systems
pub mod dom;
pub mod style;

// Components
pub mod component;
pub mod components;

// Output
pub mod render;
pub mod testing;

/// Everything needed to build and render pages.
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::component::{render, Children, Component, Node};
    pub use crate::components::{
        Author, Button, Center, Element, Footer, FooterButton, Grid, Header, Page, Text,
    };
    pub use crate::context::RenderContext;
    pub use crate::dom::{Dom, NodeData, NodeId};
    pub use crate::render::{to_html, to_pretty_html};
    pub use crate::theme::Theme;
}
