//! Page component: the full-height frame with optional header and footer.

use tracing::debug;

use crate::component::{Children, Component};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::context::RenderContext;
use crate::dom::{Dom, NodeData, NodeId};

const CONTENT_CLASSES: &str =
    "flex-grow flex items-center justify-center mb-9 px-4 sm:px-8 pt-8 pb-8";

/// Lookup id of the page's content region.
pub const CONTENT_ID: &str = "page-content";

/// A vertical frame at least as tall as the viewport.
///
/// Renders, in order: the header (only when enabled), the centered content
/// region, and the footer (unless disabled). The header is off and the footer
/// on by default. Setting a header or footer config does not toggle it.
///
/// # Examples
///
/// ```ignore
/// let page = Page::new()
///     .enable_header(true)
///     .with_header(Header::new().with_title("Home"))
///     .with_child(Element::new().with_title("Welcome"));
/// ```
#[derive(Debug, Default)]
pub struct Page {
    /// Background token. Defaults to the theme's page background.
    pub background: Option<String>,
    pub children: Children,
    pub disable_footer: bool,
    pub footer: Footer,
    pub enable_header: bool,
    pub header: Header,
}

impl Page {
    /// Create a page with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background token (builder).
    pub fn with_background(mut self, token: impl Into<String>) -> Self {
        self.background = Some(token.into());
        self
    }

    /// Add a child (builder).
    pub fn with_child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the child content (builder).
    pub fn with_children(mut self, children: Children) -> Self {
        self.children = children;
        self
    }

    /// Omit the footer (builder).
    pub fn disable_footer(mut self, disable: bool) -> Self {
        self.disable_footer = disable;
        self
    }

    /// Set the footer config (builder).
    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = footer;
        self
    }

    /// Show the header (builder).
    pub fn enable_header(mut self, enable: bool) -> Self {
        self.enable_header = enable;
        self
    }

    /// Set the header config (builder).
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }
}

impl Component for Page {
    fn component_type(&self) -> &str {
        "Page"
    }

    fn compose(&self, cx: &RenderContext, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        let background = self
            .background
            .as_deref()
            .unwrap_or(&cx.theme().page_background);
        debug!(
            header = self.enable_header,
            footer = !self.disable_footer,
            background,
            "composing page"
        );

        let frame = dom.append(
            parent,
            NodeData::element("div")
                .with_component("Page")
                .with_class_list("flex flex-col min-h-screen")
                .with_class_list(background),
        );

        if self.enable_header {
            self.header.compose(cx, dom, Some(frame));
        }

        let content = dom.insert_child(
            frame,
            NodeData::element("div")
                .with_id(CONTENT_ID)
                .with_class_list(CONTENT_CLASSES),
        );
        self.children.compose_into(cx, dom, content);

        if !self.disable_footer {
            self.footer.compose(cx, dom, Some(frame));
        }

        frame
    }
}

// ===========================================================================
// Tests
// ===========================================================================
