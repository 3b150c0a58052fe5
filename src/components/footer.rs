//! Footer component: action button, beta notice, attribution and copyright.
//!
//! The copyright year is read from the render context's clock on every
//! compose, so a footer rendered after New Year shows the new year without
//! any change to its configuration.

use tracing::debug;

use crate::component::Component;
use crate::components::button::Button;
use crate::components::BAND_CLASSES;
use crate::context::RenderContext;
use crate::dom::{Dom, NodeData, NodeId};

const ROW_CLASSES: &str =
    "flex flex-col md:flex-row justify-center items-center h-auto md:h-16 p-4 md:p-2 pb-16 md:pb-2";
const BETA_CLASSES: &str = "text-yellow-500 mb-2 md:mb-0";
const SEPARATOR_CLASSES: &str = "hidden md:block mx-2";
const ATTRIBUTION_CLASSES: &str = "mb-2 md:mb-0";
const AUTHOR_LINK_CLASSES: &str = "text-blue-500 hover:underline";

/// Text of the beta notice.
pub const BETA_NOTICE: &str = "This website is in beta.";

/// Lookup ids of the footer's parts (see [`Dom::query_by_id`]).
pub const BETA_ID: &str = "footer-beta";
pub const ATTRIBUTION_ID: &str = "footer-attribution";
pub const COPYRIGHT_ID: &str = "footer-copyright";

/// Format the copyright line for `name` in `year`.
pub fn copyright_line(name: &str, year: i32) -> String {
    format!("\u{a9} {name} {year}. All rights reserved.")
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Target and label of the footer's action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterButton {
    pub href: String,
    pub label: String,
}

impl FooterButton {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

impl Default for FooterButton {
    fn default() -> Self {
        Self::new("/", "Go back Home")
    }
}

/// Who the site is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    /// Attribution link target. Empty by default.
    pub link: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: String::new(),
        }
    }

    /// Set the link target (builder).
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }
}

impl Default for Author {
    fn default() -> Self {
        Self::new("Author")
    }
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

/// A page footer band.
///
/// By default it shows a "Go back Home" button linking to `/`, the beta
/// notice, and attribution to "Author".
///
/// # Examples
///
/// ```ignore
/// let ft = Footer::new()
///     .with_author(Author::new("Ada").with_link("https://example.com"))
///     .beta(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub disable_button: bool,
    pub button: FooterButton,
    pub author: Author,
    pub is_beta: bool,
}

impl Footer {
    /// Create a footer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Omit the action button (builder).
    pub fn disable_button(mut self, disable: bool) -> Self {
        self.disable_button = disable;
        self
    }

    /// Set the action button's target and label (builder).
    pub fn with_button(mut self, button: FooterButton) -> Self {
        self.button = button;
        self
    }

    /// Set the attribution (builder).
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    /// Show or hide the beta notice (builder).
    pub fn beta(mut self, is_beta: bool) -> Self {
        self.is_beta = is_beta;
        self
    }

    fn separator(dom: &mut Dom, row: NodeId) {
        let sep = dom.insert_child(row, NodeData::element("p").with_class_list(SEPARATOR_CLASSES));
        dom.insert_child(sep, NodeData::text("|"));
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            disable_button: false,
            button: FooterButton::default(),
            author: Author::default(),
            is_beta: true,
        }
    }
}

impl Component for Footer {
    fn component_type(&self) -> &str {
        "Footer"
    }

    fn compose(&self, cx: &RenderContext, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        let band = dom.append(
            parent,
            NodeData::element("footer")
                .with_component("Footer")
                .with_class_list(BAND_CLASSES),
        );

        if !self.disable_button {
            Button::new(&self.button.href, &self.button.label).compose(cx, dom, Some(band));
        }

        let row = dom.insert_child(band, NodeData::element("div").with_class_list(ROW_CLASSES));

        if self.is_beta {
            let beta = dom.insert_child(
                row,
                NodeData::element("p").with_id(BETA_ID).with_class_list(BETA_CLASSES),
            );
            dom.insert_child(beta, NodeData::text(BETA_NOTICE));
            Self::separator(dom, row);
        }

        let attribution = dom.insert_child(
            row,
            NodeData::element("p")
                .with_id(ATTRIBUTION_ID)
                .with_class_list(ATTRIBUTION_CLASSES),
        );
        dom.insert_child(attribution, NodeData::text("Made with \u{2764}\u{fe0f} by "));
        let link = dom.insert_child(
            attribution,
            NodeData::element("a")
                .with_class_list(AUTHOR_LINK_CLASSES)
                .with_attr("href", &self.author.link),
        );
        dom.insert_child(link, NodeData::text(&self.author.name));

        Self::separator(dom, row);

        let year = cx.current_year();
        let copyright = dom.insert_child(row, NodeData::element("p").with_id(COPYRIGHT_ID));
        dom.insert_child(copyright, NodeData::text(copyright_line(&self.author.name, year)));

        debug!(
            button = !self.disable_button,
            beta = self.is_beta,
            year,
            "composed footer"
        );
        band
    }
}

// ===========================================================================
// Tests
// ===========================================================================
