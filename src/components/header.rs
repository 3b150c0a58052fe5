//! Header component: a band with a single heading.

use crate::component::Component;
use crate::components::text::Text;
use crate::components::BAND_CLASSES;
use crate::context::RenderContext;
use crate::dom::{Dom, NodeData, NodeId};

/// A page header band containing only a title.
///
/// The default title is empty, which still renders the heading element.
///
/// # Examples
///
/// ```ignore
/// let hdr = Header::new().with_title("My Site");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub title: String,
}

impl Header {
    /// Create a header with an empty title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Return the title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Component for Header {
    fn component_type(&self) -> &str {
        "Header"
    }

    fn compose(&self, cx: &RenderContext, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        let band = dom.append(
            parent,
            NodeData::element("header")
                .with_component("Header")
                .with_class_list(BAND_CLASSES),
        );
        Text::heading(&self.title).compose(cx, dom, Some(band));
        band
    }
}

// ===========================================================================
// Tests
// ===========================================================================
