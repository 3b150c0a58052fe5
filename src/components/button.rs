//! Button component: a link styled as an action control.

use crate::component::Component;
use crate::context::RenderContext;
use crate::dom::{Dom, NodeData, NodeId};

/// Classes every button carries.
pub const BUTTON_CLASSES: &str =
    "inline-block px-6 py-2 my-4 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700";

/// An actionable link with a label.
///
/// # Examples
///
/// ```ignore
/// let home = Button::new("/", "Go back Home");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    href: String,
    label: String,
}

impl Button {
    /// Create a button pointing at `href`.
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    /// Return the target URL.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Return the label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Component for Button {
    fn component_type(&self) -> &str {
        "Button"
    }

    fn compose(&self, _cx: &RenderContext, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        let link = dom.append(
            parent,
            NodeData::element("a")
                .with_component("Button")
                .with_class_list(BUTTON_CLASSES)
                .with_attr("href", &self.href),
        );
        dom.insert_child(link, NodeData::text(&self.label));
        link
    }
}
