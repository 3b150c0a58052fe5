//! Center component: stacks children in a horizontally centered column.

use crate::component::{Children, Component};
use crate::context::RenderContext;
use crate::dom::{Dom, NodeData, NodeId};

const CENTER_CLASSES: &str = "flex flex-col items-center px-4 py-4 sm:px-8";

/// A centered, padded column.
#[derive(Debug, Default)]
pub struct Center {
    children: Children,
}

impl Center {
    /// Create an empty center column.
    pub fn new() -> Self {
        Self::default()
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

    /// Borrow the child content.
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Append the bare wrapper node. Used by components that lay out their
    /// own content inside a center column.
    pub(crate) fn wrapper(dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        dom.append(parent, NodeData::element("div").with_class_list(CENTER_CLASSES))
    }
}

impl Component for Center {
    fn component_type(&self) -> &str {
        "Center"
    }

    fn compose(&self, cx: &RenderContext, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        let node = Self::wrapper(dom, parent);
        if let Some(data) = dom.get_mut(node) {
            data.component = Some("Center".to_owned());
        }
        self.children.compose_into(cx, dom, node);
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::render;
    use crate::components::Text;

    #[test]
    fn wraps_children_in_centered_column() {
        let center = Center::new()
            .with_child(Text::plain("a"))
            .with_child(Text::plain("b"));
        let dom = render(&center, &RenderContext::new());
        let root = dom.root().unwrap();
        let data = dom.get(root).unwrap();
        assert_eq!(data.component.as_deref(), Some("Center"));
        assert_eq!(data.class_string(), CENTER_CLASSES);
        assert_eq!(dom.children(root).len(), 2);
        assert_eq!(dom.text_content(root), "ab");
    }

    #[test]
    fn empty_center() {
        let dom = render(&Center::new(), &RenderContext::new());
        assert_eq!(dom.len(), 1);
        assert!(Center::new().children().is_empty());
    }

    #[test]
    fn with_children_replaces() {
        let center = Center::new()
            .with_child(Text::plain("gone"))
            .with_children(Children::single(Text::plain("kept")));
        let dom = render(&center, &RenderContext::new());
        assert_eq!(dom.text_content(dom.root().unwrap()), "kept");
    }
}
