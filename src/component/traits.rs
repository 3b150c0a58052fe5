//! Component trait: compose into the DOM, run a render pass.
//!
//! A component is a plain configuration value. Composing it appends its nodes
//! to a [`Dom`] under a given parent and returns the node it emitted at the
//! top. Composition is a pure function of the configuration and the
//! [`RenderContext`]; nothing is retained between passes.

use tracing::trace;

use crate::context::RenderContext;
use crate::dom::{Dom, NodeId};

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every component.
///
/// Object-safe: children are stored as `Box<dyn Component>`.
pub trait Component {
    /// The type name recorded on the component's top node (e.g. "Grid").
    fn component_type(&self) -> &str;

    /// Append this component's nodes under `parent` (or as a new top-level
    /// node when `parent` is `None`) and return the top node.
    fn compose(&self, cx: &RenderContext, dom: &mut Dom, parent: Option<NodeId>) -> NodeId;
}

/// Run one render pass: compose `component` into a fresh DOM rooted at its top node.
pub fn render(component: &dyn Component, cx: &RenderContext) -> Dom {
    let mut dom = Dom::new();
    let root = component.compose(cx, &mut dom, None);
    dom.set_root(root);
    trace!(
        component = component.component_type(),
        nodes = dom.len(),
        "render pass"
    );
    dom
}

// ===========================================================================
// Tests
// ===========================================================================
