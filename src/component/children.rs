//! Child content: one node or an ordered sequence of nodes.

use std::fmt;
use std::slice;

use crate::component::traits::Component;
use crate::context::RenderContext;
use crate::dom::{Dom, NodeId};

/// A boxed component used as child content.
pub type Node = Box<dyn Component>;

/// Child content passed to a container component.
///
/// The distinction matters to [`Grid`](crate::components::Grid): a single
/// child always counts as one, a sequence counts its items.
pub enum Children {
    Single(Node),
    Many(Vec<Node>),
}

impl Children {
    /// A single child.
    pub fn single(child: impl Component + 'static) -> Self {
        Children::Single(Box::new(child))
    }

    /// An empty sequence.
    pub fn none() -> Self {
        Children::Many(Vec::new())
    }

    /// Append a child. A single child becomes a two-item sequence.
    pub fn push(&mut self, child: impl Component + 'static) {
        let child: Node = Box::new(child);
        match self {
            Children::Many(items) => items.push(child),
            Children::Single(_) => {
                if let Children::Single(first) = std::mem::replace(self, Children::none()) {
                    *self = Children::Many(vec![first, child]);
                }
            }
        }
    }

    /// Append a child (builder).
    pub fn with(mut self, child: impl Component + 'static) -> Self {
        self.push(child);
        self
    }

    /// Number of children: 1 for `Single`, the item count for `Many`.
    pub fn len(&self) -> usize {
        match self {
            Children::Single(_) => 1,
            Children::Many(items) => items.len(),
        }
    }

    /// Whether there are no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the children in order.
    pub fn iter(&self) -> slice::Iter<'_, Node> {
        match self {
            Children::Single(node) => slice::from_ref(node).iter(),
            Children::Many(items) => items.iter(),
        }
    }

    /// Compose every child under `parent`, in order.
    pub fn compose_into(&self, cx: &RenderContext, dom: &mut Dom, parent: NodeId) {
        for child in self.iter() {
            child.compose(cx, dom, Some(parent));
        }
    }
}

impl Default for Children {
    fn default() -> Self {
        Self::none()
    }
}

impl FromIterator<Node> for Children {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Children::Many(iter.into_iter().collect())
    }
}

impl From<Vec<Node>> for Children {
    fn from(items: Vec<Node>) -> Self {
        Children::Many(items)
    }
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<&str> = self.iter().map(|c| c.component_type()).collect();
        match self {
            Children::Single(_) => f.debug_tuple("Single").field(&types[0]).finish(),
            Children::Many(_) => f.debug_tuple("Many").field(&types).finish(),
        }
    }
}
