//! Node types: NodeId, NodeKind, NodeData.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// What a node renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A markup element such as `div`, `footer` or `a`.
    Element(String),
    /// A run of literal text.
    Text(String),
    /// Transparent grouping node. Renders only its children.
    Fragment,
}

/// Data associated with a single DOM node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub kind: NodeKind,
    /// Component type that produced this node (e.g. "Page", "Grid").
    ///
    /// Only set on the root node a component emits.
    pub component: Option<String>,
    /// Lookup key for queries. Never emitted as markup.
    pub id: Option<String>,
    /// Style tokens, in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// Attributes other than `class`, in insertion order.
    pub attrs: Vec<(String, String)>,
}

impl NodeData {
    fn with_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            component: None,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Create an element node with the given tag.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Element(tag.into()))
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Text(content.into()))
    }

    /// Create a fragment node.
    pub fn fragment() -> Self {
        Self::with_kind(NodeKind::Fragment)
    }

    /// Tag the node with the component type that produced it (builder).
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set the lookup id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.add_class(&class);
        self
    }

    /// Add multiple classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            let class = class.into();
            self.add_class(&class);
        }
        self
    }

    /// Add every whitespace-separated token of `list` as a class (builder).
    ///
    /// An empty or blank string adds nothing.
    pub fn with_class_list(self, list: &str) -> Self {
        self.with_classes(list.split_whitespace())
    }

    /// Append an attribute (builder). Replaces the value if the name exists.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// The element tag, if this is an element node.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element(tag) => Some(tag),
            _ => None,
        }
    }

    /// The text content, if this is a text node.
    pub fn text_value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. No-op if empty or already present.
    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// The classes joined by single spaces, as they appear in markup.
    pub fn class_string(&self) -> String {
        self.classes.join(" ")
    }
}
