//! Text component: bare text, titles and headings.

use crate::component::Component;
use crate::context::RenderContext;
use crate::dom::{Dom, NodeData, NodeId};

const TITLE_CLASSES: &str = "text-3xl font-bold";
const HEADING_CLASSES: &str = "text-2xl font-semibold py-4";

/// How a [`Text`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    /// A bare text node, or a `span` when a colour is set.
    Plain,
    /// An `h1`.
    Title,
    /// An `h2`.
    Heading,
}

/// A run of text, optionally wrapped in a title or heading element.
///
/// # Examples
///
/// ```ignore
/// let title = Text::title("Settings").with_colour("text-white");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    variant: TextVariant,
    content: String,
    colour: Option<String>,
}

impl Text {
    fn new(variant: TextVariant, content: impl Into<String>) -> Self {
        Self {
            variant,
            content: content.into(),
            colour: None,
        }
    }

    /// Bare text.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(TextVariant::Plain, content)
    }

    /// A title line.
    pub fn title(content: impl Into<String>) -> Self {
        Self::new(TextVariant::Title, content)
    }

    /// A heading line.
    pub fn heading(content: impl Into<String>) -> Self {
        Self::new(TextVariant::Heading, content)
    }

    /// Set the colour token (builder).
    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = Some(colour.into());
        self
    }

    pub fn variant(&self) -> TextVariant {
        self.variant
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn colour(&self) -> Option<&str> {
        self.colour.as_deref()
    }

    fn wrapper(&self) -> Option<NodeData> {
        let (tag, classes) = match (self.variant, &self.colour) {
            (TextVariant::Plain, None) => return None,
            (TextVariant::Plain, Some(_)) => ("span", ""),
            (TextVariant::Title, _) => ("h1", TITLE_CLASSES),
            (TextVariant::Heading, _) => ("h2", HEADING_CLASSES),
        };
        let data = NodeData::element(tag)
            .with_class_list(classes)
            .with_class_list(self.colour.as_deref().unwrap_or_default());
        Some(data)
    }
}

impl Component for Text {
    fn component_type(&self) -> &str {
        "Text"
    }

    fn compose(&self, _cx: &RenderContext, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        match self.wrapper() {
            None => dom.append(parent, NodeData::text(&self.content).with_component("Text")),
            Some(wrapper) => {
                let node = dom.append(parent, wrapper.with_component("Text"));
                // An empty title still renders its (empty) element.
                if !self.content.is_empty() {
                    dom.insert_child(node, NodeData::text(&self.content));
                }
                node
            }
        }
    }
}
