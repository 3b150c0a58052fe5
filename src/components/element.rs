//! Element component: a titled content card.

use crate::component::{Children, Component};
use crate::components::center::Center;
use crate::components::text::Text;
use crate::context::RenderContext;
use crate::dom::{Dom, NodeData, NodeId};
use crate::theme::Theme;

/// Style tokens of an [`Element`] after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStyle {
    pub background: String,
    pub text_colour: String,
    pub width: String,
}

/// A centered card with a title line above its content and a spacer below.
///
/// Background, title colour and width default to the active [`Theme`].
///
/// # Examples
///
/// ```ignore
/// let card = Element::new()
///     .with_title("Projects")
///     .with_child(Grid::new().with_child(Text::plain("one")));
/// ```
#[derive(Debug, Default)]
pub struct Element {
    pub title: String,
    pub background: Option<String>,
    pub text_colour: Option<String>,
    pub width: Option<String>,
    pub children: Children,
}

impl Element {
    /// Create an untitled card with theme defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the background token (builder).
    pub fn with_background(mut self, token: impl Into<String>) -> Self {
        self.background = Some(token.into());
        self
    }

    /// Set the title colour token (builder).
    pub fn with_text_colour(mut self, token: impl Into<String>) -> Self {
        self.text_colour = Some(token.into());
        self
    }

    /// Set the width token (builder).
    pub fn with_width(mut self, token: impl Into<String>) -> Self {
        self.width = Some(token.into());
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

    /// Resolve each style token against `theme`. Supplied tokens win.
    pub fn style(&self, theme: &Theme) -> ElementStyle {
        let pick = |own: &Option<String>, fallback: &str| {
            own.clone().unwrap_or_else(|| fallback.to_owned())
        };
        ElementStyle {
            background: pick(&self.background, &theme.element_background),
            text_colour: pick(&self.text_colour, &theme.element_text_colour),
            width: pick(&self.width, &theme.element_width),
        }
    }
}

impl Component for Element {
    fn component_type(&self) -> &str {
        "Element"
    }

    fn compose(&self, cx: &RenderContext, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        let style = self.style(cx.theme());

        let card = dom.append(
            parent,
            NodeData::element("div")
                .with_component("Element")
                .with_class_list("px-8 py-8 mx-auto my-auto")
                .with_class_list(&style.background)
                .with_class_list("rounded-2xl w-full")
                .with_class_list(&style.width),
        );

        let column = Center::wrapper(dom, Some(card));
        Text::title(&self.title)
            .with_colour(style.text_colour)
            .compose(cx, dom, Some(column));
        dom.insert_child(column, NodeData::element("br"));
        self.children.compose_into(cx, dom, column);
        dom.insert_child(column, NodeData::element("br"));

        card
    }
}

// ===========================================================================
// Tests
// ===========================================================================
