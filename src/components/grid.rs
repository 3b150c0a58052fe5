//! Grid component: lays children out in responsive columns.

use tracing::debug;

use crate::component::{Children, Component};
use crate::context::RenderContext;
use crate::dom::{Dom, NodeData, NodeId};
use crate::style::columns::ColumnSpec;

/// A multi-column grid.
///
/// Without explicit column classes the column count is derived from the
/// children; see [`ColumnSpec::for_child_count`].
///
/// # Examples
///
/// ```ignore
/// let grid = Grid::new()
///     .with_child(Text::plain("a"))
///     .with_child(Text::plain("b"));
/// let wide = Grid::new().with_columns("grid-cols-4");
/// ```
#[derive(Debug, Default)]
pub struct Grid {
    /// Explicit column classes. An empty string counts as absent.
    pub columns: Option<String>,
    pub children: Children,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit column classes instead of deriving them (builder).
    pub fn with_columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
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

    /// The column spec this grid renders with.
    pub fn column_spec(&self) -> ColumnSpec {
        match self.columns.as_deref() {
            Some(columns) if !columns.is_empty() => ColumnSpec::custom(columns),
            _ => ColumnSpec::for_child_count(self.children.len()),
        }
    }
}

impl Component for Grid {
    fn component_type(&self) -> &str {
        "Grid"
    }

    fn compose(&self, cx: &RenderContext, dom: &mut Dom, parent: Option<NodeId>) -> NodeId {
        let spec = self.column_spec();
        debug!(
            children = self.children.len(),
            explicit = self.columns.as_deref().is_some_and(|c| !c.is_empty()),
            columns = %spec,
            "grid columns"
        );

        let grid = dom.append(
            parent,
            NodeData::element("div")
                .with_component("Grid")
                .with_class("grid")
                .with_class_list(spec.as_str())
                .with_class_list("gap-4 mt-4 mb-4"),
        );
        self.children.compose_into(cx, dom, grid);
        grid
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{render, Node};
    use crate::components::Text;
    use crate::style::RESPONSIVE_FALLBACK;

    fn grid_of(n: usize) -> Grid {
        let children: Children = (0..n)
            .map(|i| Box::new(Text::plain(format!("item {i}"))) as Node)
            .collect();
        Grid::new().with_children(children)
    }

    #[test]
    fn derived_columns_for_small_counts() {
        assert_eq!(grid_of(0).column_spec().as_str(), "grid-cols-1");
        assert_eq!(grid_of(1).column_spec().as_str(), "grid-cols-1");
        assert_eq!(grid_of(2).column_spec().as_str(), "grid-cols-2");
    }

    #[test]
    fn single_child_is_one_column() {
        let grid = Grid::new().with_children(Children::single(Text::plain("only")));
        assert_eq!(grid.column_spec().as_str(), "grid-cols-1");
    }

    #[test]
    fn more_than_two_children_use_fallback() {
        for n in [3, 5, 12] {
            assert_eq!(grid_of(n).column_spec().as_str(), RESPONSIVE_FALLBACK);
        }
    }

    #[test]
    fn explicit_columns_ignore_child_count() {
        for n in [0, 1, 2, 3, 9] {
            let grid = grid_of(n).with_columns("grid-cols-5 xl:grid-cols-6");
            assert_eq!(grid.column_spec().as_str(), "grid-cols-5 xl:grid-cols-6");
        }
    }

    #[test]
    fn empty_explicit_columns_count_as_absent() {
        let grid = grid_of(2).with_columns("");
        assert_eq!(grid.column_spec().as_str(), "grid-cols-2");
    }

    #[test]
    fn renders_classes_and_children() {
        let dom = render(&grid_of(3), &RenderContext::new());
        let root = dom.root().unwrap();
        let data = dom.get(root).unwrap();
        assert_eq!(
            data.class_string(),
            format!("grid {RESPONSIVE_FALLBACK} gap-4 mt-4 mb-4")
        );
        assert_eq!(dom.children(root).len(), 3);
        assert_eq!(dom.text_content(root), "item 0item 1item 2");
    }
}
