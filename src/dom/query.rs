//! DOM queries: by component, class, tag, id; generic predicate matching.
//!
//! All queries walk the tree from the root in pre-order, so results come back
//! in document order.

use super::node::{NodeData, NodeId, NodeKind};
use super::tree::Dom;

impl Dom {
    /// Find all nodes emitted as the root of a component of the given type.
    pub fn query_by_component(&self, component: &str) -> Vec<NodeId> {
        self.query_all(|data| data.component.as_deref() == Some(component))
    }

    /// The first node (in document order) emitted by a component of the given type.
    pub fn first_by_component(&self, component: &str) -> Option<NodeId> {
        self.find_first(|data| data.component.as_deref() == Some(component))
    }

    /// Find all nodes that have the given class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(|data| data.has_class(class))
    }

    /// Find all element nodes with the given tag.
    pub fn query_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.query_all(|data| data.tag() == Some(tag))
    }

    /// Find the first node whose lookup id matches.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_first(|data| data.id.as_deref() == Some(id))
    }

    /// Find all nodes matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_tree()
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Concatenate every text node in the subtree rooted at `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        self.walk_depth_first(id)
            .into_iter()
            .filter_map(|node| match &self.get(node)?.kind {
                NodeKind::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn find_first(&self, predicate: impl Fn(&NodeData) -> bool) -> Option<NodeId> {
        self.iter_tree()
            .find(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
    }

    /// Iterate over `(NodeId, &NodeData)` pairs reachable from the root.
    fn iter_tree(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.root()
            .map(|root| self.walk_depth_first(root))
            .unwrap_or_default()
            .into_iter()
            .filter_map(move |id| self.get(id).map(|data| (id, data)))
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::node::NodeData;
    use crate::dom::tree::Dom;

    /// Build a test tree for queries:
    /// ```text
    ///            root (div, Page)
    ///           /        \
    ///   header (Header)   main (div .content)
    ///        |              /         \
    ///   h2 "Hi"     a .btn (Button)   p .btn #note
    ///                  |                 |
    ///               "Home"            "Note"
    /// ```
    fn build_query_tree() -> Dom {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::element("div").with_component("Page"));
        let header = dom.insert_child(
            root,
            NodeData::element("header").with_component("Header"),
        );
        let h2 = dom.insert_child(header, NodeData::element("h2"));
        dom.insert_child(h2, NodeData::text("Hi"));
        let main = dom.insert_child(root, NodeData::element("div").with_class("content"));
        let a = dom.insert_child(
            main,
            NodeData::element("a").with_component("Button").with_class("btn"),
        );
        dom.insert_child(a, NodeData::text("Home"));
        let p = dom.insert_child(
            main,
            NodeData::element("p").with_class("btn").with_id("note"),
        );
        dom.insert_child(p, NodeData::text("Note"));
        dom
    }

    #[test]
    fn query_by_component() {
        let dom = build_query_tree();
        assert_eq!(dom.query_by_component("Header").len(), 1);
        assert_eq!(dom.query_by_component("Button").len(), 1);
        assert!(dom.query_by_component("Footer").is_empty());
        assert_eq!(dom.first_by_component("Page"), dom.root());
    }

    #[test]
    fn query_by_class_in_document_order() {
        let dom = build_query_tree();
        let hits = dom.query_by_class("btn");
        assert_eq!(hits.len(), 2);
        assert_eq!(dom.get(hits[0]).unwrap().tag(), Some("a"));
        assert_eq!(dom.get(hits[1]).unwrap().tag(), Some("p"));
    }

    #[test]
    fn query_by_tag() {
        let dom = build_query_tree();
        assert_eq!(dom.query_by_tag("div").len(), 2);
        assert_eq!(dom.query_by_tag("h2").len(), 1);
        assert!(dom.query_by_tag("span").is_empty());
    }

    #[test]
    fn query_by_id() {
        let dom = build_query_tree();
        let note = dom.query_by_id("note").unwrap();
        assert_eq!(dom.text_content(note), "Note");
        assert!(dom.query_by_id("missing").is_none());
    }

    #[test]
    fn query_all_predicate() {
        let dom = build_query_tree();
        let texts = dom.query_all(|data| data.text_value().is_some());
        assert_eq!(texts.len(), 3);
    }

    #[test]
    fn text_content_concatenates_subtree() {
        let dom = build_query_tree();
        assert_eq!(dom.text_content(dom.root().unwrap()), "HiHomeNote");
    }

    #[test]
    fn queries_on_empty_dom() {
        let dom = Dom::new();
        assert!(dom.query_by_class("x").is_empty());
        assert!(dom.first_by_component("Page").is_none());
    }
}
