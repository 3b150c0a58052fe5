//! DOM arena: the slotmap-backed renderable tree with class/component queries.

pub mod node;
pub mod tree;
pub mod query;

pub use node::{NodeData, NodeId, NodeKind};
pub use tree::Dom;
