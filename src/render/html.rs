//! HTML serialization of a rendered DOM.
//!
//! The `class` attribute always comes first, followed by the node's other
//! attributes in insertion order. Lookup ids and component names are not
//! part of the markup.

use crate::dom::{Dom, NodeData, NodeId, NodeKind};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Escape `&`, `<` and `>` for use in text content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

fn open_tag(tag: &str, data: &NodeData) -> String {
    let mut out = format!("<{tag}");
    if !data.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape_attr(&data.class_string())));
    }
    for (name, value) in &data.attrs {
        out.push_str(&format!(" {name}=\"{}\"", escape_attr(value)));
    }
    out.push('>');
    out
}

// ---------------------------------------------------------------------------
// Compact
// ---------------------------------------------------------------------------

/// Serialize the tree under the root without any added whitespace.
///
/// An empty DOM serializes to an empty string.
pub fn to_html(dom: &Dom) -> String {
    let mut out = String::new();
    if let Some(root) = dom.root() {
        write_compact(dom, root, &mut out);
    }
    out
}

fn write_compact(dom: &Dom, id: NodeId, out: &mut String) {
    let Some(data) = dom.get(id) else {
        return;
    };
    match &data.kind {
        NodeKind::Text(text) => out.push_str(&escape_text(text)),
        NodeKind::Fragment => {
            for &child in dom.children(id) {
                write_compact(dom, child, out);
            }
        }
        NodeKind::Element(tag) => {
            out.push_str(&open_tag(tag, data));
            if is_void(tag) {
                return;
            }
            for &child in dom.children(id) {
                write_compact(dom, child, out);
            }
            out.push_str(&format!("</{tag}>"));
        }
    }
}

// ---------------------------------------------------------------------------
// Pretty
// ---------------------------------------------------------------------------

/// Serialize the tree one node per line, indented two spaces per level.
///
/// Elements without children close on the same line. Fragments add no line
/// or indentation of their own.
pub fn to_pretty_html(dom: &Dom) -> String {
    let mut lines = Vec::new();
    if let Some(root) = dom.root() {
        write_pretty(dom, root, 0, &mut lines);
    }
    lines.join("\n")
}

fn write_pretty(dom: &Dom, id: NodeId, depth: usize, lines: &mut Vec<String>) {
    let Some(data) = dom.get(id) else {
        return;
    };
    let indent = "  ".repeat(depth);
    match &data.kind {
        NodeKind::Text(text) => lines.push(format!("{indent}{}", escape_text(text))),
        NodeKind::Fragment => {
            for &child in dom.children(id) {
                write_pretty(dom, child, depth, lines);
            }
        }
        NodeKind::Element(tag) => {
            let open = open_tag(tag, data);
            let children = dom.children(id);
            if is_void(tag) {
                lines.push(format!("{indent}{open}"));
            } else if children.is_empty() {
                lines.push(format!("{indent}{open}</{tag}>"));
            } else {
                lines.push(format!("{indent}{open}"));
                for &child in children {
                    write_pretty(dom, child, depth + 1, lines);
                }
                lines.push(format!("{indent}</{tag}>"));
            }
        }
    }
}
