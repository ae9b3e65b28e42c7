//! Tree-sitter Utility Functions
//!
//! Node traversal and text helpers shared by the Go front-end.

use tree_sitter::Node;

use crate::shared::models::{ByteSpan, SpanBase};

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

/// Every child stored under `field`, in source order
pub fn children_by_field<'a>(node: &Node<'a>, field: &str) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    let children = node.children_by_field_name(field, &mut cursor).collect();
    children
}

/// First syntax error or missing node, depth-first
pub fn find_error_node<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    if !node.has_error() {
        return None;
    }
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if current.is_error() || current.is_missing() {
            return Some(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                if child.has_error() {
                    stack.push(child);
                }
            }
        }
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Extract text content from a node as owned String
#[inline]
pub fn node_text_owned(node: &Node, source: &str) -> String {
    node_text(node, source).trim().to_string()
}

/// Text of the node stored under `field`, if any
pub fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|n| node_text_owned(&n, source))
}

/// Node byte range as a span under `base`
#[inline]
pub fn node_span(node: &Node, base: SpanBase) -> ByteSpan {
    ByteSpan::from_offsets(node.start_byte() as u64, node.end_byte() as u64, base)
}

// ═══════════════════════════════════════════════════════════════════════════
// Go-specific Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Doc comment attached to `node`
///
/// The comment lines directly above the node, with no blank line between
/// them and the node. Markers are stripped; the text ends with a newline.
pub fn doc_comment(node: &Node, source: &str) -> String {
    let mut comments = Vec::new();
    let mut next_row = node.start_position().row;
    let mut prev = node.prev_sibling();

    while let Some(p) = prev {
        if p.kind() != "comment" || p.end_position().row + 1 != next_row {
            break;
        }
        comments.push(p);
        next_row = p.start_position().row;
        prev = p.prev_sibling();
    }

    let mut lines: Vec<&str> = Vec::new();
    for comment in comments.iter().rev() {
        let text = node_text(comment, source);
        if let Some(line) = text.strip_prefix("//") {
            lines.push(line.strip_prefix(' ').unwrap_or(line).trim_end());
        } else if let Some(block) = text.strip_prefix("/*").and_then(|t| t.strip_suffix("*/")) {
            lines.extend(block.lines().map(str::trim_end));
        }
    }

    while lines.first().is_some_and(|l| l.trim().is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return String::new();
    }

    let mut doc = lines.join("\n");
    doc.push('\n');
    doc
}

/// Go exports identifiers that start with an upper-case letter
#[inline]
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Import path without its quotes
pub fn unquote(literal: &str) -> String {
    literal.trim().trim_matches('"').trim_matches('`').to_string()
}
