use tower_lsp::lsp_types::{Position, Range};
use tree_sitter::Node;

/// Convert tree-sitter node to LSP range
pub(crate) fn node_to_range(node: Node, content: &str) -> Range {
    let start_position = byte_to_position(node.start_byte(), content);
    let end_position = byte_to_position(node.end_byte(), content);

    Range {
        start: start_position,
        end: end_position,
    }
}

/// Convert byte offset to LSP position
pub(crate) fn byte_to_position(byte_offset: usize, content: &str) -> Position {
    let mut line = 0;
    let mut character = 0;

    for (i, ch) in content.char_indices() {
        if i >= byte_offset {
            break;
        }

        if ch == '\n' {
            line += 1;
            character = 0;
        } else {
            character += 1;
        }
    }

    Position {
        line: line as u32,
        character: character as u32,
    }
}

/// Source text of a node, empty when the range is not valid UTF-8
pub(crate) fn node_text<'a>(node: Node, content: &'a str) -> &'a str {
    node.utf8_text(content.as_bytes()).unwrap_or("")
}

/// The character at a byte offset of the document, if any
pub(crate) fn char_at(content: &str, byte_offset: usize) -> Option<char> {
    content.get(byte_offset..).and_then(|rest| rest.chars().next())
}

/// Find the nearest ancestor of one of the given kinds
pub(crate) fn find_ancestor<'tree>(node: Node<'tree>, kinds: &[&str]) -> Option<Node<'tree>> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if kinds.contains(&parent.kind()) {
            return Some(parent);
        }
        current = parent.parent();
    }
    None
}

/// Find the first node of a specific type in the syntax tree
/// Performs a depth-first search to locate a node with the target type
pub fn find_node_by_type<'a>(node: Node<'a>, target_type: &str) -> Option<Node<'a>> {
    if node.kind() == target_type {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_node_by_type(child, target_type) {
            return Some(found);
        }
    }
    None
}
