//! Syntax tree printer for debugging lint results
//!
//! Renders a tree-sitter-css tree as an indented outline, one node per line,
//! with its 1-based position and a shortened excerpt of its source text.

use std::collections::BTreeMap;
use std::fmt::Write;

use tree_sitter::Node;

/// Longest excerpt shown for a node before it is cut
const MAX_EXCERPT_CHARS: usize = 47;

/// Print a complete syntax tree to stdout
pub fn print_tree_to_stdout(node: Node, content: &str) {
    print!("{}", render_tree(node, content));
}

/// Render a syntax tree with a header and node statistics
pub fn render_tree(node: Node, content: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "=== CSS Syntax Tree ===");
    let _ = writeln!(output, "Content size: {} bytes", content.len());
    let _ = writeln!(output, "Tree has errors: {}", node.has_error());
    let _ = writeln!(output);

    render_node(node, content, 0, None, &mut output);

    let _ = writeln!(output);
    let _ = writeln!(output, "=== Tree Statistics ===");
    for (kind, count) in collect_node_stats(node) {
        let _ = writeln!(output, "{}: {}", kind, count);
    }
    output
}

fn render_node(node: Node, content: &str, depth: usize, field: Option<&str>, output: &mut String) {
    let indent = "  ".repeat(depth);
    let label = match field {
        Some(field) => format!("{}: ", field),
        None => String::new(),
    };
    let marker = if node.is_missing() { " MISSING" } else { "" };

    let _ = writeln!(
        output,
        "{}{}{}{}[{}:{}] '{}'",
        indent,
        label,
        node.kind(),
        marker,
        node.start_position().row + 1,
        node.start_position().column + 1,
        excerpt(node, content)
    );

    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            render_node(cursor.node(), content, depth + 1, cursor.field_name(), output);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
}

/// Shortened, escaped source text of a node
fn excerpt(node: Node, content: &str) -> String {
    let text = node.utf8_text(content.as_bytes()).unwrap_or("<invalid>");
    let shortened = if text.chars().count() > MAX_EXCERPT_CHARS + 3 {
        let cut: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    };

    shortened
        .replace('\n', "\\n")
        .replace('\t', "\\t")
        .replace('\r', "\\r")
}

/// Count nodes by kind
pub fn collect_node_stats(node: Node) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    collect_node_stats_recursive(node, &mut stats);
    stats
}

fn collect_node_stats_recursive(node: Node, stats: &mut BTreeMap<String, usize>) {
    *stats.entry(node.kind().to_string()).or_insert(0) += 1;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_node_stats_recursive(child, stats);
    }
}
