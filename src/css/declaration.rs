//! Declaration accessors over tree-sitter nodes
//!
//! tree-sitter-css gives a `declaration` node as a flat child list
//! (`property_name`, `:`, values, optional `important`, `;`). [`Declaration`]
//! exposes it the way the lint rules ask for it, and [`Element`] pairs it with
//! its normalized property name for comparisons within one block.

use tree_sitter::Node;

use crate::css::constants::*;
use crate::css::tree_utils::{char_at, node_text};

/// View of a `declaration` node
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'tree> {
    node: Node<'tree>,
}

impl<'tree> Declaration<'tree> {
    /// Wrap a node, if it is a declaration
    pub fn new(node: Node<'tree>) -> Option<Self> {
        (node.kind() == NODE_DECLARATION).then_some(Self { node })
    }

    pub fn node(&self) -> Node<'tree> {
        self.node
    }

    /// The `property_name` node, unless missing after error recovery
    pub fn property(&self) -> Option<Node<'tree>> {
        self.node
            .child(0)
            .filter(|child| child.kind() == NODE_PROPERTY_NAME && !child.is_missing())
    }

    /// Property name as written, including a `*` hack character that the
    /// grammar leaves outside the identifier
    pub fn full_property_name(&self, content: &str) -> String {
        let Some(property) = self.property() else {
            return "unknown".to_string();
        };
        let name = node_text(property, content);
        let start = property.start_byte();
        if start > 0 && content[..start].ends_with('*') {
            format!("*{}", name)
        } else {
            name.to_string()
        }
    }

    /// Value nodes: everything after the colon except `!important` and comments
    pub fn value_nodes(&self) -> Vec<Node<'tree>> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .filter(|child| {
                let kind = child.kind();
                kind != NODE_PROPERTY_NAME
                    && kind != NODE_IMPORTANT
                    && kind != NODE_ERROR
                    && !is_comment(kind)
                    && !child.is_missing()
            })
            .collect()
    }

    /// Source text spanning all value nodes
    pub fn value_text<'a>(&self, content: &'a str) -> Option<&'a str> {
        let values = self.value_nodes();
        let first = values.first()?;
        let last = values.last()?;
        content.get(first.start_byte()..last.end_byte())
    }

    /// First character of the value, used to spot vendor value fallbacks
    pub fn value_first_char(&self, content: &str) -> Option<char> {
        let values = self.value_nodes();
        values
            .first()
            .and_then(|first| char_at(content, first.start_byte()))
    }

    /// Whether an identifier equal to `identifier` appears anywhere in the value
    pub fn value_contains_identifier(&self, content: &str, identifier: &str) -> bool {
        self.value_nodes()
            .into_iter()
            .any(|value| contains_plain_value(value, content, identifier))
    }

    /// Whether this is a declaration the property rules can reason about:
    /// it has a property name, a value and no syntax errors inside
    pub fn is_css_declaration(&self) -> bool {
        self.property().is_some() && !self.value_nodes().is_empty() && !self.node.has_error()
    }
}

fn contains_plain_value(node: Node, content: &str, identifier: &str) -> bool {
    if node.kind() == NODE_PLAIN_VALUE && node_text(node, content) == identifier {
        return true;
    }
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .any(|child| contains_plain_value(child, content, identifier));
    found
}

/// Strip a `-vendor-` prefix from a property name
pub fn non_prefixed_name(name: &str) -> &str {
    if let Some(rest) = name.strip_prefix('-') {
        if let Some(end) = rest.find('-') {
            return &rest[end + 1..];
        }
    }
    name
}

/// A declaration paired with its lower-cased full property name
#[derive(Debug, Clone)]
pub struct Element<'tree> {
    pub full_property_name: String,
    pub node: Declaration<'tree>,
}

impl<'tree> Element<'tree> {
    pub fn new(declaration: Declaration<'tree>, content: &str) -> Self {
        Self {
            full_property_name: declaration.full_property_name(content).to_lowercase(),
            node: declaration,
        }
    }

    /// Same declaration node
    pub fn is_same(&self, other: &Element) -> bool {
        self.node.node().id() == other.node.node().id()
    }
}
