//! Closed classification of the tree-sitter node kinds the linter handles
//!
//! The lint visitor matches exhaustively on [`NodeKind`]. Supporting a new
//! node kind means adding a variant here and a handler in the visitor.

use tree_sitter::Node;

use crate::css::constants::*;

/// Node kinds the lint visitor dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `selectors { ... }`
    RuleSet,
    /// Generic `@name ...` at-rule, including block-less postcss statements
    AtRule,
    /// `@keyframes name { ... }` and its vendor spellings
    Keyframes,
    /// `@import ...;`
    Import,
    /// `*` selector
    UniversalSelector,
    /// `#id` selector
    IdSelector,
    /// `name(args)`
    Function,
    /// Integer or float, with or without unit
    NumericValue,
    /// `#rgb`, `#rrggbb`, ...
    HexColorValue,
    /// `!important`
    Prio,
    /// Tree-sitter error recovery node
    Error,
    /// Everything else; visited only for its children
    Other,
}

impl NodeKind {
    /// Classify a syntax tree node
    pub fn of(node: &Node) -> Self {
        match node.kind() {
            NODE_RULE_SET => NodeKind::RuleSet,
            NODE_AT_RULE | NODE_POSTCSS_STATEMENT => NodeKind::AtRule,
            NODE_KEYFRAMES_STATEMENT => NodeKind::Keyframes,
            NODE_IMPORT_STATEMENT => NodeKind::Import,
            NODE_UNIVERSAL_SELECTOR => NodeKind::UniversalSelector,
            NODE_ID_SELECTOR => NodeKind::IdSelector,
            NODE_CALL_EXPRESSION => NodeKind::Function,
            NODE_INTEGER_VALUE | NODE_FLOAT_VALUE => NodeKind::NumericValue,
            NODE_COLOR_VALUE => NodeKind::HexColorValue,
            NODE_IMPORTANT => NodeKind::Prio,
            NODE_ERROR => NodeKind::Error,
            _ if node.is_error() => NodeKind::Error,
            _ => NodeKind::Other,
        }
    }
}
