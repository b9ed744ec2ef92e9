//! Lint findings

use tree_sitter::Node;

use crate::css::lint_rules::{Level, Rule};

/// A lint finding: the offending node, the rule and its resolved level
#[derive(Debug, Clone)]
pub struct Marker<'tree> {
    node: Node<'tree>,
    rule: Rule,
    level: Level,
    detail: Option<String>,
}

impl<'tree> Marker<'tree> {
    pub fn new(node: Node<'tree>, rule: Rule, level: Level, detail: Option<String>) -> Self {
        Self {
            node,
            rule,
            level,
            detail,
        }
    }

    pub fn node(&self) -> Node<'tree> {
        self.node
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// The detail text, or the rule's own message
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or_else(|| self.rule.message())
    }
}
