//! Grouping of related names under a shared root
//!
//! Used for vendor-prefixed properties (root = unprefixed name) and for
//! keyframes (root = animation name). Keys keep first-insertion order and
//! are never removed.

use std::collections::HashMap;

use tree_sitter::Node;

/// Names and markable nodes seen under one root
#[derive(Debug, Default)]
pub struct RootEntry<'tree> {
    pub names: Vec<String>,
    pub nodes: Vec<Node<'tree>>,
}

#[derive(Debug, Default)]
pub struct NodesByRootMap<'tree> {
    index: HashMap<String, usize>,
    entries: Vec<(String, RootEntry<'tree>)>,
}

impl<'tree> NodesByRootMap<'tree> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` under `root`; `node` is kept only when given
    pub fn add(&mut self, root: &str, name: &str, node: Option<Node<'tree>>) {
        let position = match self.index.get(root) {
            Some(position) => *position,
            None => {
                self.entries.push((root.to_string(), RootEntry::default()));
                self.index.insert(root.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[position].1;
        entry.names.push(name.to_string());
        if let Some(node) = node {
            entry.nodes.push(node);
        }
    }

    pub fn get(&self, root: &str) -> Option<&RootEntry<'tree>> {
        self.index.get(root).map(|position| &self.entries[*position].1)
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RootEntry<'tree>)> {
        self.entries
            .iter()
            .map(|(root, entry)| (root.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
