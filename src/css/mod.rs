//! CSS lint
//!
//! Lint diagnostics for CSS stylesheets using:
//! - tree-sitter-css for parsing
//! - a single-pass lint visitor over the syntax tree
//! - tower-lsp for the Language Server Protocol front end

pub mod box_model;
pub mod constants;
pub mod css_data;
pub mod declaration;
pub mod diagnostics;
pub mod document;
pub mod document_manager;
pub mod lint;
pub mod lint_rules;
pub mod marker;
pub mod node_kind;
pub mod nodes_by_root;
pub mod parser;
pub mod property_data;
pub mod server;
pub mod tree_printer;
pub mod tree_utils;

#[cfg(test)]
mod lint_tests;
