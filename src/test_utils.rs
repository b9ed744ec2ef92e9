//! Test utilities shared across the codebase

use std::env;
use std::path::PathBuf;

use tree_sitter::Tree;

use crate::css::css_data::{CssDataManager, CssDataProvider};
use crate::css::declaration::{Declaration, Element};
use crate::css::lint::LintVisitor;
use crate::css::lint_rules::{Level, LevelMask, LintConfigurationSettings, LintSettings, Rule};
use crate::css::parser::CssParser;
use crate::css::tree_utils::{find_node_by_type, node_text};

/// Helper function to get the project root directory for tests
/// This looks for the Cargo.toml file to determine the project root
pub fn get_project_root() -> PathBuf {
    // Try to get the manifest directory from environment (works during cargo test)
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        return PathBuf::from(manifest_dir);
    }

    // Fallback: start from current directory and walk up to find Cargo.toml
    let mut current_dir = env::current_dir().expect("Failed to get current directory");
    loop {
        if current_dir.join("Cargo.toml").exists() {
            return current_dir;
        }
        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            panic!("Could not find project root (Cargo.toml not found)");
        }
    }
}

/// Parse CSS source, panicking if tree-sitter gives up
pub fn parse_css(content: &str) -> Tree {
    let mut parser = CssParser::new().expect("Failed to create CSS parser");
    parser.parse(content, None).expect("Failed to parse CSS")
}

/// Property elements of the first rule set in the tree
pub fn property_table<'tree>(tree: &'tree Tree, content: &str) -> Vec<Element<'tree>> {
    let block = find_node_by_type(tree.root_node(), "rule_set")
        .and_then(|rule_set| find_node_by_type(rule_set, "block"))
        .expect("No rule set block in test CSS");

    let mut cursor = block.walk();
    block
        .named_children(&mut cursor)
        .filter_map(Declaration::new)
        .map(|declaration| Element::new(declaration, content))
        .collect()
}

/// A finding flattened for assertions: rule, level, node text and message
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub rule: Rule,
    pub level: Level,
    pub text: String,
    pub message: String,
}

/// Lint with the given settings and knowledge base, returning every marker
/// whatever its level
pub fn lint_with(content: &str, settings: &LintSettings, data: &dyn CssDataProvider) -> Vec<Finding> {
    let tree = parse_css(content);
    let settings = LintConfigurationSettings::new(settings);
    LintVisitor::entries(tree.root_node(), content, &settings, data, LevelMask::ALL)
        .into_iter()
        .map(|marker| Finding {
            rule: marker.rule(),
            level: marker.level(),
            text: node_text(marker.node(), content).to_string(),
            message: marker.message().to_string(),
        })
        .collect()
}

/// Lint with default settings and the built-in knowledge base
pub fn lint(content: &str) -> Vec<Finding> {
    lint_with(content, &LintSettings::default(), &CssDataManager::new())
}

/// Findings of one rule
pub fn findings_for(findings: &[Finding], rule: Rule) -> Vec<Finding> {
    findings
        .iter()
        .filter(|finding| finding.rule == rule)
        .cloned()
        .collect()
}

/// Node texts of the findings of one rule
pub fn texts_for(findings: &[Finding], rule: Rule) -> Vec<String> {
    findings_for(findings, rule)
        .into_iter()
        .map(|finding| finding.text)
        .collect()
}
