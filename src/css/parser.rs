//! CSS Parser using tree-sitter-css
//!
//! Thin wrapper so every caller sets the grammar up the same way.

use tree_sitter::{Parser, Tree};

use crate::error::{LintError, LintResult};

/// CSS parser wrapper around tree-sitter-css
pub struct CssParser {
    parser: Parser,
}

impl CssParser {
    /// Create a new CSS parser
    pub fn new() -> LintResult<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_css::LANGUAGE.into())
            .map_err(|e| LintError::Language {
                message: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse CSS content and return the syntax tree
    pub fn parse(&mut self, content: &str, old_tree: Option<&Tree>) -> Option<Tree> {
        self.parser.parse(content, old_tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_creation() {
        let parser = CssParser::new();
        assert!(parser.is_ok());
    }

    #[test]
    fn test_basic_parsing() {
        let mut parser = CssParser::new().unwrap();
        let content = ".my-class { color: red; }";
        let tree = parser.parse(content, None).unwrap();
        let root = tree.root_node();
        assert!(!root.has_error());

        assert_eq!(root.kind(), "stylesheet");
        assert_eq!(root.child_count(), 1);

        let rule = root.child(0).unwrap();
        assert_eq!(rule.kind(), "rule_set");

        let selectors = rule.child(0).unwrap();
        assert_eq!(selectors.kind(), "selectors");

        let block = rule.child(1).unwrap();
        assert_eq!(block.kind(), "block");

        // Skip opening brace
        let declaration = block.child(1).unwrap();
        assert_eq!(declaration.kind(), "declaration");

        let property = declaration.child(0).unwrap();
        assert_eq!(property.kind(), "property_name");
        assert_eq!(property.utf8_text(content.as_bytes()).unwrap(), "color");

        // Skip colon
        let value = declaration.child(2).unwrap();
        assert_eq!(value.kind(), "plain_value");
        assert_eq!(value.utf8_text(content.as_bytes()).unwrap(), "red");
    }

    #[test]
    fn test_vendor_prefixed_property_parsing() {
        let mut parser = CssParser::new().unwrap();
        let content = "a { -webkit-transition: none; }";
        let tree = parser.parse(content, None).unwrap();
        let root = tree.root_node();
        assert!(!root.has_error());

        let block = root.child(0).unwrap().child(1).unwrap();
        let declaration = block.child(1).unwrap();
        let property = declaration.child(0).unwrap();
        assert_eq!(property.kind(), "property_name");
        assert_eq!(
            property.utf8_text(content.as_bytes()).unwrap(),
            "-webkit-transition"
        );
    }
}
