//! CSS Document
//!
//! A single open stylesheet: its text, syntax tree and version, plus the
//! diagnostics last computed for it.

use tower_lsp::lsp_types::{Diagnostic, Position, Range, TextDocumentContentChangeEvent, Url};
use tree_sitter::{InputEdit, Point, Tree};

use crate::css::parser::CssParser;

/// An open CSS document
#[derive(Debug, Clone)]
pub struct CssDocument {
    /// Document URI
    pub uri: Url,
    content: String,
    tree: Option<Tree>,
    /// Document version for LSP synchronization
    version: i32,
    /// Byte offset where each line starts
    line_starts: Vec<usize>,
    /// Diagnostics for the current content, cleared on every edit
    cached_diagnostics: Option<Vec<Diagnostic>>,
}

impl CssDocument {
    pub fn new(uri: Url, content: String, version: i32) -> Self {
        let line_starts = Self::calculate_line_starts(&content);
        Self {
            uri,
            content,
            tree: None,
            version,
            line_starts,
            cached_diagnostics: None,
        }
    }

    /// Parse the whole content from scratch
    pub fn parse(&mut self, parser: &mut CssParser) {
        self.tree = parser.parse(&self.content, None);
        self.invalidate_diagnostics();
    }

    /// Apply LSP content changes in order, re-parsing incrementally where
    /// the change carries a range
    pub fn apply_changes(
        &mut self,
        changes: Vec<TextDocumentContentChangeEvent>,
        new_version: i32,
        parser: &mut CssParser,
    ) {
        self.version = new_version;
        self.invalidate_diagnostics();

        for change in changes {
            match change.range {
                Some(range) => self.apply_incremental_change(&change.text, range, parser),
                None => {
                    self.content = change.text;
                    self.line_starts = Self::calculate_line_starts(&self.content);
                    self.tree = parser.parse(&self.content, None);
                }
            }
        }
    }

    fn apply_incremental_change(&mut self, text: &str, range: Range, parser: &mut CssParser) {
        let start_byte = self.position_to_byte(range.start);
        let old_end_byte = self.position_to_byte(range.end).max(start_byte);
        let start_position = self.byte_to_point(start_byte);
        let old_end_position = self.byte_to_point(old_end_byte);

        self.content.replace_range(start_byte..old_end_byte, text);
        self.line_starts = Self::calculate_line_starts(&self.content);

        let new_end_byte = start_byte + text.len();
        let edit = InputEdit {
            start_byte,
            old_end_byte,
            new_end_byte,
            start_position,
            old_end_position,
            new_end_position: self.byte_to_point(new_end_byte),
        };

        if let Some(tree) = self.tree.as_mut() {
            tree.edit(&edit);
        }
        self.tree = parser.parse(&self.content, self.tree.as_ref());
    }

    /// Convert an LSP position (line, character) to a byte offset, clamped
    /// to the end of the line
    fn position_to_byte(&self, position: Position) -> usize {
        let line = position.line as usize;
        let Some(&line_start) = self.line_starts.get(line) else {
            return self.content.len();
        };

        let line_end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.content.len());
        let line_content = &self.content[line_start..line_end];

        line_content
            .char_indices()
            .nth(position.character as usize)
            .map(|(offset, _)| line_start + offset)
            .unwrap_or(line_end)
    }

    /// Tree-sitter point (row, byte column) of a byte offset
    fn byte_to_point(&self, byte: usize) -> Point {
        let row = self
            .line_starts
            .partition_point(|&start| start <= byte)
            .saturating_sub(1);
        Point {
            row,
            column: byte - self.line_starts[row],
        }
    }

    fn calculate_line_starts(content: &str) -> Vec<usize> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .char_indices()
                .filter(|(_, ch)| *ch == '\n')
                .map(|(i, _)| i + 1),
        );
        line_starts
    }

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Diagnostics for the current content, if computed since the last edit
    pub fn get_cached_diagnostics(&self) -> Option<&Vec<Diagnostic>> {
        self.cached_diagnostics.as_ref()
    }

    pub fn cache_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.cached_diagnostics = Some(diagnostics);
    }

    pub fn invalidate_diagnostics(&mut self) {
        self.cached_diagnostics = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_document(content: &str, parser: &mut CssParser) -> CssDocument {
        let uri = Url::parse("file:///test.css").unwrap();
        let mut document = CssDocument::new(uri, content.to_string(), 1);
        document.parse(parser);
        document
    }

    fn change(start: (u32, u32), end: (u32, u32), text: &str) -> TextDocumentContentChangeEvent {
        TextDocumentContentChangeEvent {
            range: Some(Range {
                start: Position::new(start.0, start.1),
                end: Position::new(end.0, end.1),
            }),
            range_length: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_document_parsing() {
        let mut parser = CssParser::new().unwrap();
        let document = open_document("a { color: red; }", &mut parser);

        assert!(document.tree().is_some());
        assert_eq!(document.version(), 1);
        assert_eq!(document.tree().unwrap().root_node().kind(), "stylesheet");
    }

    #[test]
    fn test_position_to_byte_conversion() {
        let mut parser = CssParser::new().unwrap();
        let document = open_document("a {\n  color: red;\n}", &mut parser);

        assert_eq!(document.position_to_byte(Position::new(0, 0)), 0);
        assert_eq!(document.position_to_byte(Position::new(1, 2)), 6);
        // past the end of a line clamps to the newline
        assert_eq!(document.position_to_byte(Position::new(0, 50)), 3);
        assert_eq!(document.position_to_byte(Position::new(9, 0)), document.content().len());
    }

    #[test]
    fn test_incremental_changes() {
        let mut parser = CssParser::new().unwrap();
        let mut document = open_document("a {\n  color: red;\n}", &mut parser);

        document.apply_changes(vec![change((1, 9), (1, 12), "blue")], 2, &mut parser);
        assert_eq!(document.content(), "a {\n  color: blue;\n}");
        assert_eq!(document.version(), 2);

        document.apply_changes(vec![change((1, 14), (1, 14), "\n  width: 0px;")], 3, &mut parser);
        assert_eq!(document.content(), "a {\n  color: blue;\n  width: 0px;\n}");

        let tree = document.tree().unwrap();
        assert!(!tree.root_node().has_error());
        assert_eq!(tree.root_node().to_sexp(), parser.parse(document.content(), None).unwrap().root_node().to_sexp());
    }

    #[test]
    fn test_full_document_change() {
        let mut parser = CssParser::new().unwrap();
        let mut document = open_document("a { }", &mut parser);

        let full = TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "b { color: red; }".to_string(),
        };
        document.apply_changes(vec![full], 2, &mut parser);
        assert_eq!(document.content(), "b { color: red; }");
        assert!(document.tree().is_some());
    }

    #[test]
    fn test_diagnostics_caching() {
        let mut parser = CssParser::new().unwrap();
        let mut document = open_document("a { }", &mut parser);

        assert!(document.get_cached_diagnostics().is_none());
        document.cache_diagnostics(Vec::new());
        assert!(document.get_cached_diagnostics().is_some());

        document.apply_changes(vec![change((0, 4), (0, 4), "color: red;")], 2, &mut parser);
        assert!(document.get_cached_diagnostics().is_none());
    }
}
