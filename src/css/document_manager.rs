//! CSS Document Manager
//!
//! Open documents keyed by URI, sharing one parser.

use std::collections::HashMap;

use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};

use super::document::CssDocument;
use crate::css::parser::CssParser;
use crate::error::LintResult;

pub struct CssDocumentManager {
    documents: HashMap<Url, CssDocument>,
    parser: CssParser,
}

impl CssDocumentManager {
    pub fn new() -> LintResult<Self> {
        Ok(Self {
            documents: HashMap::new(),
            parser: CssParser::new()?,
        })
    }

    /// Open (or reopen) a document and parse it
    pub fn open_document(&mut self, uri: Url, content: String, version: i32) {
        let mut document = CssDocument::new(uri.clone(), content, version);
        document.parse(&mut self.parser);
        self.documents.insert(uri, document);
    }

    /// Apply changes to an open document; unknown URIs are ignored
    pub fn update_document(
        &mut self,
        uri: &Url,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) {
        match self.documents.get_mut(uri) {
            Some(document) => document.apply_changes(changes, version, &mut self.parser),
            None => log::warn!("Change for unopened document {}", uri),
        }
    }

    pub fn close_document(&mut self, uri: &Url) {
        self.documents.remove(uri);
    }

    pub fn get_document(&self, uri: &Url) -> Option<&CssDocument> {
        self.documents.get(uri)
    }

    pub fn get_document_mut(&mut self, uri: &Url) -> Option<&mut CssDocument> {
        self.documents.get_mut(uri)
    }

    /// Drop cached diagnostics of every document, e.g. after a settings change
    pub fn invalidate_all_diagnostics(&mut self) {
        for document in self.documents.values_mut() {
            document.invalidate_diagnostics();
        }
    }
}
