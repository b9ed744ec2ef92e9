//! CSS Diagnostics
//!
//! Runs the lint visitor over a parsed stylesheet and converts its markers
//! into LSP diagnostics. The CLI prints the same diagnostics.

use tower_lsp::lsp_types::*;
use tree_sitter::Tree;

use crate::css::css_data::{CssDataManager, CustomData};
use crate::css::lint::LintVisitor;
use crate::css::lint_rules::{Level, LevelMask, LintConfigurationSettings};
use crate::css::marker::Marker;
use crate::css::tree_utils::node_to_range;

/// Source name attached to every diagnostic
pub const DIAGNOSTIC_SOURCE: &str = "css";

/// CSS diagnostic analyzer
pub struct CssDiagnostics {
    /// Property and at-rule knowledge base
    data: CssDataManager,
}

impl CssDiagnostics {
    /// Create an analyzer with the built-in knowledge base
    pub fn new() -> Self {
        Self {
            data: CssDataManager::new(),
        }
    }

    /// Create an analyzer with a prepared knowledge base
    pub fn with_data(data: CssDataManager) -> Self {
        Self { data }
    }

    /// Extend the knowledge base with custom data
    pub fn add_custom_data(&mut self, custom_data: CustomData) {
        self.data.add_custom_data(custom_data);
    }

    /// Analyze a syntax tree, reporting warnings and errors
    pub fn analyze(
        &self,
        tree: &Tree,
        content: &str,
        settings: &LintConfigurationSettings,
    ) -> Vec<Diagnostic> {
        self.analyze_with_mask(tree, content, settings, LevelMask::default())
    }

    /// Analyze a syntax tree, reporting the levels in `mask`
    pub fn analyze_with_mask(
        &self,
        tree: &Tree,
        content: &str,
        settings: &LintConfigurationSettings,
        mask: LevelMask,
    ) -> Vec<Diagnostic> {
        let markers = LintVisitor::entries(tree.root_node(), content, settings, &self.data, mask);
        log::debug!("Lint produced {} markers", markers.len());

        markers
            .iter()
            .map(|marker| marker_to_diagnostic(marker, content))
            .collect()
    }
}

impl Default for CssDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

/// LSP severity for a lint level
pub fn level_to_severity(level: Level) -> DiagnosticSeverity {
    match level {
        Level::Error => DiagnosticSeverity::ERROR,
        Level::Warning => DiagnosticSeverity::WARNING,
        Level::Ignore => DiagnosticSeverity::HINT,
    }
}

/// Convert a marker into an LSP diagnostic
pub fn marker_to_diagnostic(marker: &Marker, content: &str) -> Diagnostic {
    Diagnostic {
        range: node_to_range(marker.node(), content),
        severity: Some(level_to_severity(marker.level())),
        code: Some(NumberOrString::String(marker.rule().id().to_string())),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: marker.message().to_string(),
        ..Default::default()
    }
}
