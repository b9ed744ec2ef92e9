//! CSS Language Server Implementation
//!
//! Serves lint diagnostics for CSS files over LSP using tower-lsp. Documents
//! are synced incrementally and diagnostics are pulled by the client.

use std::sync::{Arc, Mutex};

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};

use crate::config::lint_settings_from_client;
use crate::css::diagnostics::{CssDiagnostics, DIAGNOSTIC_SOURCE};
use crate::css::document_manager::CssDocumentManager;
use crate::css::lint_rules::{LintConfigurationSettings, LintSettings};
use crate::error::LintResult;

/// CSS Language Server
pub struct CssLanguageServer {
    client: Client,
    /// tower-lsp needs the server to be Send + Sync and hands out `&self`,
    /// so mutable state lives behind a lock even on a single thread
    state: Arc<Mutex<CssServerState>>,
}

struct CssServerState {
    document_manager: CssDocumentManager,
    diagnostics: CssDiagnostics,
    settings: LintConfigurationSettings,
}

impl CssServerState {
    fn apply_settings(&mut self, settings: &LintSettings) {
        self.settings = LintConfigurationSettings::new(settings);
        self.document_manager.invalidate_all_diagnostics();
    }

    /// Diagnostics for a document, computed on demand and cached until the
    /// next edit or settings change
    fn document_diagnostics(&mut self, uri: &Url) -> Vec<Diagnostic> {
        let CssServerState {
            document_manager,
            diagnostics,
            settings,
        } = self;

        let Some(document) = document_manager.get_document_mut(uri) else {
            log::warn!("[diagnostic] Document not open: {}", uri);
            return Vec::new();
        };
        if let Some(cached) = document.get_cached_diagnostics() {
            return cached.clone();
        }

        let results = match document.tree() {
            Some(tree) => diagnostics.analyze(tree, document.content(), settings),
            None => Vec::new(),
        };
        log::debug!(
            "[diagnostic] {} diagnostics for {} (version {})",
            results.len(),
            uri,
            document.version()
        );
        document.cache_diagnostics(results.clone());
        results
    }
}

impl CssLanguageServer {
    pub fn new(
        client: Client,
        document_manager: CssDocumentManager,
        diagnostics: CssDiagnostics,
        settings: &LintSettings,
    ) -> Self {
        let state = CssServerState {
            document_manager,
            diagnostics,
            settings: LintConfigurationSettings::new(settings),
        };

        Self {
            client,
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn update_settings(&self, value: &serde_json::Value) {
        let Some(settings) = lint_settings_from_client(value) else {
            return;
        };
        match self.state.lock() {
            Ok(mut state) => {
                state.apply_settings(&settings);
                log::info!("Lint settings updated by client");
            }
            Err(_) => log::error!("[update_settings] Failed to acquire state lock"),
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for CssLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(options) = &params.initialization_options {
            self.update_settings(options);
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::INCREMENTAL,
                )),
                diagnostic_provider: Some(DiagnosticServerCapabilities::Options(
                    DiagnosticOptions {
                        identifier: Some(DIAGNOSTIC_SOURCE.to_string()),
                        inter_file_dependencies: false,
                        workspace_diagnostics: false,
                        ..Default::default()
                    },
                )),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "CSS Language Server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;

        match self.state.lock() {
            Ok(mut state) => state.document_manager.open_document(
                document.uri.clone(),
                document.text,
                document.version,
            ),
            Err(_) => log::error!("[did_open] Failed to acquire state lock"),
        }

        log::info!("Opened CSS document: {}", document.uri);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        match self.state.lock() {
            Ok(mut state) => state.document_manager.update_document(
                &uri,
                params.content_changes,
                params.text_document.version,
            ),
            Err(_) => log::error!("[did_change] Failed to acquire state lock"),
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        if let Ok(mut state) = self.state.lock() {
            state.document_manager.close_document(&uri);
        }

        log::info!("Closed CSS document: {}", uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.update_settings(&params.settings);
    }

    async fn diagnostic(
        &self,
        params: DocumentDiagnosticParams,
    ) -> Result<DocumentDiagnosticReportResult> {
        let uri = params.text_document.uri;

        let items = match self.state.lock() {
            Ok(mut state) => state.document_diagnostics(&uri),
            Err(_) => {
                log::error!("[diagnostic] Failed to acquire state lock");
                Vec::new()
            }
        };

        Ok(DocumentDiagnosticReportResult::Report(
            DocumentDiagnosticReport::Full(RelatedFullDocumentDiagnosticReport {
                related_documents: None,
                full_document_diagnostic_report: FullDocumentDiagnosticReport {
                    result_id: None,
                    items,
                },
            }),
        ))
    }
}

/// Create and start the CSS language server on stdio
pub async fn start_css_language_server(
    diagnostics: CssDiagnostics,
    settings: LintSettings,
) -> LintResult<()> {
    let document_manager = CssDocumentManager::new()?;
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(move |client| {
        CssLanguageServer::new(client, document_manager, diagnostics, &settings)
    });
    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}
