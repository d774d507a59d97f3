//! LSP server for POM folding ranges
//!
//! Keeps the text of open POM documents and answers folding range requests
//! from the structural tagger.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, FoldingRange, FoldingRangeParams, FoldingRangeProviderCapability,
    InitializeParams, InitializeResult, InitializedParams, MessageType, ServerCapabilities,
    SaveOptions, ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind,
    TextDocumentSyncOptions, TextDocumentSyncSaveOptions, Url,
};
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::structural::FoldingAnalyzer;

/// LSP Backend state
pub struct Backend {
    /// LSP client for sending notifications
    client: Client,
    /// Document store for open POM documents
    documents: Arc<RwLock<HashMap<Url, String>>>,
    /// Settings loaded at initialization
    settings: Arc<RwLock<Settings>>,
}

impl Backend {
    /// Create a new backend instance
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
            settings: Arc::new(RwLock::new(Settings::default())),
        }
    }

    /// Get document text by URI
    async fn get_document(&self, uri: &Url) -> Option<String> {
        let docs = self.documents.read().await;
        docs.get(uri).cloned()
    }

    /// Store document text if the URI names a POM file
    async fn store_document(&self, uri: Url, text: String) {
        if !self.settings.read().await.documents.matches(&uri) {
            debug!("Ignoring non-POM document: {}", uri);
            return;
        }
        let mut docs = self.documents.write().await;
        docs.insert(uri, text);
    }

    /// Remove document from store
    async fn remove_document(&self, uri: &Url) {
        let mut docs = self.documents.write().await;
        docs.remove(uri);
    }

    /// Load `pomfold.toml` from the workspace root, keeping defaults on failure
    async fn load_settings(&self, root: Option<Url>) {
        let Some(path) = root.and_then(|uri| uri.to_file_path().ok()) else {
            debug!("No workspace root; using default settings");
            return;
        };

        match Settings::load(&path) {
            Ok(settings) => {
                debug!("Loaded settings from {}", path.display());
                *self.settings.write().await = settings;
            }
            Err(e) => {
                warn!("Using default settings: {}", e);
                self.client
                    .log_message(MessageType::WARNING, format!("pomfold: {}", e))
                    .await;
            }
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("pomfold LSP server initializing");

        #[allow(deprecated)]
        let root = params
            .workspace_folders
            .and_then(|folders| folders.into_iter().next().map(|folder| folder.uri))
            .or(params.root_uri);
        self.load_settings(root).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::FULL),
                        save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                            include_text: Some(true),
                        })),
                        ..Default::default()
                    },
                )),
                folding_range_provider: Some(FoldingRangeProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "pomfold-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("pomfold LSP server initialized");
        self.client
            .log_message(MessageType::INFO, "pomfold language server ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("pomfold LSP server shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        debug!("Document opened: {}", params.text_document.uri);
        self.store_document(params.text_document.uri, params.text_document.text)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        debug!("Document changed: {}", params.text_document.uri);
        // Since we use FULL sync, the entire content is in the first change
        if let Some(change) = params.content_changes.into_iter().next() {
            self.store_document(params.text_document.uri, change.text)
                .await;
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        debug!("Document saved: {}", params.text_document.uri);
        if let Some(text) = params.text {
            self.store_document(params.text_document.uri, text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        debug!("Document closed: {}", params.text_document.uri);
        self.remove_document(&params.text_document.uri).await;
    }

    async fn folding_range(
        &self,
        params: FoldingRangeParams,
    ) -> Result<Option<Vec<FoldingRange>>> {
        let uri = params.text_document.uri;
        debug!("Folding range request for: {}", uri);

        // Get document from store
        let text = match self.get_document(&uri).await {
            Some(doc) => doc,
            None => {
                debug!("No POM document stored for: {}", uri);
                return Ok(None);
            }
        };

        let settings = self.settings.read().await.folding.clone();
        let ranges = FoldingAnalyzer::generate_ranges_with(&text, &settings);
        debug!("Generated {} folding ranges for {}", ranges.len(), uri);

        Ok(Some(ranges))
    }
}

/// Run the language server over stdin/stdout
pub async fn run_server() {
    info!(
        "Starting pomfold Language Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
