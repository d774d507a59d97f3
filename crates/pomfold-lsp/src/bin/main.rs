//! pomfold Language Server binary entry point
//!
//! Installs logging and calls the library's `run_server()` function.

use pomfold_lsp::run_server;

#[tokio::main]
async fn main() {
    // Log to stderr; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    run_server().await;
}
