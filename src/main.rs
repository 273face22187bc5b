use axum::{
    routing::get,
    Extension, Router,
};
use scripture_engine::engine::engine::QueryEngine;
use scripture_engine::engine::handlers::{
    handle_resolve, handle_translation_metadata, handle_translations,
};
use scripture_engine::ingestion::loader::{build_corpus, load_dir};
use scripture_engine::search::index::SearchIndex;
use scripture_engine::store::memory::MemoryVerseStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const STORE_TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;
    let mut data_dir = PathBuf::from("data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" if i + 1 < args.len() => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--data" if i + 1 < args.len() => {
                data_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--bind" | "--data" => {
                eprintln!("Missing value for {}", args[i]);
                std::process::exit(1);
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = match bind_addr {
        Some(addr) => addr,
        None => {
            eprintln!("Usage: {} --bind <addr:port> [--data <dir>]", args[0]);
            eprintln!("Example: {} --bind 127.0.0.1:8000 --data ./data", args[0]);
            std::process::exit(1);
        }
    };

    // 1. Load the corpus. Any configuration error is fatal: the engine must never
    //    serve with an inconsistent canon.
    tracing::info!("Loading corpus from {}", data_dir.display());
    let files = load_dir(&data_dir)?;
    let corpus = build_corpus(&files)?;
    let canon = Arc::new(corpus.canon);

    // 2. Populate the verse store:
    let store = Arc::new(MemoryVerseStore::new());
    for verse in &corpus.verses {
        store.insert(verse.clone());
    }
    tracing::info!("Verse store populated with {} verses", store.len());

    // 3. Build the search index snapshot:
    let index = Arc::new(SearchIndex::new());
    index.rebuild(&corpus.verses);

    // 4. Query engine:
    let engine = Arc::new(QueryEngine::new(
        canon.clone(),
        index,
        store,
        STORE_TIMEOUT,
    ));

    // 5. HTTP router:
    let app = Router::new()
        .route("/api/resolve", get(handle_resolve))
        .route("/api/translations", get(handle_translations))
        .route(
            "/api/translations/:id/metadata",
            get(handle_translation_metadata),
        )
        .layer(Extension(engine))
        .layer(Extension(canon));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
