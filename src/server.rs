//! Development server
//!
//! Every request for `/index.js` or `/index.css` rebuilds the bundle from disk.
//! The bundle is composed into memory first and sent only when composition
//! succeeds; any failure becomes a 500 carrying the error text.

use std::net::SocketAddr;
use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use tokio::task::JoinError;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::bundle::{FileSet, ScriptSources};
use crate::config::ProjectLayout;
use crate::error::{Result, server::failed};
use crate::runtime::INDEX_HTML;
use crate::styles::StyleSources;

pub const HTML_CONTENT_TYPE: &str = "text/html";
pub const JS_CONTENT_TYPE: &str = "text/javascript; charset=utf-8";
pub const CSS_CONTENT_TYPE: &str = "text/css; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Files that went into the most recent script and style builds.
///
/// Updated once per request, before the bundle is composed. Readers never
/// block writers.
#[derive(Debug, Default)]
pub struct BuildRecord {
    scripts: ArcSwap<FileSet>,
    styles: ArcSwap<FileSet>,
}

impl BuildRecord {
    pub fn record_scripts(&self, files: FileSet) {
        info!("JS FILES: {files}");
        self.scripts.store(Arc::new(files));
    }

    pub fn record_styles(&self, files: FileSet) {
        info!("CSS FILES: {files}");
        self.styles.store(Arc::new(files));
    }

    #[cfg(test)]
    pub fn scripts(&self) -> Arc<FileSet> {
        self.scripts.load_full()
    }

    #[cfg(test)]
    pub fn styles(&self) -> Arc<FileSet> {
        self.styles.load_full()
    }
}

/// Shared state of the development server
#[derive(Debug, Clone)]
pub struct AppState {
    layout: Arc<ProjectLayout>,
    record: Arc<BuildRecord>,
}

impl AppState {
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout: Arc::new(layout),
            record: Arc::new(BuildRecord::default()),
        }
    }

    #[cfg(test)]
    pub fn record(&self) -> &BuildRecord {
        &self.record
    }
}

/// Routes of the development server
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(index))
        .route("/index.js", any(scripts))
        .route("/index.css", any(styles))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(layout: ProjectLayout, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| failed(format!("failed to bind {addr}: {e}")))?;
    info!("starting server on {addr}");

    axum::serve(listener, router(AppState::new(layout)))
        .await
        .map_err(|e| failed(e.to_string()))
}

async fn index() -> Response {
    ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], INDEX_HTML).into_response()
}

async fn scripts(State(state): State<AppState>) -> Response {
    let result = tokio::task::spawn_blocking(move || render_scripts(&state)).await;
    bundle_response(flatten(result), JS_CONTENT_TYPE)
}

async fn styles(State(state): State<AppState>) -> Response {
    let result = tokio::task::spawn_blocking(move || render_styles(&state)).await;
    bundle_response(flatten(result), CSS_CONTENT_TYPE)
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
        "not found",
    )
        .into_response()
}

fn render_scripts(state: &AppState) -> Result<Vec<u8>> {
    let sources = ScriptSources::from_layout(&state.layout)?;
    state.record.record_scripts(sources.file_set());

    let mut body = Vec::new();
    sources.write_to(&mut body)?;
    Ok(body)
}

fn render_styles(state: &AppState) -> Result<Vec<u8>> {
    let sources = StyleSources::from_layout(&state.layout)?;
    state.record.record_styles(sources.file_set());

    let mut body = Vec::new();
    sources.write_to(&mut body)?;
    Ok(body)
}

fn flatten(result: std::result::Result<Result<Vec<u8>>, JoinError>) -> Result<Vec<u8>> {
    result.unwrap_or_else(|e| Err(failed(format!("build task failed: {e}"))))
}

/// Reply with a composed bundle, or with a 500 carrying the error text
fn bundle_response(result: Result<Vec<u8>>, content_type: &'static str) -> Response {
    match result {
        Ok(body) => ([(header::CONTENT_TYPE, content_type)], body).into_response(),
        Err(e) => {
            error!("{e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
                e.to_string(),
            )
                .into_response()
        }
    }
}
