use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Utc;
use hyper::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::render::{HtmlTarget, Renderer};
use crate::sources::{upcoming_only, RemoteSource, StaticSource};
use crate::store::InMemoryMatchStore;
use crate::types::Match;

pub type StaticBoard = StaticSource<InMemoryMatchStore, HtmlTarget>;

/// Which source backs the served page
pub enum Board {
    Static(Mutex<StaticBoard>),
    Remote {
        source: RemoteSource,
        renderer: Renderer,
        /// Empty target cloned for every request
        template: HtmlTarget,
    },
}

#[derive(Clone)]
pub struct AppState {
    board: Arc<Board>,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(board),
        }
    }
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "fixture-board",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Full page; remote boards fetch a fresh snapshot on every request
async fn index(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    let page = match state.board.as_ref() {
        Board::Static(board) => board.lock().await.target().page(),
        Board::Remote {
            source,
            renderer,
            template,
        } => {
            let mut target = template.clone();
            source.refresh(renderer, &mut target, Utc::now()).await;
            target.page()
        }
    };

    page.map(Html).map_err(|e| {
        error!("Failed to render page: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Error rendering matches: {}", e))
    })
}

async fn list_matches(State(state): State<AppState>) -> Json<Vec<Match>> {
    let matches = match state.board.as_ref() {
        Board::Static(board) => board.lock().await.matches().to_vec(),
        Board::Remote { source, .. } => upcoming_only(source.fetch_matches().await, Utc::now()),
    };
    Json(matches)
}

/// Create the HTTP router with all routes
pub fn create_server(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/matches", get(list_matches))
        // Stylesheet and images for the rendered page
        .nest_service("/assets", ServeDir::new("assets"))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

/// Start the HTTP server on the specified port
pub async fn start_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = create_server(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("HTTP server running on http://localhost:{port}");
    info!("Health check: http://localhost:{port}/health");

    Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
