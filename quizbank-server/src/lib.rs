//! quizbank-server: HTTP surface for the question access service
//!
//! Exposes batch CRUD over the question collection plus a quiz-to-question
//! traversal query. Stores are injected trait objects, so handlers and the
//! service layer never touch a concrete database type directly.

pub mod error;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ServerError};
pub use service::QuestionService;
pub use state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            mongodb_uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: std::env::var("QUIZBANK_DB").unwrap_or_else(|_| "quizbank".to_string()),
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::questions::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Connect to the document store and start the HTTP server
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let (questions, quizzes) = store::mongo::connect(&config.mongodb_uri, &config.database).await?;
    let state = AppState::new(Arc::new(questions), Arc::new(quizzes));
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(%addr, database = %config.database, "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
