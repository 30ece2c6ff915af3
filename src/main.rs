mod config;
mod error;
mod handlers;
mod recognizer;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::Config;
pub use error::{IdentifyError, Result};

pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}

/// Single allowed browser origin, with credentials. Wildcards are off the
/// table once credentials are allowed, so methods and headers mirror the
/// preflight request instead.
fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origin = config.allowed_origin.parse::<HeaderValue>()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn app(state: Arc<AppState>) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config)?;

    Ok(Router::new()
        // Health check
        .route("/", get(handlers::root))
        .route("/test", get(handlers::test_endpoint))
        // Public API
        .route("/api/identify", post(handlers::identify::identify_song))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config
    let config = Config::from_env()?;

    if config.audd_api_key.is_none() {
        tracing::warn!("AUDD_API_KEY is not set; identify requests will be refused");
    }

    // One shared client; reqwest pools connections internally.
    let http = reqwest::Client::new();

    let state = Arc::new(AppState {
        config: config.clone(),
        http,
    });

    let app = app(state)?;

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
