//! IEP Goal Server
//!
//! JSON API over the goal engine. Provides REST endpoints for:
//!
//! - SMART-criteria compliance checks
//! - Standards alignment by state, subject and grade
//! - Jurisdiction and sample goal listing
//!
//! ## Configuration
//!
//! Every flag can also be set through a `GOAL_SERVER_*` environment
//! variable; a `.env` file in the working directory is loaded first.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use goal_engine::{GoalEngine, StandardsCatalog};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{
    handle_analyze_standards, handle_check_compliance, handle_health, handle_list_jurisdictions,
    handle_list_templates,
};

/// Command-line arguments for the goal server
#[derive(Parser, Debug)]
#[command(name = "goal-server")]
#[command(about = "IEP goal compliance and standards alignment server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "GOAL_SERVER_PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "GOAL_SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, env = "GOAL_SERVER_RATE_LIMIT", default_value = "10")]
    rate_limit: u32,

    /// JSON array of additional standards merged into the builtin catalog
    #[arg(long, env = "GOAL_SERVER_STANDARDS_FILE")]
    standards_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<GoalEngine>,
}

/// Routes and per-request middleware, without rate limiting
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Analyzers
        .route("/api/goals/compliance", post(handle_check_compliance))
        .route("/api/standards/analyze", post(handle_analyze_standards))
        // Listings
        .route("/api/standards/jurisdictions", get(handle_list_jurisdictions))
        .route("/api/goals/templates", get(handle_list_templates))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builtin standards, plus the deployment's file when one is configured
fn load_engine(standards_file: Option<&PathBuf>) -> anyhow::Result<GoalEngine> {
    let Some(path) = standards_file else {
        return Ok(GoalEngine::new());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read standards file {}", path.display()))?;
    let mut catalog = StandardsCatalog::builtin();
    let added = catalog
        .extend_from_json(&json)
        .with_context(|| format!("Invalid standards file {}", path.display()))?;

    info!(
        "Loaded {} additional standards from {} ({} total)",
        added,
        path.display(),
        catalog.len()
    );

    Ok(GoalEngine::with_catalog(Arc::new(catalog)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting goal server on {}:{}", args.host, args.port);

    let engine = load_engine(args.standards_file.as_ref())?;
    info!("Standards catalog: {} standards", engine.catalog().len());

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .ok_or_else(|| anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = build_router(state).layer(GovernorLayer {
        config: governor_conf,
    });

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
