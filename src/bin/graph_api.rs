//! Family Graph API Server
//!
//! Serves positioned family graphs over REST for the browser renderer.
//!
//! Usage:
//!   cargo run --bin graph_api
//!
//!   curl "http://localhost:3050/api/family/graph?focus=alice&width=1280&height=800"
//!   curl "http://localhost:3050/api/family/catalog"
//!   curl "http://localhost:3050/health"

use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use kin_graph::api::{create_family_router, FamilyApiState};
use kin_graph::backend::HttpFamilyBackend;
use kin_graph::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;

    println!("🌳 Family Graph API Server");
    println!("📡 Backend: {}", config.backend_url);

    let backend = HttpFamilyBackend::new(config.backend_url.clone(), config.request_timeout)?;
    let state = FamilyApiState {
        backend: Arc::new(backend),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_family_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    println!("🌐 Listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
