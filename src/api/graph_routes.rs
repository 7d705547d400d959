//! Family graph REST endpoints
//!
//! Stateless: every graph request fetches fresh records, builds the graph
//! and returns the positioned view in one round trip.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::backend::client::FamilyBackend;
use crate::catalog::{RelationDescriptor, RelationshipCatalog};
use crate::graph::engine::build_graph;
use crate::graph::layout::LayoutConfig;
use crate::graph::types::GraphView;
use crate::graph::viewport::Viewport;

/// Shared state for the family routes
#[derive(Clone)]
pub struct FamilyApiState {
    pub backend: Arc<dyn FamilyBackend>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQuery {
    pub focus: Option<String>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// GET /api/family/graph?focus=<person>&width=<px>&height=<px>
async fn get_family_graph(
    State(state): State<FamilyApiState>,
    Query(params): Query<GraphQuery>,
) -> Result<Json<GraphView>, (StatusCode, String)> {
    let focus = match params.focus.as_deref().map(str::trim) {
        Some(focus) if !focus.is_empty() => focus.to_string(),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                "missing focus parameter".to_string(),
            ))
        }
    };

    let viewport = Viewport::from_container(
        params.width.unwrap_or(0.0),
        params.height.unwrap_or(0.0),
    );

    let (people, relationships) = tokio::try_join!(
        state.backend.fetch_people(),
        state.backend.fetch_relationships(),
    )
    .map_err(|e| {
        error!(error = %e, "backend fetch failed");
        (
            StatusCode::BAD_GATEWAY,
            format!("could not load family data: {}", e),
        )
    })?;

    let graph = build_graph(
        &people,
        &relationships,
        &focus,
        &viewport,
        &LayoutConfig::default(),
    );
    Ok(Json(GraphView::from_graph(graph, viewport)))
}

/// GET /api/family/catalog
async fn get_relation_catalog() -> Json<Vec<RelationDescriptor>> {
    Json(RelationshipCatalog::entries())
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "kin-graph-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the family router with all routes configured
pub fn create_family_router(state: FamilyApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/family/graph", get(get_family_graph))
        .route("/api/family/catalog", get(get_relation_catalog))
        .with_state(state)
}
