//! Router-level tests through tower::ServiceExt

#![cfg(feature = "server")]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::{ServiceBuilder, ServiceExt};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use kin_graph::api::{create_family_router, FamilyApiState};
use kin_graph::backend::{FamilyBackend, PersonRecord, RelationParty, RelationshipRecord};
use kin_graph::error::{BackendError, BackendResult};

struct StaticBackend {
    people: Vec<PersonRecord>,
    relationships: Vec<RelationshipRecord>,
}

#[async_trait]
impl FamilyBackend for StaticBackend {
    async fn fetch_people(&self) -> BackendResult<Vec<PersonRecord>> {
        Ok(self.people.clone())
    }

    async fn fetch_relationships(&self) -> BackendResult<Vec<RelationshipRecord>> {
        Ok(self.relationships.clone())
    }
}

struct FailingBackend;

#[async_trait]
impl FamilyBackend for FailingBackend {
    async fn fetch_people(&self) -> BackendResult<Vec<PersonRecord>> {
        Err(BackendError::Status {
            status: 500,
            endpoint: "http://backend/api/users".to_string(),
        })
    }

    async fn fetch_relationships(&self) -> BackendResult<Vec<RelationshipRecord>> {
        Err(BackendError::Status {
            status: 500,
            endpoint: "http://backend/api/relationships".to_string(),
        })
    }
}

fn make_person(id: &str) -> PersonRecord {
    PersonRecord {
        id: id.to_string(),
        name: Some(id.to_uppercase()),
        ..Default::default()
    }
}

fn make_relationship(id: &str, source: &str, target: &str, relation: &str) -> RelationshipRecord {
    RelationshipRecord {
        id: id.to_string(),
        user: RelationParty {
            id: source.to_string(),
        },
        with_user: target.to_string(),
        relation: relation.to_string(),
    }
}

fn sample_app() -> axum::Router {
    let backend = StaticBackend {
        people: vec![
            make_person("a"),
            make_person("b"),
            make_person("c"),
            make_person("d"),
        ],
        relationships: vec![
            make_relationship("r1", "a", "b", "parent"),
            make_relationship("r2", "b", "c", "sibling"),
            make_relationship("r3", "a", "d", "friend"),
        ],
    };
    create_family_router(FamilyApiState {
        backend: Arc::new(backend),
    })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn graph_endpoint_returns_positioned_view() {
    let app = sample_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/family/graph?focus=a&width=800&height=600")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["focus_id"], "a");
    assert_eq!(json["viewport"]["width"], 800.0);
    assert_eq!(json["stats"]["total_nodes"], 4);

    let nodes = json["nodes"].as_array().unwrap();
    let center = nodes.iter().find(|n| n["id"] == "a").unwrap();
    assert_eq!(center["x"], 400.0);
    assert_eq!(center["y"], 300.0);
    assert_eq!(center["level"], 0);
    assert_eq!(center["is_center"], true);

    let outer = nodes.iter().find(|n| n["id"] == "c").unwrap();
    assert_eq!(outer["level"], 2);
}

#[tokio::test]
async fn graph_endpoint_clamps_missing_dimensions() {
    let app = sample_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/family/graph?focus=a")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["viewport"]["width"], 800.0);
    assert_eq!(json["viewport"]["height"], 600.0);
}

#[tokio::test]
async fn graph_endpoint_requires_focus() {
    let app = sample_app();
    for uri in ["/api/family/graph", "/api/family/graph?focus=%20%20"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn graph_endpoint_maps_backend_failure_to_bad_gateway() {
    let app = create_family_router(FamilyApiState {
        backend: Arc::new(FailingBackend),
    });
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/family/graph?focus=a")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn catalog_endpoint_lists_known_relations() {
    let app = sample_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/family/catalog")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json.as_array().unwrap();
    assert!(entries.iter().any(|e| e["code"] == "parent"));
    assert!(entries.iter().any(|e| e["code"] == "guardian"));
}

#[tokio::test]
async fn layered_app_answers_cross_origin_requests() {
    // Same layer stack the server binary builds
    let app = sample_app().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    );
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/family/catalog")
                .header("origin", "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert_eq!(allow_origin, Some("*"));
}

#[tokio::test]
async fn health_endpoint_reports_service() {
    let app = sample_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "kin-graph-api");
}
