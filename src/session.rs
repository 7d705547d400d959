//! Interactive graph session
//!
//! One session per open canvas: it owns a `GraphEngine`, fetches people and
//! relationships together, and keeps the latest positioned view. A detached
//! session discards any fetch that resolves after teardown instead of
//! installing a stale snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use crate::backend::client::FamilyBackend;
use crate::error::GraphResult;
use crate::graph::engine::GraphEngine;
use crate::graph::types::GraphView;
use crate::graph::viewport::Viewport;

pub struct GraphSession {
    backend: Arc<dyn FamilyBackend>,
    engine: Mutex<GraphEngine>,
    snapshot: Mutex<Option<GraphView>>,
    detached: AtomicBool,
}

impl GraphSession {
    pub fn new(
        backend: Arc<dyn FamilyBackend>,
        focal_id: impl Into<String>,
        viewport: Viewport,
    ) -> Self {
        Self {
            backend,
            engine: Mutex::new(GraphEngine::new(focal_id, viewport)),
            snapshot: Mutex::new(None),
            detached: AtomicBool::new(false),
        }
    }

    /// Fetch both record sets and rebuild; either fetch failing fails the
    /// whole load and leaves the previous snapshot in place
    pub async fn load(&self) -> GraphResult<Option<GraphView>> {
        let (people, relationships) = tokio::try_join!(
            self.backend.fetch_people(),
            self.backend.fetch_relationships(),
        )?;

        if self.is_detached() {
            warn!("fetch resolved after session teardown, discarding result");
            return Ok(None);
        }

        let view = {
            let mut engine = self.engine.lock().await;
            engine.replace_data(people, relationships);
            engine.rebuild()
        };
        *self.snapshot.lock().await = Some(view.clone());
        Ok(Some(view))
    }

    /// Re-fetch and rebuild with the current focal person and viewport
    pub async fn refresh(&self) -> GraphResult<Option<GraphView>> {
        self.load().await
    }

    /// Rebuild around another person using the records already held
    pub async fn recenter(&self, focal_id: &str) -> GraphView {
        let view = self.engine.lock().await.recenter(focal_id);
        *self.snapshot.lock().await = Some(view.clone());
        view
    }

    /// Relayout for new container measurements using the records already held
    pub async fn resize(&self, width: f32, height: f32) -> GraphView {
        let view = self.engine.lock().await.resize(width, height);
        *self.snapshot.lock().await = Some(view.clone());
        view
    }

    /// Latest positioned view, if any load has completed
    pub async fn latest(&self) -> Option<GraphView> {
        self.snapshot.lock().await.clone()
    }

    /// Mark the session torn down; in-flight loads will discard their result
    pub fn detach(&self) {
        self.detached.store(true, Ordering::SeqCst);
    }

    pub fn is_detached(&self) -> bool {
        self.detached.load(Ordering::SeqCst)
    }
}
