//! HTTP client for the family-service backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::backend::types::{PersonRecord, RelationshipRecord};
use crate::error::{BackendError, BackendResult};

const USERS_PATH: &str = "api/users";
const RELATIONSHIPS_PATH: &str = "api/relationships";

/// Data source for people and relationships
///
/// The graph session only talks to this trait, so tests can swap in
/// in-memory backends without a network.
#[async_trait]
pub trait FamilyBackend: Send + Sync {
    async fn fetch_people(&self) -> BackendResult<Vec<PersonRecord>>;
    async fn fetch_relationships(&self) -> BackendResult<Vec<RelationshipRecord>>;
}

/// Backend over the managed REST service
#[derive(Debug, Clone)]
pub struct HttpFamilyBackend {
    client: Client,
    base_url: Url,
}

impl HttpFamilyBackend {
    pub fn new(base_url: Url, timeout: Duration) -> BackendResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> BackendResult<T> {
        let url = self.base_url.join(path)?;
        debug!(%url, "fetching backend resource");
        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status {
                status: response.status().as_u16(),
                endpoint: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl FamilyBackend for HttpFamilyBackend {
    async fn fetch_people(&self) -> BackendResult<Vec<PersonRecord>> {
        self.get_json(USERS_PATH).await
    }

    async fn fetch_relationships(&self) -> BackendResult<Vec<RelationshipRecord>> {
        self.get_json(RELATIONSHIPS_PATH).await
    }
}
