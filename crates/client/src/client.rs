//! HTTP access to the catalogue service.

use reqwest::Url;
use serde::de::DeserializeOwned;

use catalogue_core::{SetId, UserId};

use crate::error::ClientError;
use crate::models::{SetDetail, SetSummary, SetsResponse, UserDetail, UserSummary, UsersResponse};

/// Read operations exposed by the catalogue service.
///
/// Every call is a single unauthenticated GET; callers await them one at a
/// time.
#[async_trait::async_trait]
pub trait CatalogueApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserSummary>, ClientError>;

    async fn user_by_username(&self, username: &str) -> Result<UserSummary, ClientError>;

    async fn user_by_id(&self, id: &UserId) -> Result<UserDetail, ClientError>;

    async fn list_sets(&self) -> Result<Vec<SetSummary>, ClientError>;

    async fn set_by_id(&self, id: &SetId) -> Result<SetDetail, ClientError>;

    async fn set_by_name(&self, name: &str) -> Result<SetDetail, ClientError>;
}

/// `reqwest`-backed catalogue client.
#[derive(Debug, Clone)]
pub struct CatalogueClient {
    base_url: Url,
    http: reqwest::Client,
}

impl CatalogueClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn with_http(base_url: &str, http: reqwest::Client) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
        }
        if parsed.cannot_be_a_base() {
            return Err(invalid("cannot be a base".to_string()));
        }

        Ok(Self {
            base_url: parsed,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let url = self.endpoint(segments);
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                url: url.to_string(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl CatalogueApi for CatalogueClient {
    async fn list_users(&self) -> Result<Vec<UserSummary>, ClientError> {
        let resp: UsersResponse = self.get_json(&["api", "users"]).await?;
        Ok(resp.users)
    }

    async fn user_by_username(&self, username: &str) -> Result<UserSummary, ClientError> {
        self.get_json(&["api", "user", "by-username", username]).await
    }

    async fn user_by_id(&self, id: &UserId) -> Result<UserDetail, ClientError> {
        self.get_json(&["api", "user", "by-id", id.as_str()]).await
    }

    async fn list_sets(&self) -> Result<Vec<SetSummary>, ClientError> {
        let resp: SetsResponse = self.get_json(&["api", "sets"]).await?;
        Ok(resp.sets)
    }

    async fn set_by_id(&self, id: &SetId) -> Result<SetDetail, ClientError> {
        self.get_json(&["api", "set", "by-id", id.as_str()]).await
    }

    async fn set_by_name(&self, name: &str) -> Result<SetDetail, ClientError> {
        self.get_json(&["api", "set", "by-name", name]).await
    }
}
