use reqwest::{Client, Url};
use shared_types::{CatalogItem, ItemsResponse, NewPoint};

use super::{build_http_client, ensure_success, join, parse_base_url, ApiConfig, ServiceError};

/// Client for the collection-point backend.
pub struct EcoletaClient {
    client: Client,
    base_url: Url,
}

impl EcoletaClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ServiceError> {
        Self::with_base_url(&config.ecoleta_api_url, config.timeout_secs)
    }

    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// `GET /items`, unwrapped from the `serializedItems` envelope.
    pub async fn list_items(&self) -> Result<Vec<CatalogItem>, ServiceError> {
        let url = join(&self.base_url, "items")?;
        tracing::debug!(%url, "fetching item catalog");

        let response = self.client.get(url).send().await?;
        let body: ItemsResponse = ensure_success("GET items", response)?.json().await?;

        Ok(body.serialized_items)
    }

    /// `POST /points`. Any 2xx counts as created; the body is not read.
    pub async fn create_point(&self, point: &NewPoint) -> Result<(), ServiceError> {
        let url = join(&self.base_url, "points")?;
        tracing::debug!(%url, name = %point.name, uf = %point.uf, city = %point.city, "creating collection point");

        let response = self.client.post(url).json(point).send().await?;
        ensure_success("POST points", response)?;

        Ok(())
    }
}
