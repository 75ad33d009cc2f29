use leptos::prelude::*;
use leptos::server;
use shared_types::{CatalogItem, NewPoint};

#[cfg(feature = "ssr")]
use crate::services;

#[server]
pub async fn get_items() -> Result<Vec<CatalogItem>, ServerFnError> {
    let client = services::ecoleta()
        .map_err(|e| ServerFnError::new(format!("Backend unavailable: {}", e)))?;

    match client.list_items().await {
        Ok(items) => Ok(items),
        Err(e) => Err(ServerFnError::new(format!("Failed to fetch items: {}", e))),
    }
}

#[server]
pub async fn get_ufs() -> Result<Vec<String>, ServerFnError> {
    let client = services::ibge()
        .map_err(|e| ServerFnError::new(format!("Geography service unavailable: {}", e)))?;

    match client.list_ufs().await {
        Ok(ufs) => Ok(ufs),
        Err(e) => Err(ServerFnError::new(format!("Failed to fetch states: {}", e))),
    }
}

#[server]
pub async fn get_cities(uf: String) -> Result<Vec<String>, ServerFnError> {
    let client = services::ibge()
        .map_err(|e| ServerFnError::new(format!("Geography service unavailable: {}", e)))?;

    match client.list_cities(&uf).await {
        Ok(cities) => Ok(cities),
        Err(e) => Err(ServerFnError::new(format!("Failed to fetch cities for {}: {}", uf, e))),
    }
}

#[server]
pub async fn create_point(point: NewPoint) -> Result<(), ServerFnError> {
    let client = services::ecoleta()
        .map_err(|e| ServerFnError::new(format!("Backend unavailable: {}", e)))?;

    client.create_point(&point).await.map_err(|e| {
        tracing::warn!(error = %e, name = %point.name, "collection point was not created");
        ServerFnError::new(format!("Failed to create collection point: {}", e))
    })?;

    tracing::info!(name = %point.name, uf = %point.uf, city = %point.city, items = point.items.len(), "collection point created");
    Ok(())
}
