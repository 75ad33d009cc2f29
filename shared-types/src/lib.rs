use serde::{Deserialize, Serialize};

/// A category of recyclable material offered by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: i32,
    pub title: String,
    pub image_url: String,
}

/// Envelope returned by the backend `GET /items` endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ItemsResponse {
    #[serde(rename = "serializedItems")]
    pub serialized_items: Vec<CatalogItem>,
}

/// Body posted to the backend `POST /points` endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}
