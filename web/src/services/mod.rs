//! Upstream HTTP clients used by the server functions.
//!
//! The browser never talks to the backend or to the geography service
//! directly. Server functions go through the clients initialised here once
//! at startup with [`init_clients`].
//!
//! This module and `tests/services.rs` only compile with the `ssr` feature,
//! so a plain `cargo test` skips them. Run
//! `cargo test -p ecoleta --features ssr` to include the upstream client tests.

pub mod config;
pub mod ecoleta_api;
pub mod error;
pub mod ibge;

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, Response, Url};

pub use config::ApiConfig;
pub use ecoleta_api::EcoletaClient;
pub use error::ServiceError;
pub use ibge::IbgeClient;

struct Clients {
    ecoleta: EcoletaClient,
    ibge: IbgeClient,
}

static CLIENTS: OnceLock<Clients> = OnceLock::new();

pub fn init_clients(config: &ApiConfig) -> Result<(), ServiceError> {
    let clients = Clients {
        ecoleta: EcoletaClient::new(config)?,
        ibge: IbgeClient::new(config)?,
    };

    if CLIENTS.set(clients).is_err() {
        tracing::warn!("upstream clients already initialized, keeping the first set");
    }

    Ok(())
}

pub fn ecoleta() -> Result<&'static EcoletaClient, ServiceError> {
    CLIENTS
        .get()
        .map(|c| &c.ecoleta)
        .ok_or(ServiceError::NotInitialized)
}

pub fn ibge() -> Result<&'static IbgeClient, ServiceError> {
    CLIENTS
        .get()
        .map(|c| &c.ibge)
        .ok_or(ServiceError::NotInitialized)
}

fn build_http_client(timeout_secs: u64) -> Result<Client, ServiceError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent("ecoleta-web/0.1")
        .build()?;
    Ok(client)
}

// Relative joins only append to the base path when it ends in exactly one slash.
fn parse_base_url(base_url: &str) -> Result<Url, ServiceError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| ServiceError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}

fn join(base_url: &Url, path: &str) -> Result<Url, ServiceError> {
    base_url.join(path).map_err(|e| ServiceError::InvalidUrl {
        url: format!("{base_url}{path}"),
        reason: e.to_string(),
    })
}

fn ensure_success(endpoint: &str, response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!(endpoint, %status, "upstream request failed");
        Err(ServiceError::Status {
            endpoint: endpoint.to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_single_trailing_slash() {
        let url = parse_base_url("http://localhost:3333//").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/");

        let nested = parse_base_url("https://servicodados.ibge.gov.br/api/v1/localidades").unwrap();
        assert_eq!(
            join(&nested, "estados").unwrap().as_str(),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados"
        );
    }

    #[test]
    fn garbage_base_url_is_rejected() {
        let err = parse_base_url("not a url").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidUrl { .. }));
    }
}
