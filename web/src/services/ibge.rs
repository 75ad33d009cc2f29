use reqwest::{Client, Url};
use serde::Deserialize;

use super::{build_http_client, ensure_success, join, parse_base_url, ApiConfig, ServiceError};

#[derive(Debug, Deserialize)]
struct UfRecord {
    sigla: String,
}

#[derive(Debug, Deserialize)]
struct CityRecord {
    nome: String,
}

/// Client for the IBGE "localidades" geography service.
pub struct IbgeClient {
    client: Client,
    base_url: Url,
}

impl IbgeClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ServiceError> {
        Self::with_base_url(&config.ibge_api_url, config.timeout_secs)
    }

    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// State abbreviations, sorted alphabetically.
    pub async fn list_ufs(&self) -> Result<Vec<String>, ServiceError> {
        let url = join(&self.base_url, "estados")?;
        tracing::debug!(%url, "fetching UF list");

        let response = self.client.get(url).send().await?;
        let records: Vec<UfRecord> = ensure_success("GET estados", response)?.json().await?;

        let mut ufs: Vec<String> = records.into_iter().map(|r| r.sigla).collect();
        ufs.sort();
        Ok(ufs)
    }

    /// City names for one state, in upstream order.
    pub async fn list_cities(&self, uf: &str) -> Result<Vec<String>, ServiceError> {
        let uf = normalize_uf(uf)?;
        let path = format!("estados/{}/municipios", urlencoding::encode(&uf));
        let url = join(&self.base_url, &path)?;
        tracing::debug!(%url, %uf, "fetching cities");

        let response = self.client.get(url).send().await?;
        let records: Vec<CityRecord> = ensure_success("GET municipios", response)?.json().await?;

        Ok(records.into_iter().map(|r| r.nome).collect())
    }
}

fn normalize_uf(uf: &str) -> Result<String, ServiceError> {
    let trimmed = uf.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(ServiceError::InvalidUf(uf.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uf_codes_are_uppercased() {
        assert_eq!(normalize_uf("sp").unwrap(), "SP");
        assert_eq!(normalize_uf(" RJ ").unwrap(), "RJ");
    }

    #[test]
    fn sentinel_and_junk_are_not_ufs() {
        for bad in ["0", "", "SPX", "S1", "../"] {
            assert!(
                matches!(normalize_uf(bad), Err(ServiceError::InvalidUf(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
