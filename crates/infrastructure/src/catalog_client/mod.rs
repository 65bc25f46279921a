use async_trait::async_trait;
use fertibase_application::ports::RemoteCatalogPort;
use fertibase_domain::config::RemoteCatalogConfig;
use fertibase_domain::{CatalogDomain, CatalogRecord, DomainError, RecordId};
use reqwest::StatusCode;
use tracing::{debug, instrument};

/// reqwest client for the catalog service's read endpoints.
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &RemoteCatalogConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("FertiBase/", env!("CARGO_PKG_VERSION"), " (catalog-client)"))
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, domain: CatalogDomain) -> String {
        format!("{}/{}", self.base_url, domain.api_segment())
    }

    async fn get(&self, url: &str) -> Result<(StatusCode, Vec<u8>), DomainError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, e))?;

        debug!(url, status = status.as_u16(), bytes = body.len(), "Catalog response");
        Ok((status, body.to_vec()))
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::TransportTimeout {
            url: url.to_string(),
        }
    } else {
        DomainError::TransportFailure(format!("fetch error for {}: {}", url, e))
    }
}

#[async_trait]
impl<T: CatalogRecord> RemoteCatalogPort<T> for HttpCatalogClient {
    #[instrument(skip(self), fields(domain = T::DOMAIN.to_str()))]
    async fn fetch_all(&self) -> Result<Vec<T>, DomainError> {
        let url = self.collection_url(T::DOMAIN);
        let (status, body) = self.get(&url).await?;

        if !status.is_success() {
            return Err(DomainError::TransportFailure(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        serde_json::from_slice(&body)
            .map_err(|e| DomainError::InvalidResponse(format!("{}: {}", url, e)))
    }

    #[instrument(skip(self), fields(domain = T::DOMAIN.to_str()))]
    async fn fetch_by_id(&self, id: &RecordId) -> Result<T, DomainError> {
        let url = format!("{}/{}", self.collection_url(T::DOMAIN), id);
        let (status, body) = self.get(&url).await?;

        if status == StatusCode::NOT_FOUND {
            return Err(DomainError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(DomainError::TransportFailure(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        // A document store answers a missing id with `null` and a 200.
        let record: Option<T> = serde_json::from_slice(&body)
            .map_err(|e| DomainError::InvalidResponse(format!("{}: {}", url, e)))?;
        record.ok_or_else(|| DomainError::NotFound(id.to_string()))
    }
}
