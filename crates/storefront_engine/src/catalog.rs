use std::sync::Arc;

use url::Url;

use crate::decode::{decode_catalog, CatalogProduct};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{FailureKind, FetchError};

/// Reads the product listing from the catalog service.
#[derive(Clone)]
pub struct CatalogClient {
    fetcher: Arc<dyn Fetcher>,
    endpoint: Url,
}

impl CatalogClient {
    pub fn new(fetcher: Arc<dyn Fetcher>, endpoint: Url) -> Self {
        Self { fetcher, endpoint }
    }

    pub fn from_settings(settings: FetchSettings) -> Result<Self, FetchError> {
        let endpoint = settings.products_url()?;
        Ok(Self::new(Arc::new(ReqwestFetcher::new(settings)), endpoint))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One GET against the listing endpoint, decoded into catalog records.
    pub async fn list_products(&self) -> Result<Vec<CatalogProduct>, FetchError> {
        let output = self.fetcher.fetch(&self.endpoint).await?;
        decode_catalog(&output.bytes)
            .map_err(|err| FetchError::new(FailureKind::MalformedPayload, err.to_string()))
    }
}
