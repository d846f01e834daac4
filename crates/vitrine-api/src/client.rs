// Hand-crafted async HTTP client for the Vitrine catalog API.
//
// One unauthenticated endpoint: GET {base}/devices.
// The whole collection comes back in a single response; paging,
// filtering, and search all happen client-side.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::types::ProductRecord;

/// Async client for the catalog API.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and guarantee a trailing slash so `Url::join`
    /// appends instead of replacing the last path segment.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch the full product collection.
    ///
    /// `GET {base}/devices`
    pub async fn list_devices(&self) -> Result<Vec<ProductRecord>, Error> {
        self.get("devices").await
    }

    // ── HTTP plumbing ────────────────────────────────────────────────

    /// Join a relative path (e.g. `"devices"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let url = CatalogClient::normalize_base_url("https://shop.example/api").unwrap();
        assert_eq!(url.as_str(), "https://shop.example/api/");
        assert_eq!(
            url.join("devices").unwrap().as_str(),
            "https://shop.example/api/devices"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_idempotent() {
        let url = CatalogClient::normalize_base_url("https://shop.example/api/").unwrap();
        assert_eq!(url.as_str(), "https://shop.example/api/");
    }
}
