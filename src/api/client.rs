//! HTTP client for the product catalog backend.
//!
//! Wraps the five REST operations the backend exposes. Every call is a
//! single round-trip with no retry; the caller decides when to re-issue a
//! failed request. Mutations return the server's confirmation message so
//! the UI can show it verbatim.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::{Product, ProductDraft};

/// List response envelope: `{message, products: [...]}`.
///
/// The `message` field the backend sends alongside the list is not used
/// by any view, so it is not captured here.
#[derive(Debug, Deserialize)]
struct ListResponse {
    products: Vec<Product>,
}

/// Mutation response envelope: `{message, ...}`.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

/// Failure envelope: `{error}` with a non-2xx status.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for the catalog REST API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Returns the configured base URL (trailing slash stripped).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the product list, optionally filtered by a search term.
    ///
    /// The term is trimmed; an empty term means no filter and the request
    /// carries no `search` parameter at all.
    pub async fn list(&self, query: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let url = self.list_url(query);
        tracing::debug!("GET {}", url);

        let response = self.send(self.http.get(&url)).await?;
        let body: ListResponse = read_json(response).await?;
        Ok(body.products)
    }

    /// Fetches a single product by id.
    pub async fn get(&self, id: i64) -> Result<Product, ApiError> {
        let url = self.product_url(id);
        tracing::debug!("GET {}", url);

        let response = self.send(self.http.get(&url)).await?;
        read_json(response).await
    }

    /// Creates a product. Returns the server's confirmation message.
    pub async fn create(&self, draft: &ProductDraft) -> Result<String, ApiError> {
        let url = format!("{}/products", self.base_url);
        tracing::debug!("POST {}", url);

        let response = self.send(self.http.post(&url).json(draft)).await?;
        let body: MessageResponse = read_json(response).await?;
        Ok(body.message)
    }

    /// Replaces a product's name, description, and price.
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> Result<String, ApiError> {
        let url = self.product_url(id);
        tracing::debug!("PUT {}", url);

        let response = self.send(self.http.put(&url).json(draft)).await?;
        let body: MessageResponse = read_json(response).await?;
        Ok(body.message)
    }

    /// Deletes a product. Returns the server's confirmation message.
    pub async fn delete(&self, id: i64) -> Result<String, ApiError> {
        let url = self.product_url(id);
        tracing::debug!("DELETE {}", url);

        let response = self.send(self.http.delete(&url)).await?;
        let body: MessageResponse = read_json(response).await?;
        Ok(body.message)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))
    }

    /// Builds the list URL, appending `search=<encoded>` only for a
    /// non-empty trimmed term.
    fn list_url(&self, query: Option<&str>) -> String {
        let mut url = format!("{}/products", self.base_url);
        if let Some(term) = query.map(str::trim).filter(|t| !t.is_empty()) {
            url.push_str("?search=");
            url.push_str(&urlencoding::encode(term));
        }
        url
    }

    fn product_url(&self, id: i64) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

/// Decodes a success body, or maps a non-2xx response to `ApiError::Server`
/// carrying the `{error}` text when the body provides one.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("Unexpected server response (status {})", status.as_u16()),
        };
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
