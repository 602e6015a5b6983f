//! HTTP client for the workshop REST API.
//!
//! This module provides the shared HTTP client for communicating with the
//! workshop backend. It implements `taller-core`'s `BudgetStore` trait so
//! the budget service stays transport-agnostic.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use taller_core::budgets::{BudgetDraft, BudgetRecord, BudgetSnapshot, BudgetStore};
use taller_core::clients::Client;
use taller_core::errors::{Error, Result};
use taller_core::products::Product;
use taller_core::vehicles::Vehicle;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for the workshop backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8082/tallermecanico/api";

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the workshop REST API.
///
/// # Example
///
/// ```ignore
/// let client = WorkshopApiClient::new(DEFAULT_API_URL, Some("jwt-token"))?;
/// let snapshot = client.fetch_snapshot().await?;
/// ```
#[derive(Debug, Clone)]
pub struct WorkshopApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
}

impl WorkshopApiClient {
    /// Create a new API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the backend
    /// * `access_token` - A bearer token, when a session is available.
    ///   Requests are sent without an `Authorization` header otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the token format is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(base_url: &str, access_token: Option<&str>) -> Result<Self> {
        let auth_header = access_token
            .map(|token| {
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))
            })
            .transpose()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[WorkshopApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        self.parse_response(response).await
    }

    /// Make a POST request with a JSON body and parse the response.
    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[WorkshopApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        self.parse_response(response).await
    }

    /// Make a PUT request with a JSON body and parse the response.
    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[WorkshopApi] PUT {}", url);

        let response = self
            .client
            .put(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        self.parse_response(response).await
    }

    /// Make a DELETE request. The backend answers with an empty body or a
    /// bare status, so no payload is parsed.
    async fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[WorkshopApi] DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::api_error(status.as_u16(), &body))
    }

    /// Parse an HTTP response, handling errors appropriately.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            Error::Unexpected(format!(
                "Failed to parse response: {} - {}",
                e,
                body.chars().take(200).collect::<String>()
            ))
        })
    }

    /// Build an `Error::Api`, surfacing the server's `message` verbatim
    /// when the error body carries one.
    fn api_error(status: u16, body: &str) -> Error {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|err| err.message.or(err.error));
        Error::Api { status, message }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Catalog Endpoints
    // ─────────────────────────────────────────────────────────────────────

    /// Fetch all clients.
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        let clients: Vec<Client> = self.get("/clientes").await?;
        info!("[WorkshopApi] Fetched {} clients", clients.len());
        Ok(clients)
    }

    /// Fetch all vehicles.
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>> {
        let vehicles: Vec<Vehicle> = self.get("/vehiculos").await?;
        info!("[WorkshopApi] Fetched {} vehicles", vehicles.len());
        Ok(vehicles)
    }

    /// Fetch the product catalog.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let products: Vec<Product> = self.get("/productos").await?;
        info!("[WorkshopApi] Fetched {} products", products.len());
        Ok(products)
    }
}

// ─────────────────────────────────────────────────────────────────────────
// BudgetStore Trait Implementation
// ─────────────────────────────────────────────────────────────────────────

#[async_trait]
impl BudgetStore for WorkshopApiClient {
    /// Fetch the combined budgets-plus-catalogs snapshot.
    async fn fetch_snapshot(&self) -> Result<BudgetSnapshot> {
        let snapshot: BudgetSnapshot = self.get("/presupuestos/data").await?;
        info!(
            "[WorkshopApi] Fetched snapshot with {} budgets",
            snapshot.budgets.len()
        );
        Ok(snapshot)
    }

    async fn create_budget(&self, draft: &BudgetDraft) -> Result<BudgetRecord> {
        self.post("/presupuestos", draft).await
    }

    async fn update_budget(&self, id: i64, draft: &BudgetDraft) -> Result<BudgetRecord> {
        self.put(&format!("/presupuestos/{}", id), draft).await
    }

    async fn delete_budget(&self, id: i64) -> Result<()> {
        self.delete(&format!("/presupuestos/{}", id)).await
    }
}
