use async_trait::async_trait;
use gloo::net::http::Request;
use shared::store::{BillStore, StoreError};
use shared::{Bill, CreateBillRequest, CreateBillResponse, UpdateBillRequest};

/// HTTP client for the bills service.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch all bills visible to the current user
    pub async fn get_bills(&self) -> Result<Vec<Bill>, StoreError> {
        let url = format!("{}/api/bills", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if !response.ok() {
                    return Err(StoreError::Api(response.status()));
                }
                match response.json::<Vec<Bill>>().await {
                    Ok(data) => Ok(data),
                    Err(e) => Err(StoreError::Network(format!("Failed to parse bills: {}", e))),
                }
            }
            Err(e) => Err(StoreError::Network(format!("Failed to fetch bills: {}", e))),
        }
    }

    /// Register a bill draft together with its receipt
    pub async fn create_bill(
        &self,
        request: CreateBillRequest,
    ) -> Result<CreateBillResponse, StoreError> {
        let url = format!("{}/api/bills", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| StoreError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
        {
            Ok(response) => {
                if !response.ok() {
                    return Err(StoreError::Api(response.status()));
                }
                match response.json::<CreateBillResponse>().await {
                    Ok(data) => Ok(data),
                    Err(e) => Err(StoreError::Network(format!("Failed to parse response: {}", e))),
                }
            }
            Err(e) => Err(StoreError::Network(format!("Network error: {}", e))),
        }
    }

    /// Complete a bill draft with the submitted form fields
    pub async fn update_bill(
        &self,
        id: &str,
        request: UpdateBillRequest,
    ) -> Result<Bill, StoreError> {
        let url = format!("{}/api/bills/{}", self.base_url, id);

        match Request::put(&url)
            .json(&request)
            .map_err(|e| StoreError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
        {
            Ok(response) => {
                if !response.ok() {
                    return Err(StoreError::Api(response.status()));
                }
                match response.json::<Bill>().await {
                    Ok(data) => Ok(data),
                    Err(e) => Err(StoreError::Network(format!("Failed to parse response: {}", e))),
                }
            }
            Err(e) => Err(StoreError::Network(format!("Network error: {}", e))),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl BillStore for ApiClient {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.get_bills().await
    }

    async fn create(&self, request: CreateBillRequest) -> Result<CreateBillResponse, StoreError> {
        self.create_bill(request).await
    }

    async fn update(&self, id: &str, request: UpdateBillRequest) -> Result<Bill, StoreError> {
        self.update_bill(id, request).await
    }
}
