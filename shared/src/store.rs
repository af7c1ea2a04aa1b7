//! The bills store abstraction.
//!
//! The remote data service is reached through [`BillStore`] so the list and
//! submission pipelines never depend on a concrete HTTP client. The
//! frontend implements it over gloo-net; tests implement it in memory.

use async_trait::async_trait;
use thiserror::Error;

use crate::{Bill, CreateBillRequest, CreateBillResponse, UpdateBillRequest};

/// Failure of a store call, already phrased the way the UI renders it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The service answered with a non-success HTTP status.
    #[error("Erreur {0}")]
    Api(u16),
    /// The request never completed (transport failure, bad payload).
    #[error("{0}")]
    Network(String),
}

/// Promise-style API of the bills service.
///
/// Futures are not required to be `Send`: the wasm client runs on a
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait BillStore {
    /// Fetch every bill visible to the current user.
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Register a bill draft and its receipt; returns the receipt URL and
    /// the key under which the bill must be completed.
    async fn create(&self, request: CreateBillRequest) -> Result<CreateBillResponse, StoreError>;

    /// Complete a bill draft with the submitted form fields.
    async fn update(&self, id: &str, request: UpdateBillRequest) -> Result<Bill, StoreError>;
}
