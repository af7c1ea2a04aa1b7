use crate::db::DbConnection;
use shared::{Bill, BillStatus, CreateBillRequest, CreateBillResponse, UpdateBillRequest};
use thiserror::Error;
use tracing::info;

/// Base URL under which stored receipts are served back to the frontend.
const RECEIPT_BASE_URL: &str = "http://localhost:3000/receipts";

#[derive(Debug, Error)]
pub enum BillServiceError {
    #[error("bill {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Domain service for the bills collection: list, draft creation, draft
/// completion. Bills are never deleted.
#[derive(Clone)]
pub struct BillService {
    db: DbConnection,
}

impl BillService {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// List every bill, most recent date first.
    pub async fn list_bills(&self) -> Result<Vec<Bill>, BillServiceError> {
        let bills = self.db.list_bills().await?;
        info!("Returning {} bills", bills.len());
        Ok(bills)
    }

    /// Register a bill draft together with its receipt.
    ///
    /// Allocates the bill key, synthesizes the receipt URL, and stores a
    /// pending draft dated today. The caller completes it with
    /// [`update_bill`](Self::update_bill).
    pub async fn create_bill(
        &self,
        request: CreateBillRequest,
    ) -> Result<CreateBillResponse, BillServiceError> {
        let key = uuid::Uuid::new_v4().to_string();
        let file_url = format!("{}/{}/{}", RECEIPT_BASE_URL, key, request.file_name);
        info!("Creating bill draft {} for {}", key, request.email);

        let draft = Bill {
            id: key.clone(),
            email: request.email,
            expense_type: String::new(),
            name: String::new(),
            amount: 0.0,
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            status: BillStatus::Pending,
            file_url: file_url.clone(),
            file_name: request.file_name,
            commentary: String::new(),
            vat: String::new(),
            pct: 20,
        };
        self.db.insert_bill(&draft).await?;

        Ok(CreateBillResponse { file_url, key })
    }

    /// Complete a bill draft with the submitted form fields.
    pub async fn update_bill(
        &self,
        id: &str,
        request: UpdateBillRequest,
    ) -> Result<Bill, BillServiceError> {
        let mut bill = self
            .db
            .get_bill(id)
            .await?
            .ok_or_else(|| BillServiceError::NotFound(id.to_string()))?;

        bill.email = request.email;
        bill.expense_type = request.expense_type;
        bill.name = request.name;
        bill.amount = request.amount;
        bill.date = request.date;
        bill.status = request.status;
        bill.commentary = request.commentary;
        bill.vat = request.vat;
        bill.pct = request.pct;

        if !self.db.update_bill(&bill).await? {
            return Err(BillServiceError::NotFound(id.to_string()));
        }
        info!("Updated bill {}", id);
        Ok(bill)
    }
}
