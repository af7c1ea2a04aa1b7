use serde::{Deserialize, Serialize};

pub mod bills;
pub mod format;
pub mod new_bill;
pub mod routes;
pub mod store;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_store;

/// One expense-report record ("note de frais") submitted by an employee.
///
/// Field names on the wire are camelCase (`fileUrl`, `fileName`), matching
/// the bills API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    /// Email of the employee who submitted the bill
    pub email: String,
    /// Expense category shown in the list (e.g. "Transports", "Restaurants et bars")
    #[serde(rename = "type")]
    pub expense_type: String,
    /// Free-form label for the expense
    pub name: String,
    /// Amount in euros, VAT included
    pub amount: f64,
    /// Expense date as an ISO calendar date (YYYY-MM-DD)
    pub date: String,
    pub status: BillStatus,
    /// URL of the uploaded receipt image
    pub file_url: String,
    /// Original filename of the uploaded receipt
    pub file_name: String,
    pub commentary: String,
    /// VAT amount as entered in the form (kept as text, may be empty)
    pub vat: String,
    /// VAT percentage
    pub pct: u32,
}

/// Review status of a bill.
///
/// Unrecognized codes coming from the store are preserved verbatim in
/// `Other` and displayed unchanged rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
    #[serde(untagged)]
    Other(String),
}

impl BillStatus {
    /// Wire/storage code for this status.
    pub fn as_code(&self) -> &str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
            BillStatus::Other(code) => code,
        }
    }

    /// Parse a storage code; unrecognized codes are preserved in `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => BillStatus::Pending,
            "accepted" => BillStatus::Accepted,
            "refused" => BillStatus::Refused,
            other => BillStatus::Other(other.to_string()),
        }
    }
}

/// A bill with its date and status replaced by display strings.
///
/// Derived from [`Bill`] for rendering only; discarded after render.
/// `raw_date` keeps the unformatted date for ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedBill {
    pub id: String,
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    pub formatted_date: String,
    pub formatted_status: String,
    pub file_url: String,
    pub file_name: String,
    pub commentary: String,
    pub raw_date: String,
}

/// The logged-in user, persisted in browser local storage under the
/// `"user"` key as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: String,
    pub email: String,
}

impl User {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: "Employee".to_string(),
            email: email.into(),
        }
    }
}

/// Request to register a new bill draft together with its receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    pub email: String,
    pub file_name: String,
}

/// Response after creating a bill draft: where the receipt now lives and
/// the key under which the bill must be completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillResponse {
    pub file_url: String,
    pub key: String,
}

/// Request completing a bill draft with the submitted form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillRequest {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub status: BillStatus,
    pub commentary: String,
    pub vat: String,
    pub pct: u32,
}

/// One browser-side log line forwarded to the backend log sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}
