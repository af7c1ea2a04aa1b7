//! The new-bill form: field state, receipt validation, submission.
//!
//! Submission is a two-step exchange with the store, as the bills API
//! expects: `create()` registers the draft and receipt, `update()` then
//! completes it with the form fields. While the receipt error indicator is
//! active the store is never touched and the user stays on the page.

use thiserror::Error;

use crate::store::{BillStore, StoreError};
use crate::validation::is_allowed_receipt;
use crate::{Bill, BillStatus, CreateBillRequest, UpdateBillRequest};

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// No valid receipt selected; the form stays as-is.
    #[error("justificatif manquant ou invalide")]
    InvalidReceipt,
    /// The store rejected one of the calls.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// State of the new-bill form, field values kept as entered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    /// Amount as typed; parsed on submit
    pub amount: String,
    pub date: String,
    pub vat: String,
    /// VAT percentage as typed; defaults to 20 when unparseable
    pub pct: String,
    pub commentary: String,
    pub file_name: String,
    /// True while the selected file has a disallowed extension; the view
    /// shows the error indicator whenever this is set.
    pub receipt_error: bool,
}

impl NewBillForm {
    /// Record the selected receipt file and re-run the extension check.
    ///
    /// A disallowed extension raises the error indicator and blocks
    /// submission; an allowed one clears it.
    pub fn set_receipt(&mut self, file_name: &str) {
        self.file_name = file_name.to_string();
        self.receipt_error = !is_allowed_receipt(file_name);
    }

    /// Whether the form may be sent: a receipt was selected and passed the
    /// extension check.
    pub fn can_submit(&self) -> bool {
        !self.receipt_error && !self.file_name.is_empty()
    }

    /// Build the completion request from the field values.
    pub fn to_update_request(&self, email: &str) -> UpdateBillRequest {
        UpdateBillRequest {
            email: email.to_string(),
            expense_type: self.expense_type.clone(),
            name: self.name.clone(),
            amount: self.amount.trim().parse().unwrap_or(0.0),
            date: self.date.clone(),
            status: BillStatus::Pending,
            commentary: self.commentary.clone(),
            vat: self.vat.clone(),
            pct: self.pct.trim().parse().unwrap_or(20),
        }
    }

    /// Submit the bill: upload the receipt via `create()`, then complete
    /// the draft with exactly one `update()`.
    ///
    /// Returns the stored bill on success; the caller navigates back to
    /// the bills list. On [`SubmitError`] the caller logs and stays put.
    pub async fn submit(&self, store: &impl BillStore, email: &str) -> Result<Bill, SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::InvalidReceipt);
        }
        let created = store
            .create(CreateBillRequest {
                email: email.to_string(),
                file_name: self.file_name.clone(),
            })
            .await?;
        let bill = store.update(&created.key, self.to_update_request(email)).await?;
        Ok(bill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_store::MemoryStore;

    fn filled_form() -> NewBillForm {
        let mut form = NewBillForm {
            expense_type: "Transports".to_string(),
            name: "Vol Paris Londres".to_string(),
            amount: "348".to_string(),
            date: "2023-10-23".to_string(),
            vat: "70".to_string(),
            pct: "20".to_string(),
            commentary: "déplacement client".to_string(),
            ..NewBillForm::default()
        };
        form.set_receipt("billet.jpg");
        form
    }

    #[test]
    fn txt_receipt_raises_the_error_indicator() {
        let mut form = NewBillForm::default();
        form.set_receipt("justificatif.txt");
        assert!(form.receipt_error);
        assert!(!form.can_submit());
    }

    #[test]
    fn jpg_receipt_clears_the_error_indicator() {
        let mut form = NewBillForm::default();
        form.set_receipt("justificatif.txt");
        form.set_receipt("justificatif.jpg");
        assert!(!form.receipt_error);
        assert!(form.can_submit());
    }

    #[test]
    fn form_without_any_receipt_cannot_be_submitted() {
        let form = NewBillForm::default();
        assert!(!form.can_submit());
    }

    #[tokio::test]
    async fn submit_with_active_error_never_reaches_the_store() {
        let store = MemoryStore::with_bills(Vec::new());
        let mut form = filled_form();
        form.set_receipt("justificatif.txt");

        let result = form.submit(&store, "a@a").await;

        assert_eq!(result.unwrap_err(), SubmitError::InvalidReceipt);
        assert_eq!(store.create_calls.get(), 0);
        assert_eq!(store.update_calls.get(), 0);
    }

    #[tokio::test]
    async fn valid_submit_issues_create_then_exactly_one_update() {
        let store = MemoryStore::with_bills(Vec::new());
        let form = filled_form();

        let bill = form.submit(&store, "employee@test.tld").await.unwrap();

        assert_eq!(store.create_calls.get(), 1);
        assert_eq!(store.update_calls.get(), 1);
        assert_eq!(bill.name, "Vol Paris Londres");
        assert_eq!(bill.amount, 348.0);
        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(bill.email, "employee@test.tld");
        assert_eq!(bill.file_name, "billet.jpg");
    }

    #[tokio::test]
    async fn store_rejection_is_reported_and_nothing_more_is_sent() {
        let store = MemoryStore::failing(StoreError::Api(500));
        let form = filled_form();

        let err = form.submit(&store, "a@a").await.unwrap_err();

        assert_eq!(err.to_string(), "Erreur 500");
        assert_eq!(store.create_calls.get(), 1);
        assert_eq!(store.update_calls.get(), 0);
    }

    #[test]
    fn unparseable_amount_and_pct_fall_back_to_defaults() {
        let mut form = filled_form();
        form.amount = "abc".to_string();
        form.pct = String::new();

        let request = form.to_update_request("a@a");

        assert_eq!(request.amount, 0.0);
        assert_eq!(request.pct, 20);
    }
}
