//! The bills list pipeline: fetch, order, format.
//!
//! Each call re-fetches from the store; nothing is cached. A record whose
//! date cannot be parsed is kept with its raw date string so one bad record
//! never aborts the page.

use crate::format::{format_date, format_status};
use crate::store::{BillStore, StoreError};
use crate::{Bill, FormattedBill};

/// Turn one raw bill into its display form.
///
/// Falls back to the raw date when formatting fails; status formatting
/// cannot fail (unknown codes pass through).
pub fn format_bill(bill: &Bill) -> FormattedBill {
    let formatted_date = format_date(&bill.date).unwrap_or_else(|_| bill.date.clone());
    FormattedBill {
        id: bill.id.clone(),
        expense_type: bill.expense_type.clone(),
        name: bill.name.clone(),
        amount: bill.amount,
        formatted_date,
        formatted_status: format_status(&bill.status),
        file_url: bill.file_url.clone(),
        file_name: bill.file_name.clone(),
        commentary: bill.commentary.clone(),
        raw_date: bill.date.clone(),
    }
}

/// Fetch every bill, most recent first, formatted for display.
///
/// A store rejection is returned as-is; its display string is what the
/// page shows in place of the table.
pub async fn load_bills(store: &impl BillStore) -> Result<Vec<FormattedBill>, StoreError> {
    let mut bills = store.list().await?;
    // ISO dates compare correctly as strings
    bills.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(bills.iter().map(format_bill).collect())
}
