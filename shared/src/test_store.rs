//! In-memory [`BillStore`] used by the pipeline tests, standing in for the
//! remote service the way the original mock store did.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::store::{BillStore, StoreError};
use crate::{Bill, BillStatus, CreateBillRequest, CreateBillResponse, UpdateBillRequest};

pub struct MemoryStore {
    bills: RefCell<Vec<Bill>>,
    fail_with: Option<StoreError>,
    pub list_calls: Cell<usize>,
    pub create_calls: Cell<usize>,
    pub update_calls: Cell<usize>,
}

impl MemoryStore {
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: RefCell::new(bills),
            fail_with: None,
            list_calls: Cell::new(0),
            create_calls: Cell::new(0),
            update_calls: Cell::new(0),
        }
    }

    /// A store whose every call rejects with the given error.
    pub fn failing(error: StoreError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::with_bills(Vec::new())
        }
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl BillStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.check_failure()?;
        Ok(self.bills.borrow().clone())
    }

    async fn create(&self, request: CreateBillRequest) -> Result<CreateBillResponse, StoreError> {
        self.create_calls.set(self.create_calls.get() + 1);
        self.check_failure()?;
        let key = format!("bill-{}", self.bills.borrow().len() + 1);
        let file_url = format!("https://store.test/receipts/{}/{}", key, request.file_name);
        self.bills.borrow_mut().push(Bill {
            id: key.clone(),
            email: request.email,
            expense_type: String::new(),
            name: String::new(),
            amount: 0.0,
            date: String::new(),
            status: BillStatus::Pending,
            file_url: file_url.clone(),
            file_name: request.file_name,
            commentary: String::new(),
            vat: String::new(),
            pct: 20,
        });
        Ok(CreateBillResponse { file_url, key })
    }

    async fn update(&self, id: &str, request: UpdateBillRequest) -> Result<Bill, StoreError> {
        self.update_calls.set(self.update_calls.get() + 1);
        self.check_failure()?;
        let mut bills = self.bills.borrow_mut();
        let bill = bills
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::Api(404))?;
        bill.email = request.email;
        bill.expense_type = request.expense_type;
        bill.name = request.name;
        bill.amount = request.amount;
        bill.date = request.date;
        bill.status = request.status;
        bill.commentary = request.commentary;
        bill.vat = request.vat;
        bill.pct = request.pct;
        Ok(bill.clone())
    }
}

/// Fixture bills mirroring the shape the list view receives.
pub fn fixture_bills() -> Vec<Bill> {
    let base = Bill {
        id: String::new(),
        email: "a@a".to_string(),
        expense_type: "Transports".to_string(),
        name: String::new(),
        amount: 0.0,
        date: String::new(),
        status: BillStatus::Pending,
        file_url: "https://store.test/receipts/preview.jpg".to_string(),
        file_name: "preview.jpg".to_string(),
        commentary: String::new(),
        vat: "70".to_string(),
        pct: 20,
    };
    vec![
        Bill {
            id: "b1".to_string(),
            name: "encore".to_string(),
            amount: 400.0,
            date: "2004-04-04".to_string(),
            status: BillStatus::Pending,
            ..base.clone()
        },
        Bill {
            id: "b2".to_string(),
            name: "test1".to_string(),
            amount: 100.0,
            date: "2001-01-01".to_string(),
            status: BillStatus::Refused,
            ..base.clone()
        },
        Bill {
            id: "b3".to_string(),
            name: "test2".to_string(),
            amount: 200.0,
            date: "2002-02-02".to_string(),
            status: BillStatus::Accepted,
            ..base.clone()
        },
        Bill {
            id: "b4".to_string(),
            name: "test3".to_string(),
            amount: 300.0,
            date: "2003-03-03".to_string(),
            status: BillStatus::Pending,
            ..base
        },
    ]
}
